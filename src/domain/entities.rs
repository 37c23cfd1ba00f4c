//! Domain entities: catalog records and metadata

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::DomainError;

/// One catalog entry describing a single security requirement.
///
/// Every field is optional at the parse boundary. Matching reads absent
/// fields as empty strings; rendering goes through [`Control::require`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Control {
    #[serde(deserialize_with = "loose_string")]
    pub control_id: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub domain_id: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub domain_title: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub statement: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "loose_list")]
    pub profiles_hint: Vec<String>,
}

/// Fields a control must carry to be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderFields<'a> {
    pub control_id: &'a str,
    pub domain_id: &'a str,
    pub domain_title: &'a str,
    pub statement: &'a str,
}

impl Control {
    /// Sort key; a missing id sorts as the empty string.
    pub fn sort_key(&self) -> &str {
        self.control_id.as_deref().unwrap_or("")
    }

    pub fn domain_id_or_empty(&self) -> &str {
        self.domain_id.as_deref().unwrap_or("")
    }

    pub fn domain_title_or_empty(&self) -> &str {
        self.domain_title.as_deref().unwrap_or("")
    }

    /// Borrow the fields required for rendering, failing on the first one absent.
    pub fn require(&self) -> Result<RenderFields<'_>, DomainError> {
        let missing = |field: &'static str| DomainError::MissingField {
            field,
            control_id: self.control_id.clone().unwrap_or_else(|| "<unknown>".into()),
        };
        Ok(RenderFields {
            control_id: self.control_id.as_deref().ok_or_else(|| missing("control_id"))?,
            domain_id: self.domain_id.as_deref().ok_or_else(|| missing("domain_id"))?,
            domain_title: self
                .domain_title
                .as_deref()
                .ok_or_else(|| missing("domain_title"))?,
            statement: self.statement.as_deref().ok_or_else(|| missing("statement"))?,
        })
    }
}

/// Catalog-level metadata. Only `title` and `version` carry meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogMetadata {
    pub title: Option<String>,
    pub version: Option<String>,
    /// Remaining keys, kept verbatim.
    pub extra: BTreeMap<String, Value>,
}

impl CatalogMetadata {
    /// Build metadata from a JSON object; non-string title/version count as absent.
    pub fn from_map(map: &serde_json::Map<String, Value>) -> Self {
        let mut extra = BTreeMap::new();
        let mut title = None;
        let mut version = None;
        for (key, value) in map {
            match key.as_str() {
                "title" => title = value.as_str().map(str::to_owned),
                "version" => version = value.as_str().map(str::to_owned),
                _ => {
                    extra.insert(key.clone(), value.clone());
                }
            }
        }
        Self {
            title,
            version,
            extra,
        }
    }

    /// Header line `<title> (<version>)`, or `None` when the title is empty or absent.
    pub fn header(&self) -> Option<String> {
        let title = self.title.as_deref().filter(|t| !t.is_empty())?;
        let version = self.version.as_deref().unwrap_or("unknown");
        Some(format!("{} ({})", title, version))
    }
}

/// The full in-memory catalog loaded from one dataset file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub controls: Vec<Control>,
    pub metadata: CatalogMetadata,
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

/// A bare scalar reads as a one-element list.
fn loose_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
        other => scalar_text(other).into_iter().collect(),
    })
}
