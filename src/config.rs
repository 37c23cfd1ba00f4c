//! Configuration loaded from the process environment
//!
//! Precedence for the dataset location (highest first):
//! 1. `--data <path>` on the command line
//! 2. `MASVS_JSON` environment variable
//! 3. Bundled dataset next to the installed binary

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, Map};
use serde::Deserialize;

use crate::application::ApplicationError;

/// File name of the bundled MASVS dataset.
pub const DATA_FILENAME: &str = "OWASP_MASVS.v2.0.0.json";

/// Prefix for environment overrides (`MASVS_JSON`).
pub const ENV_PREFIX: &str = "MASVS";

/// Full name of the dataset environment variable.
pub const DATA_ENV_VAR: &str = "MASVS_JSON";

/// Settings for masvs-lookup.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Dataset path from `MASVS_JSON` (unexpanded)
    #[serde(rename = "json")]
    pub data_path: Option<PathBuf>,
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Load settings from the `MASVS_*` variables of the process environment.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::from_vars(std::env::vars_os())
    }

    /// Load settings from an explicit set of environment variables.
    ///
    /// Empty values are treated as unset. Variables outside the `MASVS_`
    /// prefix are ignored, as are entries whose name or value is not UTF-8.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ApplicationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        let prefix = format!("{}_", ENV_PREFIX);
        let source: Map<String, String> = vars
            .into_iter()
            .filter_map(|(k, v)| {
                let key = k.into().into_string().ok()?;
                let value = v.into().into_string().ok()?;
                Some((key, value))
            })
            .filter(|(k, _)| k.starts_with(&prefix))
            .collect();

        Config::builder()
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .ignore_empty(true)
                    .source(Some(source)),
            )
            .build()
            .and_then(|config| config.try_deserialize::<Self>())
            .map_err(config_err)
    }

    /// Settings with an explicit dataset path (as if `MASVS_JSON` were set).
    pub fn with_data_path(path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: Some(path.into()),
        }
    }
}

/// Bundled dataset location for a binary at `exe`: `<exe_dir>/../references/<DATA_FILENAME>`.
pub fn bundled_data_path(exe: &Path) -> Option<PathBuf> {
    let install_root = exe.parent()?.parent()?;
    Some(install_root.join("references").join(DATA_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_installed_binary_when_bundled_path_then_sibling_references_dir() {
        let path = bundled_data_path(Path::new("/opt/masvs/bin/masvs-lookup")).unwrap();
        assert_eq!(
            path,
            PathBuf::from("/opt/masvs/references/OWASP_MASVS.v2.0.0.json")
        );
    }

    #[test]
    fn given_bare_file_name_when_bundled_path_then_none() {
        assert_eq!(bundled_data_path(Path::new("masvs-lookup")), None);
    }

    #[test]
    fn given_masvs_json_var_when_loading_then_data_path_set() {
        let settings = Settings::from_vars([
            ("MASVS_JSON", "/data/masvs.json"),
            ("HOME", "/root"),
        ])
        .unwrap();
        assert_eq!(settings.data_path, Some(PathBuf::from("/data/masvs.json")));
    }

    #[test]
    fn given_empty_masvs_json_when_loading_then_unset() {
        let settings = Settings::from_vars([("MASVS_JSON", "")]).unwrap();
        assert_eq!(settings.data_path, None);
    }

    #[cfg(unix)]
    #[test]
    fn given_non_utf8_unrelated_var_when_loading_then_ignored() {
        use std::os::unix::ffi::OsStringExt;

        let vars = vec![
            (OsString::from("UNRELATED"), OsString::from_vec(vec![0xff])),
            (OsString::from("MASVS_JSON"), OsString::from("/data/masvs.json")),
        ];
        let settings = Settings::from_vars(vars).unwrap();
        assert_eq!(settings.data_path, Some(PathBuf::from("/data/masvs.json")));
    }

    #[test]
    fn given_explicit_data_path_when_constructing_then_set() {
        let settings = Settings::with_data_path("/tmp/x.json");
        assert_eq!(settings.data_path, Some(PathBuf::from("/tmp/x.json")));
        assert_eq!(Settings::default().data_path, None);
    }
}
