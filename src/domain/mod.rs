//! Domain layer: catalog entities, query model and filter engine
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod filter;
pub mod query;

pub use entities::{Catalog, CatalogMetadata, Control, RenderFields};
pub use error::DomainError;
pub use filter::filter_controls;
pub use query::{normalize_domain, Level, Query};
