//! Application services

pub mod dataset;
pub mod lookup;

pub use dataset::{parse_catalog, DataSources, DatasetService};
pub use lookup::{LookupResult, LookupService};
