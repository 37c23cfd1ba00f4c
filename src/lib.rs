//! masvs-lookup: keyword, domain and profile lookup over the OWASP MASVS catalog
//!
//! Layers, leaves first:
//! - [`domain`]: control records, query model, filter engine
//! - [`application`]: dataset resolution/loading and the lookup pipeline
//! - [`infrastructure`]: filesystem boundary and service wiring
//! - [`cli`]: argument parsing, rendering, exit-code mapping

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
