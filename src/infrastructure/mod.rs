//! Infrastructure layer: I/O implementations and service wiring
//!
//! This layer implements I/O boundary traits and wires up services.

pub mod di;
pub mod traits;

pub use di::ServiceContainer;
pub use traits::{FileSystem, RealFileSystem};
