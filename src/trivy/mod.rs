pub mod extractor;
pub mod loader;

pub use extractor::extract_vulnerabilities;
pub use loader::{LoadError, ScanLoader};
