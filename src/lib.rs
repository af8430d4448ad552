pub mod analyzer;
pub mod config;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod trivy;
