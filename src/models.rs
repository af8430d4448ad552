pub mod analysis;
pub mod scan_report;
pub mod severity_tally;
pub mod vulnerability_record;

pub use analysis::Analysis;
pub use scan_report::ScanReport;
pub use severity_tally::SeverityTally;
pub use vulnerability_record::VulnerabilityRecord;
