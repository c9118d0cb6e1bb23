//! API models for test reports and their children.

pub mod decode;
pub mod summary;
pub mod test_case;
pub mod test_case_evidence;
pub mod test_report;

pub use summary::Summary;
pub use test_case::TestCase;
pub use test_case_evidence::TestCaseEvidence;
pub use test_report::TestReport;
