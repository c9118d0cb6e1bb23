//! SeaORM entity definitions.

pub mod summary;
pub mod test_case;
pub mod test_case_evidence;
pub mod test_report;
