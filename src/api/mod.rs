pub mod report;
pub mod scan;
