pub mod report;
pub mod summary;
pub mod terminal;

pub use report::{write_reports, ReportWriter};
pub use summary::{write_summary_csv, write_summary_json};
pub use terminal::print_summary;
