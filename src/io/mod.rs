pub mod reader;
pub mod writers;

pub use reader::{read_answer_sheet, read_answer_sheet_from_reader};
