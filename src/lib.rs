pub mod coordinate_parser;
pub mod file_input;
pub mod types;
