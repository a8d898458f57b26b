pub mod not_found;
pub mod reader;
pub mod shelf;
