pub mod header;
pub mod model;
pub mod reader;
pub mod report;
pub mod writer;
