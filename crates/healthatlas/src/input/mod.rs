//! Input parsing and data source handling.

mod parser;
mod source;

pub use parser::{IN_MEMORY_LABEL, Parser, ParserConfig};
pub use source::{DataTable, SourceMetadata};
