pub mod page_parser;
pub mod sort_parser;

pub use page_parser::PageRequest;
pub use sort_parser::{SortOrder, SortSpec, SORTABLE_PROPERTIES};
