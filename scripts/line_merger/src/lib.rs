mod group_store;
pub mod line_parser;
pub mod merger;
pub mod types;

pub use group_store::GroupStore;
pub use line_parser::{parse_line, split_lines};
pub use merger::{merge, merge_content};
pub use types::{MergeError, MergeReport, MergeResult, ParsedLine};
