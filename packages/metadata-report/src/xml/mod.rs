//! XML navigation helpers and path selection.

mod path;
mod utils;

pub use path::{select, select_first, NamespaceMode};
pub use utils::{collect_text, get_attribute, get_tag_name, is_qualified, parse_document};
