//! Sub-scanners for tag lines, table rows and inline parameters
//!
//! Each scanner takes a fragment of line text plus the absolute character
//! offset of its first character, and returns tokens with absolute spans.
//! The scanners are pure and stateless; all cross-line state lives in the
//! session.

pub mod parameters;
pub mod table;
pub mod tags;

pub use parameters::scan_parameters;
pub use table::scan_table_row;
pub use tags::scan_tags;
