//! Read-only persistence layer, split by table.

mod connection;
mod interlinear;
mod strongs;

pub use connection::{open_read_only, verify_schema};
pub use interlinear::fetch_parts;
pub use strongs::fetch_lexicon_entry;
