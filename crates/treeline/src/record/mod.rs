//! Line record codec.
//!
//! One record per line, comma separated: `id,label[,children[,x;y]]`.
//! `children` is a `;`-joined id list and `x;y` a persisted position.
//! Parsing is permissive: short lines are skipped and malformed fields are
//! treated as absent, never as errors.

pub mod parse;
pub mod serialize;

#[cfg(test)]
mod tests;

pub use parse::{parse, parse_record};
pub use serialize::{format_record, serialize};

/// Separates the fields of a record.
pub const FIELD_SEPARATOR: char = ',';
/// Separates child ids, and the two coordinates of a position.
pub const LIST_SEPARATOR: char = ';';
