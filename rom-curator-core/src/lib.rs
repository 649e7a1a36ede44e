//! Core identity model for ROM collection curation.
//!
//! This crate turns raw ROM filenames (plus optional catalog metadata) into
//! structured [`TaggedRecord`]s: canonical regions and languages, revision
//! numbers, prototype/hack flags, and normalized identity names. It is pure
//! string processing over in-memory values; it performs no I/O and defines
//! no error type.

pub mod lexicon;
pub mod parser;
pub mod types;

pub use parser::{is_rom_file, normalize_name, parse_filename, primary_region};
pub use types::{GameMetadata, TaggedRecord};
