//! Binary file format for registry tables.
//!
//! A table file is a fixed header followed by the three tables, all
//! little-endian, so files are portable between hosts.
//!
//! # File Structure
//!
//! ```text
//! +------------------+
//! |     HEADER       |  96 bytes (fixed)
//! +------------------+
//! |   STRING TABLE   |  NUL-terminated labels
//! +------------------+
//! |    NODE TABLE    |  16 bytes per node
//! +------------------+
//! |    LEAF TABLE    |  4 bytes per entry
//! +------------------+
//! ```

mod format;
mod reader;
mod writer;

pub use format::*;
pub use reader::TableReader;
pub use writer::TableWriter;
