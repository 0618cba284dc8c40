//! Binary format constants and structures.

use bitflags::bitflags;

use crate::tables::TrieNode;
use crate::{Error, Result};

/// Magic bytes for identifying registry table files.
pub const MAGIC: [u8; 8] = *b"DOMREG\x00\x01";

/// Current format version.
pub const FORMAT_VERSION: u32 = 1;

/// Header size in bytes.
pub const HEADER_SIZE: usize = 96;

/// Size of one node table entry in bytes.
pub const NODE_ENTRY_SIZE: usize = 16;

/// Size of one leaf table entry in bytes.
pub const LEAF_ENTRY_SIZE: usize = 4;

/// Byte range of the checksum inside the header.
pub const CHECKSUM_RANGE: std::ops::Range<usize> = 40..72;

bitflags! {
    /// Format flags for table files.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FormatFlags: u32 {
        /// Header carries a SHA-256 checksum of the file.
        const CHECKSUM = 0b00000001;
    }
}

bitflags! {
    /// Per-node flags in the node table.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct NodeFlags: u32 {
        /// The node ends a rule.
        const TERMINAL = 0b00000001;
    }
}

/// Table file header (96 bytes, little-endian).
///
/// ```text
/// 0x00  magic              [u8; 8]
/// 0x08  version            u32
/// 0x0c  flags              u32
/// 0x10  root_child_count   u32
/// 0x14  leaf_base          u32
/// 0x18  string_table_size  u32   bytes
/// 0x1c  node_count         u32   entries
/// 0x20  leaf_count         u32   entries
/// 0x24  reserved           [u8; 4]
/// 0x28  checksum           [u8; 32]
/// 0x48  reserved           [u8; 24]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableHeader {
    /// Magic bytes: "DOMREG\x00\x01"
    pub magic: [u8; 8],
    /// Format version
    pub version: u32,
    /// Format flags
    pub flags: u32,
    /// Number of top-level nodes
    pub root_child_count: u32,
    /// Child locators at or past this value index the leaf table
    pub leaf_base: u32,
    /// Size of the string table section in bytes
    pub string_table_size: u32,
    /// Number of node table entries
    pub node_count: u32,
    /// Number of leaf table entries
    pub leaf_count: u32,
    /// SHA-256 checksum of the file with this field zeroed
    pub checksum: [u8; 32],
}

impl TableHeader {
    /// Create a new header with default values.
    pub fn new() -> Self {
        Self {
            magic: MAGIC,
            version: FORMAT_VERSION,
            flags: FormatFlags::CHECKSUM.bits(),
            root_child_count: 0,
            leaf_base: 0,
            string_table_size: 0,
            node_count: 0,
            leaf_count: 0,
            checksum: [0; 32],
        }
    }

    /// Validate the header magic and version.
    pub fn validate(&self) -> Result<()> {
        if self.magic != MAGIC {
            return Err(Error::InvalidMagic);
        }
        if self.version == 0 || self.version > FORMAT_VERSION {
            return Err(Error::UnsupportedVersion(self.version));
        }
        Ok(())
    }

    /// Get format flags.
    pub fn format_flags(&self) -> FormatFlags {
        FormatFlags::from_bits_truncate(self.flags)
    }

    /// Total file size the header describes.
    pub fn file_size(&self) -> usize {
        HEADER_SIZE
            + self.string_table_size as usize
            + self.node_count as usize * NODE_ENTRY_SIZE
            + self.leaf_count as usize * LEAF_ENTRY_SIZE
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0x00..0x08].copy_from_slice(&self.magic);
        out[0x08..0x0c].copy_from_slice(&self.version.to_le_bytes());
        out[0x0c..0x10].copy_from_slice(&self.flags.to_le_bytes());
        out[0x10..0x14].copy_from_slice(&self.root_child_count.to_le_bytes());
        out[0x14..0x18].copy_from_slice(&self.leaf_base.to_le_bytes());
        out[0x18..0x1c].copy_from_slice(&self.string_table_size.to_le_bytes());
        out[0x1c..0x20].copy_from_slice(&self.node_count.to_le_bytes());
        out[0x20..0x24].copy_from_slice(&self.leaf_count.to_le_bytes());
        out[CHECKSUM_RANGE].copy_from_slice(&self.checksum);
        out
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(Error::InvalidHeaderSize {
                expected: HEADER_SIZE,
                actual: data.len(),
            });
        }

        let mut magic = [0u8; 8];
        magic.copy_from_slice(&data[0x00..0x08]);
        let mut checksum = [0u8; 32];
        checksum.copy_from_slice(&data[CHECKSUM_RANGE]);

        Ok(Self {
            magic,
            version: read_u32(data, 0x08),
            flags: read_u32(data, 0x0c),
            root_child_count: read_u32(data, 0x10),
            leaf_base: read_u32(data, 0x14),
            string_table_size: read_u32(data, 0x18),
            node_count: read_u32(data, 0x1c),
            leaf_count: read_u32(data, 0x20),
            checksum,
        })
    }
}

impl Default for TableHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a node as a 16-byte entry: label offset, first child, child
/// count, flags.
pub fn encode_node(node: &TrieNode) -> [u8; NODE_ENTRY_SIZE] {
    let flags = if node.is_terminal {
        NodeFlags::TERMINAL
    } else {
        NodeFlags::empty()
    };
    let mut out = [0u8; NODE_ENTRY_SIZE];
    out[0..4].copy_from_slice(&node.label_offset.to_le_bytes());
    out[4..8].copy_from_slice(&node.first_child.to_le_bytes());
    out[8..12].copy_from_slice(&node.child_count.to_le_bytes());
    out[12..16].copy_from_slice(&flags.bits().to_le_bytes());
    out
}

/// Decode a 16-byte node entry. Unknown flag bits are ignored.
pub fn decode_node(entry: &[u8]) -> TrieNode {
    let flags = NodeFlags::from_bits_truncate(read_u32(entry, 12));
    TrieNode::new(
        read_u32(entry, 0),
        read_u32(entry, 4),
        read_u32(entry, 8),
        flags.contains(NodeFlags::TERMINAL),
    )
}

/// Read a little-endian u32 at `offset`. The caller checks bounds.
pub(crate) fn read_u32(data: &[u8], offset: usize) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&data[offset..offset + 4]);
    u32::from_le_bytes(buf)
}
