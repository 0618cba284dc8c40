//! Binary table file reader with memory-mapping support.

use memmap2::Mmap;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::path::Path;

use super::format::*;
use crate::registry::DomainRegistry;
use crate::tables::{RegistryTables, StringOffset, TrieNode};
use crate::{Error, Result};

/// Decoded registry table file.
#[derive(Debug, Clone)]
pub struct TableReader {
    header: TableHeader,
    tables: RegistryTables,
}

impl TableReader {
    /// Open and decode a table file.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        let reader = Self::from_bytes(&mmap)?;
        log::debug!("Loaded registry tables from {}", path.display());
        Ok(reader)
    }

    /// Decode a table file from bytes.
    ///
    /// The header, the checksum (when the file carries one) and the decoded
    /// tables are all validated.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let header = TableHeader::from_bytes(data)?;
        header.validate()?;

        if header.format_flags().contains(FormatFlags::CHECKSUM) {
            verify_checksum(data, &header.checksum)?;
        }

        let mut cursor = HEADER_SIZE;
        let strings = section(data, &mut cursor, "string", header.string_table_size as usize, 1)?;
        let nodes = section(data, &mut cursor, "node", header.node_count as usize, NODE_ENTRY_SIZE)?;
        let leaves = section(data, &mut cursor, "leaf", header.leaf_count as usize, LEAF_ENTRY_SIZE)?;

        let nodes: Vec<TrieNode> = nodes.chunks_exact(NODE_ENTRY_SIZE).map(decode_node).collect();
        let leaves: Vec<StringOffset> = leaves
            .chunks_exact(LEAF_ENTRY_SIZE)
            .map(|entry| read_u32(entry, 0))
            .collect();

        let tables = RegistryTables::new(
            strings.to_vec(),
            nodes,
            leaves,
            header.root_child_count as usize,
            header.leaf_base as usize,
        )?;

        Ok(Self { header, tables })
    }

    /// Get the file header.
    pub fn header(&self) -> &TableHeader {
        &self.header
    }

    pub fn tables(&self) -> &RegistryTables {
        &self.tables
    }

    pub fn into_tables(self) -> RegistryTables {
        self.tables
    }

    pub fn into_registry(self) -> DomainRegistry {
        DomainRegistry::new(self.tables)
    }
}

fn verify_checksum(data: &[u8], expected: &[u8; 32]) -> Result<()> {
    let mut hasher = Sha256::new();
    hasher.update(&data[..CHECKSUM_RANGE.start]);
    hasher.update([0u8; 32]);
    hasher.update(&data[CHECKSUM_RANGE.end..]);
    if hasher.finalize().as_slice() != expected {
        return Err(Error::ChecksumMismatch);
    }
    Ok(())
}

/// Slice the next `count * entry_size` bytes at `cursor`.
fn section<'d>(
    data: &'d [u8],
    cursor: &mut usize,
    name: &'static str,
    count: usize,
    entry_size: usize,
) -> Result<&'d [u8]> {
    let available = data.len().saturating_sub(*cursor);
    let needed = count.checked_mul(entry_size).unwrap_or(usize::MAX);
    if needed > available {
        return Err(Error::Truncated {
            section: name,
            needed,
            available,
        });
    }
    let bytes = &data[*cursor..*cursor + needed];
    *cursor += needed;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::TableWriter;
    use crate::tables::fixtures::simple_tables;

    fn simple_file() -> Vec<u8> {
        TableWriter::new().write(&simple_tables()).unwrap()
    }

    #[test]
    fn test_read_back() {
        let reader = TableReader::from_bytes(&simple_file()).unwrap();
        let original = simple_tables();
        let tables = reader.tables();

        assert_eq!(tables.strings(), original.strings());
        assert_eq!(tables.nodes(), original.nodes());
        assert_eq!(tables.leaves(), original.leaves());
        assert_eq!(tables.root_child_count(), 2);
        assert_eq!(reader.header().leaf_base, 5);

        let registry = reader.into_registry();
        assert_eq!(registry.registry_length("www.foo.bar.foo"), 11);
    }

    #[test]
    fn test_rejects_bad_magic() {
        let mut data = simple_file();
        data[0] = b'X';
        assert!(matches!(TableReader::from_bytes(&data), Err(Error::InvalidMagic)));
    }

    #[test]
    fn test_rejects_corruption() {
        let mut data = simple_file();
        let last = data.len() - 1;
        data[last] ^= 0xff;
        assert!(matches!(
            TableReader::from_bytes(&data),
            Err(Error::ChecksumMismatch)
        ));
    }

    #[test]
    fn test_rejects_truncation() {
        let data = simple_file();
        let err = TableReader::from_bytes(&data[..data.len() - 4]).unwrap_err();
        // Truncation also breaks the checksum, which is checked first.
        assert!(matches!(err, Error::ChecksumMismatch));

        let mut unchecked = data.clone();
        unchecked[0x0c..0x10].copy_from_slice(&0u32.to_le_bytes());
        let err = TableReader::from_bytes(&unchecked[..unchecked.len() - 4]).unwrap_err();
        assert!(matches!(err, Error::Truncated { section: "leaf", .. }));

        let err = TableReader::from_bytes(&data[..10]).unwrap_err();
        assert!(matches!(err, Error::InvalidHeaderSize { .. }));
    }

    #[test]
    fn test_rejects_invalid_tables() {
        let mut data = simple_file();
        // Clear the checksum flag, then point the root count past the node table.
        data[0x0c..0x10].copy_from_slice(&0u32.to_le_bytes());
        data[0x10..0x14].copy_from_slice(&9u32.to_le_bytes());
        let err = TableReader::from_bytes(&data).unwrap_err();
        assert!(matches!(err, Error::RootCountOutOfRange { .. }));
    }

    #[test]
    fn test_open() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&simple_file()).unwrap();
        file.flush().unwrap();

        let reader = TableReader::open(file.path()).unwrap();
        assert_eq!(reader.tables().nodes().len(), 5);

        assert!(matches!(
            TableReader::open(Path::new("/nonexistent/registry.bin")),
            Err(Error::Io(_))
        ));
    }
}
