//! Binary table file writer.

use sha2::{Digest, Sha256};

use super::format::*;
use crate::tables::RegistryTables;
use crate::Result;

/// Binary table file writer.
pub struct TableWriter {
    buffer: Vec<u8>,
}

impl TableWriter {
    /// Create a new writer.
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(64 * 1024),
        }
    }

    /// Serialize `tables` into a table file.
    pub fn write(&mut self, tables: &RegistryTables) -> Result<Vec<u8>> {
        self.buffer.clear();

        // Reserve space for header
        self.buffer.resize(HEADER_SIZE, 0);

        self.buffer.extend_from_slice(tables.strings());
        for node in tables.nodes() {
            self.buffer.extend_from_slice(&encode_node(node));
        }
        for offset in tables.leaves() {
            self.buffer.extend_from_slice(&offset.to_le_bytes());
        }

        let header = TableHeader {
            root_child_count: tables.root_child_count() as u32,
            leaf_base: tables.leaf_base() as u32,
            string_table_size: tables.strings().len() as u32,
            node_count: tables.nodes().len() as u32,
            leaf_count: tables.leaves().len() as u32,
            ..TableHeader::new()
        };
        self.buffer[..HEADER_SIZE].copy_from_slice(&header.to_bytes());

        // The checksum field is still zero here.
        let checksum = Sha256::digest(&self.buffer);
        self.buffer[CHECKSUM_RANGE].copy_from_slice(&checksum);

        log::debug!("Wrote registry table file: {} bytes", self.buffer.len());

        Ok(std::mem::take(&mut self.buffer))
    }
}

impl Default for TableWriter {
    fn default() -> Self {
        Self::new()
    }
}
