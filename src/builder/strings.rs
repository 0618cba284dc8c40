//! String table construction with suffix sharing.

use ahash::AHashMap;

use crate::tables::StringOffset;

/// A NUL-separated label table plus the offset of every label in it.
///
/// A label that is a suffix of a longer emitted label is not emitted again:
/// with `fortmissoula` in the table, `missoula` points 4 bytes into it.
#[derive(Debug, Default)]
pub(crate) struct StringTable {
    bytes: Vec<u8>,
    offsets: AHashMap<String, StringOffset>,
}

impl StringTable {
    pub fn build<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let mut unique: Vec<&str> = labels.into_iter().collect();
        unique.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        unique.dedup();

        let mut table = Self::default();
        for label in unique {
            if table.offsets.contains_key(label) {
                continue;
            }
            let offset = table.bytes.len();
            table.bytes.extend_from_slice(label.as_bytes());
            table.bytes.push(0);

            for (i, _) in label.char_indices() {
                table
                    .offsets
                    .entry(label[i..].to_string())
                    .or_insert((offset + i) as StringOffset);
            }
        }
        table
    }

    pub fn offset(&self, label: &str) -> Option<StringOffset> {
        self.offsets.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_sharing() {
        let table = StringTable::build(["missoula", "fortmissoula", "com", "om"]);
        assert_eq!(table.offset("fortmissoula"), Some(0));
        assert_eq!(table.offset("missoula"), Some(4));
        assert_eq!(table.offset("com"), Some(13));
        assert_eq!(table.offset("om"), Some(14));
        assert_eq!(table.into_bytes(), b"fortmissoula\0com\0");
    }

    #[test]
    fn test_repeats_and_markers() {
        let table = StringTable::build(["foo", "!foo", "foo", "*"]);
        assert_eq!(table.offset("!foo"), Some(0));
        assert_eq!(table.offset("foo"), Some(1));
        assert_eq!(table.offset("*"), Some(5));
        assert_eq!(table.len(), 7);
    }

    #[test]
    fn test_unknown_label() {
        let table = StringTable::build(["com"]);
        assert_eq!(table.offset("net"), None);
    }
}
