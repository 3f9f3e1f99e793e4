//! Records rejected because of an invalid RUT.

/// A rejected record with every original field rendered as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRutEntry {
    pub row: usize,
    pub timestamp: String,
    pub raw_rut: String,
    /// `(column, value)` pairs in source column order.
    pub fields: Vec<(String, String)>,
}

/// Append-only log of rejected records, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvalidRutLog {
    entries: Vec<InvalidRutEntry>,
}

impl InvalidRutLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: InvalidRutEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[InvalidRutEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
