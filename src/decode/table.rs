//! Two-column driver decode tables (`key,value` per row).

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

const VERSION_KEY: &str = "version";

/// Lookup from a raw driver version key to its display label.
///
/// A leading `version,<n>` row is the table's schema version and is kept out
/// of the lookup entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverVersionTable {
    version: Option<u32>,
    entries: HashMap<String, String>,
}

impl DriverVersionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            version: None,
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, csv::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut table = Self::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let (Some(key), Some(value)) = (record.get(0), record.get(1)) else {
                debug!(row = index + 1, "skipping short decode table row");
                continue;
            };
            if index == 0 && key == VERSION_KEY {
                if let Ok(version) = value.parse::<u32>() {
                    table.version = Some(version);
                    continue;
                }
            }
            table.entries.insert(key.to_string(), value.to_string());
        }
        Ok(table)
    }

    /// Read a table from disk. A missing file gives an empty table.
    pub fn load(path: &Path) -> Result<Self, csv::Error> {
        if !path.exists() {
            info!(path = %path.display(), "decode table not found, driver names will not be decoded");
            return Ok(Self::new());
        }
        let file = std::fs::File::open(path)?;
        let table = Self::from_reader(file)?;
        debug!(path = %path.display(), entries = table.len(), version = ?table.version, "loaded decode table");
        Ok(table)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn version(&self) -> Option<u32> {
        self.version
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Schema version from the first line of a table file (`version,<n>`).
pub fn version_line(text: &str) -> Option<u32> {
    let first = text.lines().next()?;
    let (_, version) = first.split_once(',')?;
    version.trim().parse().ok()
}
