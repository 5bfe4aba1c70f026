// src/store.rs
//
// The Record Store: an immutable, ordered snapshot of the table, loaded once
// at startup and handed to every page by reference.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{InsightsError, Result};
use crate::record::{Column, Record};

/// Which of the expected columns the loaded file actually carried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    present: BTreeSet<Column>,
}

impl Schema {
    pub fn full() -> Self {
        Self { present: Column::ALL.into_iter().collect() }
    }

    pub fn from_columns<I: IntoIterator<Item = Column>>(cols: I) -> Self {
        Self { present: cols.into_iter().collect() }
    }

    /// Resolve a header row; unknown headers are ignored.
    pub fn from_headers<'h, I: IntoIterator<Item = &'h str>>(headers: I) -> Self {
        Self::from_columns(headers.into_iter().filter_map(Column::from_name))
    }

    pub fn has(&self, col: Column) -> bool {
        self.present.contains(&col)
    }

    pub fn missing(&self) -> Vec<Column> {
        Column::ALL.into_iter().filter(|c| !self.has(*c)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::full()
    }
}

#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    schema: Schema,
}

/// Result of the absorbing loader: always a usable store, plus the
/// message to show when loading failed.
#[derive(Debug)]
pub struct LoadOutcome {
    pub store: RecordStore,
    pub error: Option<String>,
}

impl RecordStore {
    /// Build from in-memory records; every column counts as present.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records, schema: Schema::full() }
    }

    pub fn with_schema(records: Vec<Record>, schema: Schema) -> Self {
        Self { records, schema }
    }

    pub fn empty() -> Self {
        Self { records: Vec::new(), schema: Schema::full() }
    }

    /// Read a delimited table with a header row.
    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let schema = Schema::from_headers(headers.iter());
        if schema.is_empty() {
            return Err(InsightsError::MissingHeader {
                first: headers.get(0).map(|s| s.to_string()),
            });
        }
        let missing = schema.missing();
        if !missing.is_empty() {
            warn!("Store: header lacks {:?}; those columns use defaults", missing);
        }

        let mut records = Vec::new();
        for row in rdr.deserialize::<Record>() {
            records.push(row?);
        }
        Ok(Self { records, schema })
    }

    /// Load from disk. Tab-separated when the extension says so, CSV otherwise.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| InsightsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let delimiter = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
            _ => b',',
        };
        let store = Self::from_reader(file, delimiter)?;
        info!("Store: loaded {} records from {}", store.len(), path.display());
        Ok(store)
    }

    /// Load, degrading any failure to an empty store and a display message.
    pub fn load_or_empty(path: &Path) -> LoadOutcome {
        match Self::load(path) {
            Ok(store) => LoadOutcome { store, error: None },
            Err(e) => {
                warn!("Store: load failed: {e}");
                LoadOutcome {
                    store: Self::empty(),
                    error: Some(format!("Error loading data: {e}")),
                }
            }
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, ix: usize) -> Option<&Record> {
        self.records.get(ix)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Sorted distinct values of a text column. Empty when the column is
    /// absent from the schema or not textual.
    pub fn distinct(&self, col: Column) -> Vec<String> {
        if !self.schema.has(col) {
            debug!("Store: distinct({:?}) on absent column", col);
            return Vec::new();
        }
        let set: BTreeSet<&str> = self.records.iter().filter_map(|r| r.text(col)).collect();
        set.into_iter().map(|s| s!(s)).collect()
    }

    /// Sorted union of home and away team names.
    pub fn teams(&self) -> Vec<String> {
        let mut set: BTreeSet<String> = self.distinct(Column::HomeTeam).into_iter().collect();
        set.extend(self.distinct(Column::AwayTeam));
        set.into_iter().collect()
    }
}
