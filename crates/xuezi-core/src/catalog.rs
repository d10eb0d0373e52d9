use std::collections::HashMap;
use std::path::Path;

use xuezi_types::WordRecord;

/// Ordered, read-only word list with id lookup
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<WordRecord>,
    id_index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from records in catalog order.
    /// Ids must be unique and every headword must have at least one character.
    pub fn from_records(records: Vec<WordRecord>) -> Result<Self, CatalogError> {
        let mut id_index = HashMap::with_capacity(records.len());

        for (idx, record) in records.iter().enumerate() {
            if record.script.is_empty() {
                return Err(CatalogError::EmptyScript(record.id.clone()));
            }
            if id_index.insert(record.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
        }

        Ok(Self {
            entries: records,
            id_index,
        })
    }

    pub fn entries(&self) -> &[WordRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&WordRecord> {
        self.id_index.get(id).and_then(|&idx| self.entries.get(idx))
    }

    /// Like `get_by_id`, for callers that render a "not found" view
    pub fn lookup(&self, id: &str) -> Result<&WordRecord, CatalogError> {
        self.get_by_id(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Merge another catalog into this one.
    /// A record whose id already exists replaces the old one in place; new ids are appended.
    pub fn merge(mut self, other: Catalog) -> Self {
        for record in other.entries {
            match self.id_index.get(&record.id) {
                Some(&idx) => {
                    tracing::debug!("Catalog entry {} overridden", record.id);
                    self.entries[idx] = record;
                }
                None => {
                    self.id_index.insert(record.id.clone(), self.entries.len());
                    self.entries.push(record);
                }
            }
        }

        self
    }
}

/// Load catalogs from files or embedded data
pub trait CatalogLoader {
    /// Parse a catalog from its serialized form
    fn load_from_str(&self, data: &str) -> Result<Catalog, CatalogError>;

    fn load_from_file(&self, path: &Path) -> Result<Catalog, CatalogError> {
        if !path.exists() {
            return Err(CatalogError::FileNotFound(path.display().to_string()));
        }
        let data = std::fs::read_to_string(path)?;
        self.load_from_str(&data)
    }

    /// Supported file formats
    fn supported_formats(&self) -> Vec<String>;
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Word not found: {0}")]
    NotFound(String),

    #[error("Duplicate word id: {0}")]
    DuplicateId(String),

    #[error("Word {0} has an empty headword")]
    EmptyScript(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
