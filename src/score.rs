use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

const APP_DIR_NAME: &str = "snake-arcade";
const RECORD_FILE_NAME: &str = "record.txt";

/// Storage for the best score ever achieved.
pub trait RecordStore {
    /// Reads the stored record. A store with nothing in it reports `Ok(0)`.
    fn load(&mut self) -> Result<u32, RecordError>;

    /// Replaces the stored record with `score`.
    fn save(&mut self, score: u32) -> Result<(), RecordError>;
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to read record file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("record file {} does not hold a score: {content:?}", path.display())]
    Parse { path: PathBuf, content: String },
    #[error("failed to create directory for record file {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write record file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Returns the platform-correct record file path.
#[must_use]
pub fn record_path() -> PathBuf {
    let mut base = data_dir();
    base.push(RECORD_FILE_NAME);
    base
}

/// Returns the per-user directory the game keeps its files in.
#[must_use]
pub fn data_dir() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base
}

/// Record kept in a plain text file holding one decimal integer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FileRecordStore {
    path: PathBuf,
}

impl FileRecordStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordStore for FileRecordStore {
    fn load(&mut self) -> Result<u32, RecordError> {
        load_record_from_path(&self.path)
    }

    fn save(&mut self, score: u32) -> Result<(), RecordError> {
        save_record_to_path(&self.path, score)
    }
}

/// Loads the record from disk.
///
/// A missing file or a blank one means no record has been set yet.
fn load_record_from_path(path: &Path) -> Result<u32, RecordError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(source) => {
            return Err(RecordError::Read {
                path: path.to_owned(),
                source,
            });
        }
    };

    parse_record(&raw).ok_or_else(|| RecordError::Parse {
        path: path.to_owned(),
        content: raw,
    })
}

fn parse_record(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse().ok()
}

fn save_record_to_path(path: &Path, score: u32) -> Result<(), RecordError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| RecordError::CreateDir {
            path: path.to_owned(),
            source,
        })?;
    }

    fs::write(path, score.to_string()).map_err(|source| RecordError::Write {
        path: path.to_owned(),
        source,
    })
}
