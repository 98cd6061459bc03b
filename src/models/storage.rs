use crate::models::book::Book;
use crate::utils::file::write_atomically;
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Whole-collection access to the persisted books.
#[async_trait]
pub trait BookStore {
    /// Reads every record. A missing store is created empty.
    async fn load(&self) -> Result<Vec<Book>, StorageError>;
    /// Replaces the stored collection with `books`.
    async fn save(&self, books: &[Book]) -> Result<(), StorageError>;
    async fn test_connection(&self) -> Result<(), StorageError>;
}

pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn initialize(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| StorageError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        fs::write(&self.path, "[]")
            .await
            .map_err(|source| StorageError::Write {
                path: self.path.clone(),
                source,
            })
    }
}

#[async_trait]
impl BookStore for JsonFileBackend {
    async fn load(&self) -> Result<Vec<Book>, StorageError> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(
                    "Books file {} not found, creating an empty one",
                    self.path.display()
                );
                self.initialize().await?;
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&data).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    async fn save(&self, books: &[Book]) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(books)?;

        write_atomically(&self.path, json.as_bytes())
            .await
            .map_err(|source| StorageError::Write {
                path: self.path.clone(),
                source,
            })
    }

    async fn test_connection(&self) -> Result<(), StorageError> {
        self.load().await.map(|_| ())
    }
}

/// Keeps the collection in process memory. Nothing survives a restart.
#[derive(Default)]
pub struct InMemoryBackend {
    books: Mutex<Vec<Book>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Mutex::new(books),
        }
    }
}

#[async_trait]
impl BookStore for InMemoryBackend {
    async fn load(&self) -> Result<Vec<Book>, StorageError> {
        Ok(self.books.lock().await.clone())
    }

    async fn save(&self, books: &[Book]) -> Result<(), StorageError> {
        *self.books.lock().await = books.to_vec();
        Ok(())
    }

    async fn test_connection(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
