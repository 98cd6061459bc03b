use crate::models::book::{Book, BookId, NewBook};
use crate::models::storage::{BookStore, InMemoryBackend, StorageError};
use async_trait::async_trait;
use std::io;
use std::path::PathBuf;
use tokio::sync::Barrier;

pub fn book(id: BookId, title: &str, author: &str, available: bool) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        available,
    }
}

pub fn new_book(title: &str, author: &str, available: bool) -> NewBook {
    NewBook {
        title: title.to_string(),
        author: author.to_string(),
        available,
    }
}

/// Loads succeed, every save fails.
pub struct FailingWrites {
    inner: InMemoryBackend,
}

impl FailingWrites {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            inner: InMemoryBackend::with_books(books),
        }
    }
}

#[async_trait]
impl BookStore for FailingWrites {
    async fn load(&self) -> Result<Vec<Book>, StorageError> {
        self.inner.load().await
    }

    async fn save(&self, _books: &[Book]) -> Result<(), StorageError> {
        Err(StorageError::Write {
            path: PathBuf::from("books.json"),
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        })
    }

    async fn test_connection(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

/// Holds every `load` until `parties` callers have reached it.
pub struct GatedLoads {
    inner: InMemoryBackend,
    barrier: Barrier,
}

impl GatedLoads {
    pub fn new(parties: usize) -> Self {
        Self {
            inner: InMemoryBackend::new(),
            barrier: Barrier::new(parties),
        }
    }

    pub fn inner(&self) -> &InMemoryBackend {
        &self.inner
    }
}

#[async_trait]
impl BookStore for GatedLoads {
    async fn load(&self) -> Result<Vec<Book>, StorageError> {
        let books = self.inner.load().await?;
        self.barrier.wait().await;
        Ok(books)
    }

    async fn save(&self, books: &[Book]) -> Result<(), StorageError> {
        self.inner.save(books).await
    }

    async fn test_connection(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
