use crate::models::book::{Book, BookId, BookPatch, NewBook};
use crate::models::storage::{BookStore, StorageError};
use thiserror::Error;

pub type Store = dyn BookStore + Send + Sync;

#[derive(Error, Debug)]
pub enum BookServiceError {
    #[error("Book {0} not found")]
    NotFound(BookId),
    #[error("No id left above {0}")]
    IdsExhausted(BookId),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// `max(existing ids, 0) + 1`. Deleting the highest id frees it for reuse.
/// `None` once the highest id is `BookId::MAX`.
pub fn next_id(books: &[Book]) -> Option<BookId> {
    books
        .iter()
        .map(|book| book.id)
        .max()
        .unwrap_or(0)
        .checked_add(1)
}

pub fn available_only(books: Vec<Book>) -> Vec<Book> {
    books.into_iter().filter(|book| book.available).collect()
}

fn position_of(books: &[Book], id: BookId) -> Result<usize, BookServiceError> {
    books
        .iter()
        .position(|book| book.id == id)
        .ok_or(BookServiceError::NotFound(id))
}

pub async fn list_books(store: &Store) -> Result<Vec<Book>, BookServiceError> {
    Ok(store.load().await?)
}

pub async fn list_available_books(store: &Store) -> Result<Vec<Book>, BookServiceError> {
    Ok(available_only(store.load().await?))
}

pub async fn create_book(store: &Store, new_book: NewBook) -> Result<Book, BookServiceError> {
    let mut books = store.load().await?;

    let id = next_id(&books).ok_or(BookServiceError::IdsExhausted(BookId::MAX))?;

    let book = Book::from_new(id, new_book);
    books.push(book.clone());

    store.save(&books).await?;
    Ok(book)
}

pub async fn update_book(
    store: &Store,
    id: BookId,
    patch: BookPatch,
) -> Result<Book, BookServiceError> {
    let mut books = store.load().await?;
    let idx = position_of(&books, id)?;

    books[idx].apply(patch);
    let updated = books[idx].clone();

    store.save(&books).await?;
    Ok(updated)
}

pub async fn delete_book(store: &Store, id: BookId) -> Result<Book, BookServiceError> {
    let mut books = store.load().await?;
    let idx = position_of(&books, id)?;

    let deleted = books.remove(idx);

    store.save(&books).await?;
    Ok(deleted)
}
