//! Book collection storage

use std::sync::Arc;

use tokio::sync::Mutex;

use super::seed;
use crate::{
    error::{AppError, AppResult},
    models::{Book, BookRequest},
};

fn not_found(id: impl std::fmt::Display) -> AppError {
    AppError::NotFound(format!("Book {} not found", id))
}

/// Ordered in-memory book collection.
///
/// Performs no validation: callers hand it requests that already passed
/// the boundary checks.
#[derive(Debug, Default, Clone)]
pub struct BookStore {
    books: Vec<Book>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Store holding the startup collection
    pub fn seeded() -> Self {
        Self::with_books(seed::seed_books())
    }

    /// All books in store order
    pub fn list_all(&self) -> &[Book] {
        &self.books
    }

    pub fn get_by_id(&self, id: i64) -> AppResult<&Book> {
        self.books
            .iter()
            .find(|book| book.id == id)
            .ok_or_else(|| not_found(id))
    }

    /// Books matching every provided attribute exactly.
    ///
    /// A value of zero counts as not provided, so `rating = 0` returns the
    /// same books as no rating filter at all.
    #[allow(clippy::float_cmp)]
    pub fn filter(&self, rating: Option<f64>, published_year: Option<i32>) -> Vec<Book> {
        let rating = rating.filter(|r| *r != 0.0);
        let published_year = published_year.filter(|y| *y != 0);

        self.books
            .iter()
            .filter(|book| rating.map_or(true, |r| book.rating == r))
            .filter(|book| published_year.map_or(true, |y| book.published_year == y))
            .cloned()
            .collect()
    }

    /// Append a new book. Any id carried by the request is ignored.
    pub fn create(&mut self, request: BookRequest) -> Book {
        let book = Book::from_request(self.next_id(), request);
        self.books.push(book.clone());
        book
    }

    /// Replace every book whose id matches the request's id.
    pub fn update(&mut self, request: BookRequest) -> AppResult<()> {
        let id = request.id.ok_or_else(|| AppError::NotFound("Book id missing".to_string()))?;

        let mut changed = false;
        for book in self.books.iter_mut().filter(|book| book.id == id) {
            *book = Book::from_request(id, request.clone());
            changed = true;
        }

        if !changed {
            return Err(not_found(id));
        }
        Ok(())
    }

    /// Remove the first book with the given id
    pub fn delete(&mut self, id: i64) -> AppResult<Book> {
        let position = self
            .books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(|| not_found(id))?;
        Ok(self.books.remove(position))
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    // Derived from the tail, not the max id: deleting the last book frees its id.
    fn next_id(&self) -> i64 {
        self.books.last().map_or(1, |book| book.id + 1)
    }
}

/// Shared handle to the book store; every operation holds the lock for its
/// whole duration.
#[derive(Clone)]
pub struct BooksRepository {
    store: Arc<Mutex<BookStore>>,
}

impl BooksRepository {
    pub fn new(store: BookStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    pub async fn list(&self) -> Vec<Book> {
        self.store.lock().await.list_all().to_vec()
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.store.lock().await.get_by_id(id).cloned()
    }

    pub async fn filter(&self, rating: Option<f64>, published_year: Option<i32>) -> Vec<Book> {
        self.store.lock().await.filter(rating, published_year)
    }

    pub async fn create(&self, request: BookRequest) -> Book {
        self.store.lock().await.create(request)
    }

    pub async fn update(&self, request: BookRequest) -> AppResult<()> {
        self.store.lock().await.update(request)
    }

    pub async fn delete(&self, id: i64) -> AppResult<Book> {
        self.store.lock().await.delete(id)
    }

    pub async fn count(&self) -> usize {
        self.store.lock().await.len()
    }
}
