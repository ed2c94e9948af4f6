//! Repository layer over the in-memory book collection

pub mod books;
pub mod seed;

pub use books::{BookStore, BooksRepository};

/// Main repository struct holding every store the services need
#[derive(Clone)]
pub struct Repository {
    pub books: BooksRepository,
}

impl Repository {
    /// Create a new repository around the given book store
    pub fn new(store: BookStore) -> Self {
        Self {
            books: BooksRepository::new(store),
        }
    }
}
