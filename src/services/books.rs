//! Book collection service

use crate::{
    error::AppResult,
    models::{Book, BookQuery, BookRequest},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List every book in collection order
    pub async fn list(&self) -> Vec<Book> {
        self.repository.books.list().await
    }

    /// Number of books currently stored
    pub async fn count(&self) -> usize {
        self.repository.books.count().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Filter books by exact rating and/or publication year
    pub async fn filter(&self, query: &BookQuery) -> Vec<Book> {
        tracing::debug!(
            "Filtering books - rating: {:?}, published_year: {:?}",
            query.rating,
            query.published_year
        );
        let books = self
            .repository
            .books
            .filter(query.rating, query.published_year)
            .await;
        tracing::debug!("Filter matched {} books", books.len());
        books
    }

    pub async fn create(&self, request: BookRequest) -> Book {
        let book = self.repository.books.create(request).await;
        tracing::info!("Book created: id={} title={:?}", book.id, book.title);
        book
    }

    pub async fn update(&self, request: BookRequest) -> AppResult<()> {
        let id = request.id;
        self.repository.books.update(request).await?;
        tracing::info!("Book updated: id={:?}", id);
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let removed = self.repository.books.delete(id).await?;
        tracing::info!("Book deleted: id={} title={:?}", removed.id, removed.title);
        Ok(())
    }
}
