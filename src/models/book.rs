//! Book model and request/query types

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Stored book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub description: String,
    pub rating: f64,
    pub published_year: i32,
}

impl Book {
    /// Build a stored record from an already validated request.
    /// The request's own `id` is discarded in favour of `id`.
    pub fn from_request(id: i64, request: BookRequest) -> Self {
        Self {
            id,
            title: request.title,
            author: request.author,
            description: request.description,
            rating: request.rating,
            published_year: request.published_year,
        }
    }
}

/// Create / update book request.
///
/// Example body:
///
/// ```json
/// {
///   "title": "To Kill a Mockingbird",
///   "author": "Harper Lee",
///   "description": "A novel set in the American South during the 1930s.",
///   "rating": 4.8,
///   "published_year": 2012
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct BookRequest {
    /// No need to pass an ID on creation; required to address a book on update
    #[serde(default)]
    pub id: Option<i64>,
    #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author must not be empty"))]
    pub author: String,
    #[validate(length(min = 1, max = 100, message = "Description must be 1 to 100 characters"))]
    pub description: String,
    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5"))]
    pub rating: f64,
    #[validate(range(min = 0, message = "Published year must not be negative"))]
    pub published_year: i32,
}

/// Book filter query parameters
#[derive(Debug, Default, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_finite_rating"))]
pub struct BookQuery {
    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5"))]
    pub rating: Option<f64>,
    #[validate(range(min = 1990, max = 2030, message = "Published year must be between 1990 and 2030"))]
    pub published_year: Option<i32>,
}

// NaN slips through range checks, every comparison with it is false.
fn validate_finite_rating(query: &BookQuery) -> Result<(), ValidationError> {
    match query.rating {
        Some(rating) if !rating.is_finite() => {
            let mut error = ValidationError::new("range");
            error.message = Some("Rating must be between 0 and 5".into());
            Err(error)
        }
        _ => Ok(()),
    }
}
