//! Books loaded into the collection at startup

use crate::models::Book;

fn book(
    id: i64,
    title: &str,
    author: &str,
    description: &str,
    rating: f64,
    published_year: i32,
) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        description: description.to_string(),
        rating,
        published_year,
    }
}

/// The eight books the collection starts with, ids 1 to 8
pub fn seed_books() -> Vec<Book> {
    vec![
        book(
            1,
            "To Kill a Mockingbird",
            "Harper Lee",
            "A novel set in the American South during the 1930s, focusing on themes of racial injustice and moral growth.",
            4.8,
            2010,
        ),
        book(
            2,
            "1984",
            "George Orwell",
            "A dystopian novel depicting a totalitarian regime that uses surveillance and propaganda to control its citizens.",
            4.7,
            2012,
        ),
        book(
            3,
            "The Great Gatsby",
            "F. Scott Fitzgerald",
            "A story about the enigmatic Jay Gatsby and his unrequited love for Daisy Buchanan, set in the Roaring Twenties.",
            4.6,
            2010,
        ),
        book(
            4,
            "Pride and Prejudice",
            "Jane Austen",
            "A romantic novel that explores the themes of love, class, and societal expectations through the story of Elizabeth Bennet and Mr. Darcy.",
            4.9,
            2012,
        ),
        book(
            5,
            "The Catcher in the Rye",
            "J.D. Salinger",
            "A coming-of-age novel following the experiences of Holden Caulfield, a disillusioned teenager in New York City.",
            4.4,
            2012,
        ),
        book(
            6,
            "The Hobbit",
            "J.R.R. Tolkien",
            "A fantasy novel about Bilbo Baggins' adventurous journey to reclaim a treasure guarded by the dragon Smaug.",
            4.8,
            2009,
        ),
        book(
            7,
            "The Alchemist",
            "Paulo Coelho",
            "A philosophical tale about Santiago, a shepherd boy, who embarks on a journey to find a treasure, learning about the importance of following one's dreams.",
            4.7,
            2020,
        ),
        book(
            8,
            "Brave New World",
            "Aldous Huxley",
            "A dystopian novel set in a future society characterized by technological advancements and the loss of individuality.",
            4.5,
            2012,
        ),
    ]
}
