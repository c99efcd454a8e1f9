//! Reference catalog module
//!
//! Loads the static table of books (id, chapter count, verses per
//! chapter) that defines chapter-end and book-end boundaries. Read once
//! at startup and immutable for the life of the process.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{LectioError, Result};

/// A book of the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Stable id used in plan files
    pub id: String,
    /// Number of chapters
    pub chapter_count: u32,
    /// Verses per chapter, indexed by chapter - 1
    pub verse_counts: Vec<u32>,
}

impl Book {
    /// Number of verses in the given chapter (1-based)
    pub fn verses_in(&self, chapter: u32) -> Result<u32> {
        chapter
            .checked_sub(1)
            .and_then(|i| self.verse_counts.get(i as usize))
            .copied()
            .ok_or_else(|| {
                LectioError::Catalog(format!(
                    "chapter {} out of range for book '{}'",
                    chapter, self.id
                ))
            })
    }
}

/// The ordered book catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, validating structural invariants
    pub fn new(books: Vec<Book>) -> Result<Self> {
        let mut index = HashMap::new();

        for (i, book) in books.iter().enumerate() {
            if book.chapter_count == 0 {
                return Err(LectioError::Catalog(format!(
                    "book '{}' has no chapters",
                    book.id
                )));
            }

            if book.verse_counts.len() != book.chapter_count as usize {
                return Err(LectioError::Catalog(format!(
                    "book '{}' lists {} chapters but {} verse counts",
                    book.id,
                    book.chapter_count,
                    book.verse_counts.len()
                )));
            }

            if book.verse_counts.iter().any(|&v| v == 0) {
                return Err(LectioError::Catalog(format!(
                    "book '{}' has a chapter with no verses",
                    book.id
                )));
            }

            if index.insert(book.id.clone(), i).is_some() {
                return Err(LectioError::Catalog(format!(
                    "duplicate book id '{}'",
                    book.id
                )));
            }
        }

        Ok(Self { books, index })
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            LectioError::Catalog(format!(
                "Cannot read book catalog from '{}': {}",
                path.display(),
                e
            ))
        })?;

        let books: Vec<Book> = serde_json::from_str(&content)?;
        Self::new(books)
    }

    pub fn get(&self, id: &str) -> Option<&Book> {
        self.index.get(id).map(|&i| &self.books[i])
    }

    pub fn lookup(&self, id: &str) -> Result<&Book> {
        self.get(id)
            .ok_or_else(|| LectioError::UnknownBook(id.to_string()))
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// The book immediately following `id` in catalog order
    ///
    /// Fails for an unknown id and for the last book of the catalog.
    pub fn next_book(&self, id: &str) -> Result<&Book> {
        let i = self
            .index_of(id)
            .ok_or_else(|| LectioError::UnknownBook(id.to_string()))?;

        self.books
            .get(i + 1)
            .ok_or_else(|| LectioError::EndOfCatalog(id.to_string()))
    }
}
