//! Continuation inference module
//!
//! Pure rules that compute the default starting point for the next day's
//! reading from the previous day's passage, using the catalog to detect
//! chapter-end and book-end boundaries.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::Passage;

/// Default starting point derived from a prior passage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Continuation {
    pub book: String,
    pub chapter: u32,
    pub verse: Option<u32>,
}

/// Whether the passage ends on the last verse (or whole last chapter) of
/// its book
pub fn is_end_of_book(catalog: &Catalog, passage: &Passage) -> Result<bool> {
    let book = catalog.lookup(&passage.book)?;

    if passage.end.chapter != book.chapter_count {
        return Ok(false);
    }

    match passage.end.verse {
        None => Ok(true),
        Some(verse) => Ok(verse == book.verses_in(passage.end.chapter)?),
    }
}

/// Whether the passage ends on a chapter boundary
///
/// A chapter-only passage always does; a verse-level passage does when
/// its end verse is the last verse of the end chapter.
pub fn is_end_of_chapter(catalog: &Catalog, passage: &Passage) -> Result<bool> {
    match passage.end.verse {
        None => Ok(true),
        Some(verse) => {
            let book = catalog.lookup(&passage.book)?;
            Ok(verse == book.verses_in(passage.end.chapter)?)
        }
    }
}

/// Compute the default book/chapter/verse continuing from `passage`
///
/// Chapter-only passages propagate no verse; verse-level passages always
/// propagate one. A passage ending at the last verse of the last book
/// fails with an end-of-catalog error rather than defaulting silently.
pub fn continue_from(catalog: &Catalog, passage: &Passage) -> Result<Continuation> {
    let end_of_book = is_end_of_book(catalog, passage)?;
    let end_of_chapter = is_end_of_chapter(catalog, passage)?;

    let book = if end_of_book {
        catalog.next_book(&passage.book)?.id.clone()
    } else {
        passage.book.clone()
    };

    let chapter = if end_of_book {
        1
    } else if end_of_chapter {
        passage.end.chapter + 1
    } else {
        passage.end.chapter
    };

    let verse = match passage.end.verse {
        None => None,
        Some(_) if end_of_chapter => Some(1),
        Some(verse) => Some(verse + 1),
    };

    Ok(Continuation {
        book,
        chapter,
        verse,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Book;
    use crate::error::LectioError;
    use crate::models::Reference;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Book {
                id: "A".to_string(),
                chapter_count: 3,
                verse_counts: vec![10, 10, 10],
            },
            Book {
                id: "B".to_string(),
                chapter_count: 2,
                verse_counts: vec![5, 5],
            },
        ])
        .unwrap()
    }

    fn verse_passage(book: &str, chapter: u32, verse: u32) -> Passage {
        Passage {
            book: book.to_string(),
            start: Reference::verse(chapter, verse),
            end: Reference::verse(chapter, verse),
        }
    }

    fn chapter_passage(book: &str, start: u32, end: u32) -> Passage {
        Passage {
            book: book.to_string(),
            start: Reference::chapter(start),
            end: Reference::chapter(end),
        }
    }

    #[test]
    fn test_end_of_book_at_last_verse() {
        let catalog = catalog();
        assert!(is_end_of_book(&catalog, &verse_passage("A", 3, 10)).unwrap());
        assert!(!is_end_of_book(&catalog, &verse_passage("A", 3, 9)).unwrap());
        assert!(!is_end_of_book(&catalog, &verse_passage("A", 2, 10)).unwrap());
    }

    #[test]
    fn test_end_of_book_chapter_only() {
        let catalog = catalog();
        assert!(is_end_of_book(&catalog, &chapter_passage("A", 2, 3)).unwrap());
        assert!(!is_end_of_book(&catalog, &chapter_passage("A", 1, 2)).unwrap());
    }

    #[test]
    fn test_end_of_chapter() {
        let catalog = catalog();
        assert!(is_end_of_chapter(&catalog, &verse_passage("A", 1, 10)).unwrap());
        assert!(!is_end_of_chapter(&catalog, &verse_passage("A", 1, 4)).unwrap());
        assert!(is_end_of_chapter(&catalog, &chapter_passage("A", 1, 1)).unwrap());
    }

    #[test]
    fn test_continue_mid_chapter() {
        let catalog = catalog();
        let next = continue_from(&catalog, &verse_passage("A", 1, 4)).unwrap();
        assert_eq!(
            next,
            Continuation {
                book: "A".to_string(),
                chapter: 1,
                verse: Some(5),
            }
        );
    }

    #[test]
    fn test_continue_at_chapter_end() {
        let catalog = catalog();
        let next = continue_from(&catalog, &verse_passage("A", 1, 10)).unwrap();
        assert_eq!(
            next,
            Continuation {
                book: "A".to_string(),
                chapter: 2,
                verse: Some(1),
            }
        );
    }

    #[test]
    fn test_continue_at_book_end_crosses_into_next_book() {
        let catalog = catalog();
        let next = continue_from(&catalog, &verse_passage("A", 3, 10)).unwrap();
        assert_eq!(
            next,
            Continuation {
                book: "B".to_string(),
                chapter: 1,
                verse: Some(1),
            }
        );
    }

    #[test]
    fn test_continue_chapter_only_propagates_no_verse() {
        let catalog = catalog();
        let next = continue_from(&catalog, &chapter_passage("A", 1, 1)).unwrap();
        assert_eq!(
            next,
            Continuation {
                book: "A".to_string(),
                chapter: 2,
                verse: None,
            }
        );
    }

    #[test]
    fn test_continue_chapter_only_at_book_end() {
        let catalog = catalog();
        let next = continue_from(&catalog, &chapter_passage("A", 2, 3)).unwrap();
        assert_eq!(
            next,
            Continuation {
                book: "B".to_string(),
                chapter: 1,
                verse: None,
            }
        );
    }

    #[test]
    fn test_continue_past_last_book_fails() {
        let catalog = catalog();
        let err = continue_from(&catalog, &verse_passage("B", 2, 5)).unwrap_err();
        assert!(matches!(err, LectioError::EndOfCatalog(_)));
    }

    #[test]
    fn test_continue_unknown_book_fails() {
        let catalog = catalog();
        let err = continue_from(&catalog, &verse_passage("Xyz", 1, 1)).unwrap_err();
        assert!(matches!(err, LectioError::UnknownBook(_)));
    }
}
