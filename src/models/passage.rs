use serde::{Deserialize, Serialize};

/// A chapter/verse position within a book
///
/// A reference without a verse addresses the whole chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Chapter number (1-based)
    pub chapter: u32,
    /// Verse number (1-based), absent for whole-chapter granularity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verse: Option<u32>,
}

impl Reference {
    /// Whole-chapter reference
    pub fn chapter(chapter: u32) -> Self {
        Self {
            chapter,
            verse: None,
        }
    }

    /// Verse-level reference
    pub fn verse(chapter: u32, verse: u32) -> Self {
        Self {
            chapter,
            verse: Some(verse),
        }
    }
}

/// A contiguous scripture range within a single book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    /// Catalog id of the book
    pub book: String,
    /// Start of the range (inclusive)
    pub start: Reference,
    /// End of the range (inclusive)
    pub end: Reference,
}

impl Passage {
    /// Build a passage from prompt answers
    ///
    /// A start without a verse makes the passage chapter-only; any end
    /// verse is dropped so verse granularity stays consistent between
    /// start and end.
    pub fn assemble(
        book: String,
        start_chapter: u32,
        start_verse: Option<u32>,
        end_chapter: u32,
        end_verse: Option<u32>,
    ) -> Self {
        let end_verse = if start_verse.is_none() {
            None
        } else {
            end_verse
        };

        Self {
            book,
            start: Reference {
                chapter: start_chapter,
                verse: start_verse,
            },
            end: Reference {
                chapter: end_chapter,
                verse: end_verse,
            },
        }
    }

    /// Whether this passage addresses whole chapters rather than verses
    pub fn is_chapter_only(&self) -> bool {
        self.start.verse.is_none()
    }
}
