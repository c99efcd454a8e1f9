//! Passage rendering module
//!
//! Produces the human-readable preview text for passages and days using
//! the locale's templates and book display names.

use crate::error::Result;
use crate::locale::Locale;
use crate::models::{Day, Passage};

/// Display shape of a passage, one variant per locale template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassageKind {
    /// Whole-chapter passage within a single chapter
    Chapter { chapter: u32 },
    /// Whole-chapter passage spanning chapters
    ChapterRange { start_chapter: u32, end_chapter: u32 },
    /// Verse range within a single chapter
    VerseRangeSameChapter {
        chapter: u32,
        start_verse: u32,
        end_verse: u32,
    },
    /// Verse range spanning chapters
    VerseRangeCrossChapter {
        start_chapter: u32,
        start_verse: u32,
        end_chapter: u32,
        end_verse: u32,
    },
}

impl PassageKind {
    /// Classify a passage for template dispatch
    pub fn of(passage: &Passage) -> Self {
        match (passage.start.verse, passage.end.verse) {
            (None, _) => {
                if passage.start.chapter == passage.end.chapter {
                    PassageKind::Chapter {
                        chapter: passage.start.chapter,
                    }
                } else {
                    PassageKind::ChapterRange {
                        start_chapter: passage.start.chapter,
                        end_chapter: passage.end.chapter,
                    }
                }
            }
            (Some(start_verse), end_verse) => {
                // Assembly keeps granularity consistent; a hand-edited end
                // without a verse renders as a range ending at the start verse.
                let end_verse = end_verse.unwrap_or(start_verse);
                if passage.start.chapter == passage.end.chapter {
                    PassageKind::VerseRangeSameChapter {
                        chapter: passage.start.chapter,
                        start_verse,
                        end_verse,
                    }
                } else {
                    PassageKind::VerseRangeCrossChapter {
                        start_chapter: passage.start.chapter,
                        start_verse,
                        end_chapter: passage.end.chapter,
                        end_verse,
                    }
                }
            }
        }
    }
}

/// Locale-driven passage renderer
pub struct Renderer<'a> {
    locale: &'a Locale,
}

impl<'a> Renderer<'a> {
    pub fn new(locale: &'a Locale) -> Self {
        Self { locale }
    }

    /// Render a single passage using the matching locale template
    pub fn format_passage(&self, passage: &Passage) -> Result<String> {
        let book = self.locale.book_name(&passage.book)?;
        let formats = &self.locale.formats;

        let result = match PassageKind::of(passage) {
            PassageKind::Chapter { chapter } => formats
                .chapter
                .replace("{book}", book)
                .replace("{chapter}", &chapter.to_string()),
            PassageKind::ChapterRange {
                start_chapter,
                end_chapter,
            } => formats
                .chapter_range
                .replace("{book}", book)
                .replace("{start_chapter}", &start_chapter.to_string())
                .replace("{end_chapter}", &end_chapter.to_string()),
            PassageKind::VerseRangeSameChapter {
                chapter,
                start_verse,
                end_verse,
            } => formats
                .verse_range_same_chapter
                .replace("{book}", book)
                .replace("{chapter}", &chapter.to_string())
                .replace("{start_verse}", &start_verse.to_string())
                .replace("{end_verse}", &end_verse.to_string()),
            PassageKind::VerseRangeCrossChapter {
                start_chapter,
                start_verse,
                end_chapter,
                end_verse,
            } => formats
                .verse_range_cross_chapter
                .replace("{book}", book)
                .replace("{start_chapter}", &start_chapter.to_string())
                .replace("{start_verse}", &start_verse.to_string())
                .replace("{end_chapter}", &end_chapter.to_string())
                .replace("{end_verse}", &end_verse.to_string()),
        };

        Ok(result)
    }

    /// Render a day's preview block: date line, blank line, aligned
    /// passage list
    pub fn render_day(&self, day: &Day) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("Date: {}\n", day.date()?.formatted()));
        output.push('\n');

        for (i, passage) in day.passages.iter().enumerate() {
            let formatted = self.format_passage(passage)?;
            if i == 0 {
                output.push_str(&format!("Passages: {}\n", formatted));
            } else {
                output.push_str(&format!("          {}\n", formatted));
            }
        }

        Ok(output.trim_end().to_string())
    }
}
