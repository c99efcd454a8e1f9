//! Locale module
//!
//! Loads the display-language file: passage format templates plus the
//! book-id to display-name mapping. Read once at startup and immutable
//! for the life of the process.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{LectioError, Result};

/// Passage format templates with named placeholders
///
/// Every field is required, so a locale file missing a template fails at
/// load instead of producing an empty render later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Formats {
    /// Whole-chapter passage within one chapter: `{book}`, `{chapter}`
    pub chapter: String,
    /// Whole-chapter passage spanning chapters: `{book}`,
    /// `{start_chapter}`, `{end_chapter}`
    pub chapter_range: String,
    /// Verse range within one chapter: `{book}`, `{chapter}`,
    /// `{start_verse}`, `{end_verse}`
    pub verse_range_same_chapter: String,
    /// Verse range spanning chapters: `{book}`, `{start_chapter}`,
    /// `{start_verse}`, `{end_chapter}`, `{end_verse}`
    pub verse_range_cross_chapter: String,
}

/// Locale data: templates and book display names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Locale {
    pub formats: Formats,
    pub books: HashMap<String, String>,
}

impl Locale {
    /// Load a locale from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            LectioError::Locale(format!(
                "Cannot read locale from '{}': {}",
                path.display(),
                e
            ))
        })?;

        let locale: Locale = serde_json::from_str(&content)?;
        Ok(locale)
    }

    /// Display name for a book id; a miss is a locale data error
    pub fn book_name(&self, id: &str) -> Result<&str> {
        self.books
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| LectioError::Locale(format!("no display name for book '{}'", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{
        "formats": {
            "chapter": "{book} {chapter}",
            "chapter_range": "{book} {start_chapter}-{end_chapter}",
            "verse_range_same_chapter": "{book} {chapter}:{start_verse}-{end_verse}",
            "verse_range_cross_chapter": "{book} {start_chapter}:{start_verse}-{end_chapter}:{end_verse}"
        },
        "books": {
            "Gen": "Genesis"
        }
    }"#;

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("en.json");
        fs::write(&path, SAMPLE).unwrap();

        let locale = Locale::load(&path).unwrap();
        assert_eq!(locale.formats.chapter, "{book} {chapter}");
        assert_eq!(locale.book_name("Gen").unwrap(), "Genesis");
    }

    #[test]
    fn test_load_rejects_missing_template() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("en.json");
        fs::write(
            &path,
            r#"{"formats": {"chapter": "{book} {chapter}"}, "books": {}}"#,
        )
        .unwrap();

        assert!(Locale::load(&path).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let result = Locale::load(Path::new("/nonexistent/en.json"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Cannot read locale"));
    }

    #[test]
    fn test_book_name_miss() {
        let locale: Locale = serde_json::from_str(SAMPLE).unwrap();
        let err = locale.book_name("Exod").unwrap_err();
        assert!(err.to_string().contains("no display name"));
    }
}
