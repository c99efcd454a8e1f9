//! Interactive session module
//!
//! Runs the prompt loop: shows the latest day, asks for the next day's
//! passages with continuation defaults, previews the result, and appends
//! it to the plan on confirmation. Input validation lives in pure
//! `parse_*` functions; the prompt loops re-invoke them until the answer
//! is valid.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::catalog::Catalog;
use crate::continuation;
use crate::error::{LectioError, Result};
use crate::locale::Locale;
use crate::models::{Day, Passage, Plan, PlanDate};
use crate::render::Renderer;

/// An interactive plan-editing session over generic line I/O
///
/// `main` passes locked stdin/stdout; tests pass a `Cursor` and a buffer.
pub struct Session<'a, R, W> {
    catalog: &'a Catalog,
    renderer: Renderer<'a>,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(catalog: &'a Catalog, locale: &'a Locale, input: R, output: W) -> Self {
        Self {
            catalog,
            renderer: Renderer::new(locale),
            input,
            output,
        }
    }

    /// Run the session until end of input
    ///
    /// Each iteration builds one candidate day from the latest recorded
    /// day. Confirmed days are appended and the whole document is
    /// rewritten to `path`; rejected days are discarded, so the next
    /// iteration prompts identically from the unchanged plan.
    pub fn run(&mut self, plan: &mut Plan, path: &Path) -> Result<()> {
        loop {
            let latest = plan.latest_day().cloned().ok_or_else(|| {
                LectioError::Plan("plan file has no days to continue from".to_string())
            })?;

            writeln!(self.output, "{}", self.renderer.render_day(&latest)?)?;
            writeln!(self.output)?;

            let next_date = latest.date()?.next();
            let title = format!("Enter passages for {}:", next_date.formatted());
            writeln!(self.output, "{}", title)?;
            writeln!(self.output, "{}", "-".repeat(title.len()))?;

            let Some(day) = self.build_day(&latest, next_date)? else {
                return Ok(());
            };

            writeln!(self.output)?;
            writeln!(self.output, "{}", self.renderer.render_day(&day)?)?;
            writeln!(self.output)?;

            let Some(confirmed) = self.confirm()? else {
                return Ok(());
            };

            if confirmed {
                plan.push(day);
                plan.save(path)?;
            }
        }
    }

    /// Collect one passage per slot of the previous day
    ///
    /// Returns `None` when input ends mid-entry.
    fn build_day(&mut self, previous: &Day, date: PlanDate) -> Result<Option<Day>> {
        let mut passages = Vec::with_capacity(previous.passages.len());

        for prior in &previous.passages {
            writeln!(self.output)?;

            let seed = continuation::continue_from(self.catalog, prior)?;

            let Some(book) = self.prompt_book(&seed.book)? else {
                return Ok(None);
            };
            let Some(start_chapter) = self.prompt_chapter("Start chapter", seed.chapter)? else {
                return Ok(None);
            };
            let Some(start_verse) = self.prompt_verse("Start verse", seed.verse, true)? else {
                return Ok(None);
            };

            let Some(end_chapter) = self.prompt_chapter("End chapter", start_chapter)? else {
                return Ok(None);
            };
            // A verse-level passage must end on a verse, so "none" is only
            // accepted when the start is chapter-only.
            let end_default = start_verse.map(|v| v + 1);
            let Some(end_verse) =
                self.prompt_verse("End verse", end_default, start_verse.is_none())?
            else {
                return Ok(None);
            };

            passages.push(Passage::assemble(
                book,
                start_chapter,
                start_verse,
                end_chapter,
                end_verse,
            ));
        }

        Ok(Some(Day::new(date, passages)))
    }

    fn prompt_book(&mut self, default: &str) -> Result<Option<String>> {
        loop {
            write!(self.output, "Book ({}): ", default)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match parse_book(self.catalog, line.trim(), default) {
                Ok(book) => return Ok(Some(book)),
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }
    }

    fn prompt_chapter(&mut self, label: &str, default: u32) -> Result<Option<u32>> {
        loop {
            write!(self.output, "{} ({}): ", label, default)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match parse_chapter(line.trim(), default) {
                Ok(chapter) => return Ok(Some(chapter)),
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }
    }

    fn prompt_verse(
        &mut self,
        label: &str,
        default: Option<u32>,
        none_allowed: bool,
    ) -> Result<Option<Option<u32>>> {
        let shown = match default {
            Some(v) => v.to_string(),
            None => "none".to_string(),
        };

        loop {
            write!(self.output, "{} ({}): ", label, shown)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match parse_verse(line.trim(), default, none_allowed) {
                Ok(verse) => return Ok(Some(verse)),
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }
    }

    fn confirm(&mut self) -> Result<Option<bool>> {
        loop {
            write!(self.output, "Is this correct? (y/n): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match parse_confirm(line.trim()) {
                Ok(answer) => return Ok(Some(answer)),
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }
    }

    /// Read one line; `None` means end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Resolve a book answer against the catalog
fn parse_book(
    catalog: &Catalog,
    input: &str,
    default: &str,
) -> std::result::Result<String, String> {
    let book = if input.is_empty() { default } else { input };

    if catalog.get(book).is_some() {
        Ok(book.to_string())
    } else {
        Err(format!("Invalid book: {}", book))
    }
}

/// Resolve a chapter answer: empty takes the default, otherwise a
/// positive number
fn parse_chapter(input: &str, default: u32) -> std::result::Result<u32, String> {
    if input.is_empty() {
        return Ok(default);
    }

    match input.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("Invalid chapter: {}", input)),
    }
}

/// Resolve a verse answer: empty takes the default, `none` selects
/// chapter granularity where allowed, otherwise a positive number
fn parse_verse(
    input: &str,
    default: Option<u32>,
    none_allowed: bool,
) -> std::result::Result<Option<u32>, String> {
    if input == "none" {
        if none_allowed {
            return Ok(None);
        }
        return Err("Invalid verse: none".to_string());
    }

    if input.is_empty() {
        return Ok(default);
    }

    match input.parse::<u32>() {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err(format!("Invalid verse: {}", input)),
    }
}

/// Resolve a confirmation answer, case-insensitive `y`/`n` only
fn parse_confirm(input: &str) -> std::result::Result<bool, String> {
    match input.to_lowercase().as_str() {
        "y" => Ok(true),
        "n" => Ok(false),
        _ => Err("Please enter 'y' or 'n'".to_string()),
    }
}
