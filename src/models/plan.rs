use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{LectioError, Result};
use crate::models::Passage;

/// Year used to anchor year-less plan dates. Non-leap, so Feb 29 is not a
/// valid plan date.
const REFERENCE_YEAR: i32 = 2001;

/// A month/day pair with no year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanDate(NaiveDate);

impl PlanDate {
    pub fn new(month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day)
            .map(Self)
            .ok_or_else(|| {
                LectioError::Plan(format!("invalid date: month {}, day {}", month, day))
            })
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The following calendar day, wrapping Dec 31 to Jan 1
    pub fn next(&self) -> Self {
        // succ_opt only fails at NaiveDate::MAX; the wrap lands on Jan 1
        let next = self.0.succ_opt().expect("date overflow");
        Self::new(next.month(), next.day()).expect("wrapped date is valid")
    }

    /// Human-readable form, e.g. "Mar 5"
    pub fn formatted(&self) -> String {
        self.0.format("%b %-d").to_string()
    }
}

/// A single day's reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// Calendar month (1-12)
    pub month: u32,
    /// Day of month
    pub day: u32,
    /// Passages to read, in order
    pub passages: Vec<Passage>,
}

impl Day {
    pub fn new(date: PlanDate, passages: Vec<Passage>) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
            passages,
        }
    }

    pub fn date(&self) -> Result<PlanDate> {
        PlanDate::new(self.month, self.day)
    }
}

/// The reading plan: an ordered, append-only sequence of days
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plan {
    days: Vec<Day>,
}

impl Plan {
    /// Load a plan from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            LectioError::Plan(format!("Cannot read plan from '{}': {}", path.display(), e))
        })?;

        let plan: Plan = serde_json::from_str(&content)?;
        plan.validate()?;
        Ok(plan)
    }

    /// Rewrite the whole plan, pretty-printed, to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        for (i, day) in self.days.iter().enumerate() {
            day.date().map_err(|_| {
                LectioError::Plan(format!(
                    "day {} has an invalid date: month {}, day {}",
                    i + 1,
                    day.month,
                    day.day
                ))
            })?;

            if day.passages.is_empty() {
                return Err(LectioError::Plan(format!("day {} has no passages", i + 1)));
            }
        }
        Ok(())
    }

    /// The most recently entered day, if any
    pub fn latest_day(&self) -> Option<&Day> {
        self.days.last()
    }

    pub fn push(&mut self, day: Day) {
        self.days.push(day);
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }
}
