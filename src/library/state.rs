use chrono::{DateTime, Utc};
use log::warn;
use serde::Serialize;
use uuid::Uuid;

use crate::error::LibraryError;
use crate::models::{Book, BookDraft, BookPatch};

use super::parse::{parse_hours, parse_pages, parse_rating};

const MS_PER_DAY: i64 = 86_400_000;
const DEFAULT_DAILY_GOAL: f64 = 1.0;
const DEFAULT_RATING: u8 = 1;

/// The in-memory reading log: every logged book plus the daily goal.
/// All mutations go through the methods here; callers never touch the
/// collection directly. Clock-dependent operations take `now` so the rules
/// stay deterministic under test.
pub struct Library {
    books: Vec<Book>,
    daily_goal: f64,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LibrarySnapshot {
    pub books: Vec<Book>,
    pub daily_goal: f64,
    pub progress: f64,
}

impl Default for Library {
    fn default() -> Self {
        Self {
            books: Vec::new(),
            daily_goal: DEFAULT_DAILY_GOAL,
        }
    }
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a book from the log-entry form. The name is the one required
    /// field; every numeric field substitutes a default when unusable.
    /// The initial entry counts for both today and the lifetime total.
    pub fn add_book(&mut self, draft: &BookDraft, now: DateTime<Utc>) -> Result<Book, LibraryError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(LibraryError::EmptyName);
        }

        let time = parse_hours(&draft.time, 0.0);
        let rating = parse_rating(&draft.rating, DEFAULT_RATING);
        if !(1..=5).contains(&rating) {
            warn!("Rating {} for '{}' is outside the 1-5 scale", rating, name);
        }

        let book = Book {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            pages: parse_pages(&draft.pages, 0),
            time_today: time,
            total_time: time,
            rating,
            created_at: now,
            updated_at: now,
        };

        self.books.push(book.clone());
        Ok(book)
    }

    /// Applies an edit from the detail screen.
    ///
    /// Same-day edits overwrite `time_today` and leave the lifetime total
    /// alone. Once at least one full day has elapsed since the book was
    /// logged, the entered hours are folded into `total_time` and
    /// `time_today` resets to zero so the new day starts from a fresh entry.
    /// Unparseable fields keep their previous values.
    pub fn update_book(
        &mut self,
        id: &str,
        patch: &BookPatch,
        now: DateTime<Utc>,
    ) -> Result<Book, LibraryError> {
        let book = self
            .books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(|| LibraryError::BookNotFound(id.to_string()))?;

        let new_time = parse_hours(&patch.time, book.time_today);
        book.pages = parse_pages(&patch.pages, book.pages);
        book.rating = parse_rating(&patch.rating, book.rating);

        if days_since(book.created_at, now) >= 1 {
            book.total_time += new_time;
            book.time_today = 0.0;
        } else {
            book.time_today = new_time;
        }
        book.updated_at = now;

        Ok(book.clone())
    }

    /// Removes the book with the given id. Absent ids are a no-op.
    pub fn remove_book(&mut self, id: &str) -> Option<Book> {
        let index = self.books.iter().position(|book| book.id == id)?;
        Some(self.books.remove(index))
    }

    pub fn book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn daily_goal(&self) -> f64 {
        self.daily_goal
    }

    /// Parses a new goal from form input, keeping the previous goal when the
    /// input is unusable. Returns the goal now in effect.
    pub fn set_daily_goal(&mut self, input: &str) -> f64 {
        self.daily_goal = parse_hours(input, self.daily_goal);
        self.daily_goal
    }

    /// Fraction of the daily goal covered by today's reading across all
    /// books, clamped to [0, 1]. A goal of zero (or less) reports zero
    /// progress instead of dividing by it.
    pub fn progress(&self) -> f64 {
        if self.daily_goal <= 0.0 {
            return 0.0;
        }
        let hours_today: f64 = self.books.iter().map(|book| book.time_today).sum();
        (hours_today / self.daily_goal).clamp(0.0, 1.0)
    }

    pub fn snapshot(&self) -> LibrarySnapshot {
        LibrarySnapshot {
            books: self.books.clone(),
            daily_goal: self.daily_goal,
            progress: self.progress(),
        }
    }
}

/// Whole days elapsed since `created_at`. A clock that has gone backwards
/// counts as the same day.
fn days_since(created_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let elapsed_ms = (now - created_at).num_milliseconds();
    if elapsed_ms <= 0 {
        return 0;
    }
    elapsed_ms / MS_PER_DAY
}
