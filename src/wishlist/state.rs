use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::LibraryError;
use crate::models::{Genre, ReadingListBook, WishlistDraft};

/// Flat "want to read" list. Entries are only ever added and removed; there
/// is no edit flow and nothing derived from them.
#[derive(Default)]
pub struct Wishlist {
    entries: Vec<ReadingListBook>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        draft: &WishlistDraft,
        now: DateTime<Utc>,
    ) -> Result<ReadingListBook, LibraryError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(LibraryError::EmptyTitle);
        }

        let entry = ReadingListBook {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            author: draft.author.trim().to_string(),
            genre: Genre::parse(&draft.genre),
            created_at: now,
        };

        self.entries.push(entry.clone());
        Ok(entry)
    }

    pub fn remove(&mut self, id: &str) -> Option<ReadingListBook> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn entries(&self) -> &[ReadingListBook] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, author: &str, genre: &str) -> WishlistDraft {
        WishlistDraft {
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
        }
    }

    #[test]
    fn adds_an_entry_with_parsed_genre() {
        let mut wishlist = Wishlist::new();

        let entry = wishlist
            .add(&draft("Hyperion", "Dan Simmons", "fiction"), Utc::now())
            .unwrap();

        assert_eq!(entry.title, "Hyperion");
        assert_eq!(entry.genre, Genre::Fiction);
        assert_eq!(wishlist.entries().len(), 1);
    }

    #[test]
    fn rejects_blank_title() {
        let mut wishlist = Wishlist::new();

        let result = wishlist.add(&draft("  ", "someone", "other"), Utc::now());

        assert!(matches!(result, Err(LibraryError::EmptyTitle)));
        assert!(wishlist.entries().is_empty());
    }

    #[test]
    fn blank_author_is_allowed() {
        let mut wishlist = Wishlist::new();

        let entry = wishlist.add(&draft("Hyperion", "", "sci-fi"), Utc::now()).unwrap();

        assert_eq!(entry.author, "");
        assert_eq!(entry.genre, Genre::Other);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut wishlist = Wishlist::new();
        let entry = wishlist
            .add(&draft("Hyperion", "Dan Simmons", "fiction"), Utc::now())
            .unwrap();

        assert!(wishlist.remove(&entry.id).is_some());
        assert!(wishlist.remove(&entry.id).is_none());
        assert!(wishlist.entries().is_empty());
    }
}
