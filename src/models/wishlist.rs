use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Genre {
    Fiction,
    NonFiction,
    Other,
}

impl Genre {
    /// Maps free-text input onto the enumerated set. Unrecognized text
    /// becomes `Other` rather than an error.
    pub fn parse(input: &str) -> Genre {
        match input.trim().to_ascii_lowercase().as_str() {
            "fiction" => Genre::Fiction,
            "non-fiction" | "nonfiction" | "non fiction" => Genre::NonFiction,
            _ => Genre::Other,
        }
    }
}

impl Default for Genre {
    fn default() -> Self {
        Genre::Other
    }
}

/// A "want to read" entry. Unrelated to logging mechanics: no times,
/// no rating, no update flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReadingListBook {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: Genre,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistDraft {
    pub title: String,
    pub author: String,
    pub genre: String,
}

#[cfg(test)]
mod tests {
    use super::Genre;

    #[test]
    fn parses_known_genres_case_insensitively() {
        assert_eq!(Genre::parse("Fiction"), Genre::Fiction);
        assert_eq!(Genre::parse("  fiction "), Genre::Fiction);
        assert_eq!(Genre::parse("NON-FICTION"), Genre::NonFiction);
        assert_eq!(Genre::parse("nonfiction"), Genre::NonFiction);
        assert_eq!(Genre::parse("other"), Genre::Other);
    }

    #[test]
    fn unknown_genre_text_maps_to_other() {
        assert_eq!(Genre::parse("space opera"), Genre::Other);
        assert_eq!(Genre::parse(""), Genre::Other);
    }
}
