use thiserror::Error;

/// The only failures the model surfaces. Garbage numeric input is never an
/// error; it is substituted with a default or the previous value.
#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("book name must not be empty")]
    EmptyName,

    #[error("wishlist title must not be empty")]
    EmptyTitle,

    #[error("no book with id {0}")]
    BookNotFound(String),
}

// Convert to Tauri's error type
impl serde::Serialize for LibraryError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
