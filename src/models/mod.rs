pub mod book;
pub mod wishlist;

pub use book::{Book, BookDraft, BookPatch};
pub use wishlist::{Genre, ReadingListBook, WishlistDraft};
