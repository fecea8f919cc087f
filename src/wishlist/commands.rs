use chrono::Utc;
use log::info;
use tauri::{Emitter, State};

use crate::{
    error::LibraryError,
    models::{ReadingListBook, WishlistDraft},
    AppState,
};

#[tauri::command]
pub async fn list_wishlist(
    state: State<'_, AppState>,
) -> Result<Vec<ReadingListBook>, LibraryError> {
    let wishlist = state.wishlist.lock().await;
    Ok(wishlist.entries().to_vec())
}

#[tauri::command]
pub async fn add_wishlist_book(
    state: State<'_, AppState>,
    app_handle: tauri::AppHandle,
    draft: WishlistDraft,
) -> Result<ReadingListBook, LibraryError> {
    let (entry, entries) = {
        let mut wishlist = state.wishlist.lock().await;
        let entry = wishlist.add(&draft, Utc::now())?;
        (entry, wishlist.entries().to_vec())
    };

    info!("Wishlisted '{}' ({})", entry.title, entry.id);
    let _ = app_handle.emit("wishlist-changed", entries);

    Ok(entry)
}

#[tauri::command]
pub async fn remove_wishlist_book(
    state: State<'_, AppState>,
    app_handle: tauri::AppHandle,
    entry_id: String,
) -> Result<bool, LibraryError> {
    let (removed, entries) = {
        let mut wishlist = state.wishlist.lock().await;
        let removed = wishlist.remove(&entry_id).is_some();
        (removed, wishlist.entries().to_vec())
    };

    if removed {
        let _ = app_handle.emit("wishlist-changed", entries);
    }

    Ok(removed)
}
