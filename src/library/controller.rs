use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use log::{info, warn};
use tauri::{AppHandle, Emitter};
use tokio::sync::Mutex;

use crate::error::LibraryError;
use crate::models::{Book, BookDraft, BookPatch};

use super::state::{Library, LibrarySnapshot};

/// Owns the reading log behind a mutex and broadcasts every change to the
/// webview. Screens never hold book state of their own; they re-fetch by id
/// or re-render from the emitted snapshot.
#[derive(Clone)]
pub struct LibraryController {
    state: Arc<Mutex<Library>>,
    app_handle: AppHandle,
}

impl LibraryController {
    pub fn new(app_handle: AppHandle) -> Self {
        Self {
            state: Arc::new(Mutex::new(Library::new())),
            app_handle,
        }
    }

    pub async fn get_snapshot(&self) -> LibrarySnapshot {
        self.state.lock().await.snapshot()
    }

    pub async fn list_books(&self) -> Vec<Book> {
        self.state.lock().await.books().to_vec()
    }

    pub async fn get_book(&self, id: &str) -> Result<Book> {
        let state = self.state.lock().await;
        let book = state
            .book(id)
            .ok_or_else(|| LibraryError::BookNotFound(id.to_string()))?;
        Ok(book.clone())
    }

    pub async fn log_book(&self, draft: BookDraft) -> Result<Book> {
        let (book, snapshot) = {
            let mut state = self.state.lock().await;
            let book = state.add_book(&draft, Utc::now())?;
            (book, state.snapshot())
        };

        info!("Logged book '{}' ({})", book.name, book.id);
        self.emit_library_changed(snapshot);
        Ok(book)
    }

    pub async fn update_book(&self, id: &str, patch: BookPatch) -> Result<Book> {
        let (book, snapshot) = {
            let mut state = self.state.lock().await;
            let book = state.update_book(id, &patch, Utc::now())?;
            (book, state.snapshot())
        };

        info!("Updated book '{}' ({})", book.name, book.id);
        self.emit_library_changed(snapshot);
        Ok(book)
    }

    /// Removes a book. Returns whether anything was removed; deleting an id
    /// that is already gone is not an error.
    pub async fn delete_book(&self, id: &str) -> Result<bool> {
        let (removed, snapshot) = {
            let mut state = self.state.lock().await;
            let removed = state.remove_book(id);
            (removed, state.snapshot())
        };

        match &removed {
            Some(book) => info!("Deleted book '{}' ({})", book.name, book.id),
            None => warn!("Delete requested for unknown book id {}", id),
        }

        if removed.is_some() {
            self.emit_library_changed(snapshot);
        }
        Ok(removed.is_some())
    }

    pub async fn daily_goal(&self) -> f64 {
        self.state.lock().await.daily_goal()
    }

    pub async fn set_daily_goal(&self, input: &str) -> Result<f64> {
        let (goal, snapshot) = {
            let mut state = self.state.lock().await;
            let goal = state.set_daily_goal(input);
            (goal, state.snapshot())
        };

        info!("Daily goal is now {} hours", goal);
        self.emit_library_changed(snapshot);
        Ok(goal)
    }

    pub async fn progress(&self) -> f64 {
        self.state.lock().await.progress()
    }

    fn emit_library_changed(&self, snapshot: LibrarySnapshot) {
        let _ = self.app_handle.emit("library-changed", snapshot);
    }
}
