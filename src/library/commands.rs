use tauri::State;

use crate::{
    library::{LibraryController, LibrarySnapshot},
    models::{Book, BookDraft, BookPatch},
    AppState,
};

fn controller_from_state(state: &State<'_, AppState>) -> LibraryController {
    state.library.clone()
}

#[tauri::command]
pub async fn get_library_snapshot(state: State<'_, AppState>) -> Result<LibrarySnapshot, String> {
    let controller = controller_from_state(&state);
    Ok(controller.get_snapshot().await)
}

#[tauri::command]
pub async fn list_books(state: State<'_, AppState>) -> Result<Vec<Book>, String> {
    let controller = controller_from_state(&state);
    Ok(controller.list_books().await)
}

#[tauri::command]
pub async fn get_book(state: State<'_, AppState>, book_id: String) -> Result<Book, String> {
    let controller = controller_from_state(&state);
    controller.get_book(&book_id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn log_book(state: State<'_, AppState>, draft: BookDraft) -> Result<Book, String> {
    let controller = controller_from_state(&state);
    controller.log_book(draft).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_book(
    state: State<'_, AppState>,
    book_id: String,
    patch: BookPatch,
) -> Result<Book, String> {
    let controller = controller_from_state(&state);
    controller
        .update_book(&book_id, patch)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn delete_book(state: State<'_, AppState>, book_id: String) -> Result<bool, String> {
    let controller = controller_from_state(&state);
    controller.delete_book(&book_id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_daily_goal(state: State<'_, AppState>) -> Result<f64, String> {
    let controller = controller_from_state(&state);
    Ok(controller.daily_goal().await)
}

#[tauri::command]
pub async fn set_daily_goal(state: State<'_, AppState>, goal: String) -> Result<f64, String> {
    let controller = controller_from_state(&state);
    controller.set_daily_goal(&goal).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_reading_progress(state: State<'_, AppState>) -> Result<f64, String> {
    let controller = controller_from_state(&state);
    Ok(controller.progress().await)
}
