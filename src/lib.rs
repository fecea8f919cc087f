mod error;
mod library;
mod models;
mod wishlist;

use library::commands::{
    delete_book, get_book, get_daily_goal, get_library_snapshot, get_reading_progress, list_books,
    log_book, set_daily_goal, update_book,
};
use library::LibraryController;
use tauri::Manager;
use tokio::sync::Mutex;
use wishlist::commands::{add_wishlist_book, list_wishlist, remove_wishlist_book};
use wishlist::Wishlist;

pub(crate) struct AppState {
    pub(crate) library: LibraryController,
    pub(crate) wishlist: Mutex<Wishlist>,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Book Logger starting up...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            app.manage(AppState {
                library: LibraryController::new(app.handle().clone()),
                wishlist: Mutex::new(Wishlist::new()),
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            get_library_snapshot,
            list_books,
            get_book,
            log_book,
            update_book,
            delete_book,
            get_daily_goal,
            set_daily_goal,
            get_reading_progress,
            list_wishlist,
            add_wishlist_book,
            remove_wishlist_book,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
