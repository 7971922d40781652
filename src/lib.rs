pub mod config;
pub mod db;
pub mod models;
pub mod seed;
pub mod storage;
pub mod filter;
pub mod render;
pub mod view;
pub mod directory;

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::db::{DatabaseError, SqliteStore};
use crate::directory::{DirectoryPage, PageEvent};
use crate::view::Document;

/// Entry point of the `staff-directory` binary.
///
/// Loads the directory page against the on-disk storage slot, applies the
/// optional positional arguments (query text, then specialty) as page
/// events and prints the resulting page HTML.
pub fn run() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let db_path = config::storage_db_path();

    match preview_page(&db_path, &args) {
        Ok(html) => print!("{html}"),
        Err(e) => {
            tracing::error!(path = %db_path.display(), "Failed to render staff directory: {e}");
            std::process::exit(1);
        }
    }
}

/// Render the directory page over the slot database at `db_path`.
pub fn preview_page(db_path: &Path, args: &[String]) -> Result<String, DatabaseError> {
    let store = SqliteStore::open(db_path)?;
    let mut page = DirectoryPage::new(store, Document::staff_page());
    page.handle(PageEvent::Ready)?;

    if let Some(query) = args.first().filter(|q| !q.is_empty()) {
        page.handle(PageEvent::QueryInput(query.clone()))?;
    }
    if let Some(specialty) = args.get(1).filter(|s| !s.is_empty()) {
        page.handle(PageEvent::SpecialtyChange(specialty.clone()))?;
    }

    Ok(page.view().document().to_html())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_seeds_and_renders() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.db");

        let html = preview_page(&path, &[]).unwrap();
        assert!(path.exists());
        assert!(html.contains("staffGrid"));
        assert!(html.contains("Ver más"));
        assert!(html.contains("Todas las especialidades"));
    }

    #[test]
    fn preview_applies_filters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.db");

        let html = preview_page(&path, &["".to_string(), "Neurología".to_string()]).unwrap();
        assert!(html.contains("Dr. Federico Luna"));
        assert!(!html.contains("Dra. Lucía Ferreyra"));
        assert!(html.contains("<option value=\"Neurología\" selected>"));
    }
}
