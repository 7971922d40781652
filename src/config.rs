use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Staff Directory";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Storage slot holding the persisted profile list.
pub const STORAGE_KEY: &str = "medicos";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "STAFF_DIRECTORY_HOME";

/// Get the application data directory.
/// `$STAFF_DIRECTORY_HOME` when set, otherwise ~/StaffDirectory/.
pub fn app_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("StaffDirectory")
}

/// SQLite file backing the local storage slots.
pub fn storage_db_path() -> PathBuf {
    app_data_dir().join("storage.db")
}

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "staff_directory_lib=info,staff_directory=info"
}
