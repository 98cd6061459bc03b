use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

pub const DEFAULT_BOOKS_FILE: &str = "books.json";

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_BOOKS_FILE.to_string());

    path.with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4()))
}

/// Writes to a sibling temp file, then renames it over `path`.
pub async fn write_atomically(path: &Path, contents: &[u8]) -> io::Result<()> {
    let tmp_path = temp_path_for(path);

    let result = match fs::write(&tmp_path, contents).await {
        Ok(()) => fs::rename(&tmp_path, path).await,
        Err(e) => Err(e),
    };

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path).await;
    }
    result
}
