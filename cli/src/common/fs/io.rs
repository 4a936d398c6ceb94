//! # devstack Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Line-oriented text file helpers plus a directory check:
//! - **`read_lines`**: Reads a whole file into an ordered `Vec<String>` (terminators removed).
//! - **`write_lines`**: Overwrites a file with the given lines, each newline-terminated.
//! - **`insert_line`**: Inserts one line at a 0-based index and persists the file.
//! - **`check_directory`**: Whether a path exists and is a directory.
//!
//! Unlike the command runner, these helpers do not swallow failures: I/O errors
//! propagate to the caller with the offending path as context. Each successful
//! operation prints a `Log>` completion line.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//! use std::path::Path;
//!
//! # fn run_example() -> crate::core::error::Result<()> {
//! let compose = Path::new("./docker/docker-compose.yml");
//! io::insert_line(compose, 2, "    restart: unless-stopped")?;
//! # Ok(())
//! # }
//! ```
//!
use crate::common::ui;
use crate::core::error::{DevstackError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Reads the file at `path` into its lines, in order.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be found, opened, or read as UTF-8.
#[allow(dead_code)] // Not on the interactive menu path.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))?;
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    debug!("Read {} lines from {:?}", lines.len(), path);
    println!("{}", ui::log_success(&format!("{} successfully read.", path.display())));
    Ok(lines)
}

/// Writes `lines` to `path`, replacing any existing content.
///
/// # Errors
///
/// Returns an `Err` if the path is a directory or the write fails.
#[allow(dead_code)] // Not on the interactive menu path.
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    if path.is_dir() {
        anyhow::bail!(DevstackError::FileSystem(format!(
            "Path is a directory, not a file: {:?}",
            path
        )));
    }
    let mut content = String::new();
    for line in lines {
        content.push_str(line.as_ref());
        content.push('\n');
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote {} lines to file: {:?}", lines.len(), path);
    println!(
        "{}",
        ui::log_success(&format!("{} successfully written.", path.display()))
    );
    Ok(())
}

/// Inserts `text` as a new line at the 0-based `index` of the file at `path`.
///
/// An index past the last line appends to the end of the file.
#[allow(dead_code)] // Not on the interactive menu path.
pub fn insert_line(path: &Path, index: usize, text: &str) -> Result<()> {
    let mut lines = read_lines(path)?;
    let at = index.min(lines.len());
    lines.insert(at, text.to_string());
    write_lines(path, &lines)?;
    println!(
        "{}",
        ui::log_success(&format!(
            "Text successfully inserted into {}.",
            path.display()
        ))
    );
    Ok(())
}

/// Returns `true` when `path` exists and is a directory.
pub fn check_directory(path: &Path) -> bool {
    path.is_dir()
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read_lines() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("services.txt");
        write_lines(&file_path, &["mysql", "backendApp"])?;
        assert_eq!(fs::read_to_string(&file_path)?, "mysql\nbackendApp\n");
        assert_eq!(read_lines(&file_path)?, vec!["mysql", "backendApp"]);
        Ok(())
    }

    #[test]
    fn test_write_lines_overwrites() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("overwrite.txt");
        fs::write(&file_path, "old\ncontent\nhere\n")?;
        write_lines(&file_path, &["new"])?;
        assert_eq!(read_lines(&file_path)?, vec!["new"]);
        Ok(())
    }

    #[test]
    fn test_insert_line_in_middle() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("compose.yml");
        fs::write(&file_path, "services:\n  app:\n    image: x\n")?;
        insert_line(&file_path, 2, "    restart: always")?;
        assert_eq!(
            read_lines(&file_path)?,
            vec!["services:", "  app:", "    restart: always", "    image: x"]
        );
        Ok(())
    }

    #[test]
    fn test_insert_line_at_start_and_past_end() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("edge.txt");
        fs::write(&file_path, "b\n")?;
        insert_line(&file_path, 0, "a")?;
        insert_line(&file_path, 99, "c")?;
        assert_eq!(read_lines(&file_path)?, vec!["a", "b", "c"]);
        Ok(())
    }

    #[test]
    fn test_read_lines_missing_file() -> Result<()> {
        let base_dir = tempdir()?;
        let result = read_lines(&base_dir.path().join("nonexistent.txt"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read file"));
        Ok(())
    }

    #[test]
    fn test_insert_line_missing_file_propagates() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("missing.txt");
        assert!(insert_line(&file_path, 0, "x").is_err());
        assert!(!file_path.exists());
        Ok(())
    }

    #[test]
    fn test_write_lines_to_directory_fails() -> Result<()> {
        let base_dir = tempdir()?;
        let result = write_lines(base_dir.path(), &["x"]);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Path is a directory"));
        Ok(())
    }

    #[test]
    fn test_check_directory() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("file.txt");
        fs::write(&file_path, "")?;
        assert!(check_directory(base_dir.path()));
        assert!(!check_directory(&file_path));
        assert!(!check_directory(&base_dir.path().join("absent")));
        Ok(())
    }
}
