//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io::{self, BufRead, Write};
use std::path::Path;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write string content to file.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Remove a file.
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Create parent directories if needed.
    fn ensure_parent(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                self.create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

/// Interactive "press Enter" pause abstraction.
pub trait Prompt: Send + Sync {
    /// Show `message` and block until a line is entered.
    fn pause(&self, message: &str) -> io::Result<()>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }
}

/// Real prompt on stdin/stdout.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn pause(&self, message: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        write!(stdout, "{message} ")?;
        stdout.flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn given_nested_path_when_ensure_parent_then_creates_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a/b/Shape.txt");

        RealFileSystem.ensure_parent(&path).unwrap();

        assert!(temp.path().join("a/b").is_dir());
    }

    #[test]
    fn given_file_when_checking_is_dir_then_false() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("Shape.txt");
        std::fs::write(&file, "").unwrap();

        assert!(RealFileSystem.is_dir(temp.path()));
        assert!(!RealFileSystem.is_dir(&file));
    }

    #[test]
    fn given_bare_file_name_when_ensure_parent_then_no_op() {
        RealFileSystem
            .ensure_parent(Path::new("Shape.txt"))
            .unwrap();
    }
}
