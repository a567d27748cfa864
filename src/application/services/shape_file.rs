//! Shape text file round trip
//!
//! One shape's display form per line. `round_trip` writes the file, reads it
//! back and removes it again before returning, on error paths too.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::Shape;
use crate::infrastructure::traits::FileSystem;

/// Service for writing shapes to and reading them from a text file.
pub struct ShapeFileService {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
}

impl ShapeFileService {
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self { fs, settings }
    }

    /// Path of the shape file inside `dir`.
    pub fn file_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.settings.shape_file)
    }

    /// Write each shape's display form on its own line.
    #[instrument(level = "debug", skip(self, shapes), fields(count = shapes.len()))]
    pub fn write(&self, path: &Path, shapes: &[Shape]) -> ApplicationResult<()> {
        let content: String = shapes.iter().map(|s| format!("{s}\n")).collect();
        self.fs
            .ensure_parent(path)
            .with_path_context("create parent directory", path)?;
        self.fs
            .write(path, &content)
            .with_path_context("write shape file", path)?;
        debug!("wrote {} shapes to {}", shapes.len(), path.display());
        Ok(())
    }

    /// Read the file back, one entry per line.
    pub fn read_lines(&self, path: &Path) -> ApplicationResult<Vec<String>> {
        if !self.fs.exists(path) {
            return Err(ApplicationError::ShapeFileNotFound(path.to_path_buf()));
        }
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read shape file", path)?;
        Ok(content.lines().map(str::to_string).collect())
    }

    /// Read the file back and parse every line into a shape.
    pub fn read_shapes(&self, path: &Path) -> ApplicationResult<Vec<Shape>> {
        self.read_lines(path)?
            .iter()
            .map(|line| line.parse::<Shape>().map_err(ApplicationError::from))
            .collect()
    }

    /// Write `shapes` to `<dir>/<shape_file>`, read the lines back, then
    /// remove the file unless `keep_file` is set.
    #[instrument(level = "debug", skip(self, shapes))]
    pub fn round_trip(&self, dir: &Path, shapes: &[Shape]) -> ApplicationResult<Vec<String>> {
        let path = self.file_path(dir);
        let _cleanup = FileCleanup {
            fs: Arc::clone(&self.fs),
            path: path.clone(),
            keep: self.settings.keep_file,
        };
        self.write(&path, shapes)?;
        self.read_lines(&path)
    }
}

/// Removes the shape file when dropped.
struct FileCleanup {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
    keep: bool,
}

impl Drop for FileCleanup {
    fn drop(&mut self) {
        if self.keep || !self.fs.exists(&self.path) {
            return;
        }
        match self.fs.remove_file(&self.path) {
            Ok(()) => debug!("removed {}", self.path.display()),
            Err(e) => warn!("cannot remove {}: {}", self.path.display(), e),
        }
    }
}
