//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::ShapeFileService;
use crate::application::Inspector;
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, Prompt, RealFileSystem, StdinPrompt};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Interactive pause abstraction
    pub prompt: Arc<dyn Prompt>,

    /// Type descriptor registry
    pub inspector: Inspector,

    /// Shape text file round trip
    pub shape_files: ShapeFileService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem), Arc::new(StdinPrompt))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        prompt: Arc<dyn Prompt>,
    ) -> Self {
        let settings = Arc::new(settings);
        let shape_files = ShapeFileService::new(Arc::clone(&fs), Arc::clone(&settings));

        Self {
            settings,
            fs,
            prompt,
            inspector: Inspector::new(),
            shape_files,
        }
    }
}
