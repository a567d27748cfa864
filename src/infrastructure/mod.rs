//! Infrastructure layer: filesystem and terminal boundaries, service wiring

pub mod di;
pub mod error;
pub mod traits;

pub use di::ServiceContainer;
pub use error::{InfraError, InfraResult};
pub use traits::{FileSystem, Prompt, RealFileSystem, StdinPrompt};
