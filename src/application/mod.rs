//! Application layer: notification, inspection and services
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod error;
pub mod error_ext;
pub mod inspector;
pub mod notifier;
pub mod services;
pub mod tracked;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use inspector::Inspector;
pub use notifier::{ChangeEvent, ChangeNotifier, ObserverFn, ObserverHandle};
pub use tracked::TrackedShape;
