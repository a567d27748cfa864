//! Domain layer: shape model and metadata tables
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod meta;
pub mod point;
pub mod shape;

pub use error::{DomainError, DomainResult};
pub use meta::{HelpAttribute, Introspect, MemberInfo, MemberKind, TypeDescriptor};
pub use point::{Point, COORDINATE_COUNT};
pub use shape::{compare_centers, shapes_equal, sort_by_center, Property, Shape, ShapeKind};
