//! Application services

pub mod shape_file;

pub use shape_file::ShapeFileService;
