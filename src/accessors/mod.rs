// Thu Aug 27 2026 - Alex

pub mod generator;

pub use generator::{AccessorOptions, Accessors};
