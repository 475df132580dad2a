#![warn(clippy::all, rust_2018_idioms)]

pub mod server;
pub mod svg;
pub mod tessellation;

pub use tessellation::{generate, generate_with_seed, Rect};
