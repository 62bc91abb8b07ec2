// src/buffer/mod.rs
//! Growable byte buffer with independent length and capacity.

mod core;
mod ops;

pub use self::core::Buffer;
