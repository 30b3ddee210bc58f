// Watermarking engine - independent of the CLI surface

pub mod core;

pub use core::*;
