//! Leaf-health analysis for LeafCheck.
//!
//! Produces a health verdict with a confidence score from captured photo
//! bytes. The classifier here is a mock that stands in for on-device
//! inference; a real model can replace it behind the same [`Assessment`]
//! shape without touching the rest of the app.

pub mod classifier;

pub use classifier::*;
