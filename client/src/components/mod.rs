//! Reusable UI component modules.

pub mod carousel;
