//! Core types for Verdant Market.

pub mod id;

pub use id::*;
