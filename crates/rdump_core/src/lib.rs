//! rdump_core: Core utilities shared by the AST dumper crates.
//!
//! Provides the arena that owns every tree node for the duration of a dump
//! and the string interner that owns every identifier.

pub mod arena;
pub mod intern;

// Re-export commonly used types
pub use arena::AstArena;
pub use intern::{StringInterner, Symbol};
