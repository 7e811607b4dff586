//! rdump_ast: the syntax tree consumed by the dumper.
//!
//! All nodes are arena allocated and `Copy`; children are `&'a` references
//! and slices into an [`rdump_core::AstArena`].

pub mod builder;
pub mod expr;
pub mod generics;
pub mod item;
pub mod pattern;
pub mod types;

pub use builder::AstBuilder;
pub use expr::*;
pub use generics::*;
pub use item::*;
pub use pattern::*;
pub use types::*;
