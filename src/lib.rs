//! Zonk (workspace facade crate).
//!
//! This package exposes the workspace crates as `zonk::{core, types}` and hosts the
//! non-interactive demo binary. The rules and the game loop live in `crates/`.

pub use zonk_core as core;
pub use zonk_types as types;
