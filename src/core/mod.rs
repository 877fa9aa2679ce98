//! Motion core: scroll progress, mappings, visibility, timed cycles and
//! the signup form state.
//!
//! Nothing in this module depends on any TUI, HTTP or rendering crate.
//! All state is owned by the section that created it; no module here
//! shares mutable state across sections.

pub mod color;
pub mod content;
pub mod cyclic;
pub mod geometry;
pub mod mapping;
pub mod page;
pub mod progress;
pub mod reveal;
pub mod sections;
pub mod signup;
pub mod visibility;
