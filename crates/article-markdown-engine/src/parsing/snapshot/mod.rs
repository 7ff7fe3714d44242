//! # Snapshot Support
//!
//! Utilities for looking at a parse: a stable text outline (used by
//! `insta` snapshot tests and by the CLI tree view) and runtime invariant
//! checks (spans tile their parents, leaves have no children, content
//! matches the source).
//!
//! ## Modules
//!
//! - **`outline`**: renders a [`Document`](super::Document) as an indented tree
//! - **`invariants`**: asserts the structural guarantees of the scanner

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
