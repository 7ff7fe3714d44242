//! # Construct Kinds
//!
//! Each construct type owns its syntax delimiters and its matching rule.
//! The scanner only asks "does this construct match here?"; it never
//! hardcodes `#`, `**` or a fence.
//!
//! ## Types
//!
//! - **`LineConstruct`**: constructs anchored at a line start: list items,
//!   headers, quotes, rules
//! - **`Delimited`**: constructs enclosed by marker runs: italic, bold,
//!   strike, inline code
//! - **`Link`**: `[title](url)`
//! - **`BlockCode`**: triple-backtick fences, split into one hit line per
//!   physical line
//!
//! Every matcher takes the cursor by reference and either returns a
//! [`Hit`](super::construct::Hit) in local indices or `None`.

pub mod block_code;
pub mod delimited;
pub mod line;
pub mod link;

pub use block_code::BlockCode;
pub use delimited::Delimited;
pub use line::LineConstruct;
pub use link::Link;
