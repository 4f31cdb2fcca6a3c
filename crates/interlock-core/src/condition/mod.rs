//! Condition Tree Module
//!
//! A parsed interlocking formula is an ordered list of [`ConditionNode`]s.
//! Leaves name a single device (track circuit, point, signal, timer...);
//! an `Or` node carries its alternatives in `execute`, and any node may carry
//! a continuation clause attached by the `但` operator.
//!
//! # Example
//!
//! The formula `A又はB但C` parses to:
//!
//! ```text
//! Or "A又はB"
//! ├── A
//! │   └── C
//! └── B
//!     └── C
//! ```

mod name_table;
mod types;

pub use name_table::NameTable;
pub use types::{ConditionNode, ConditionType};
