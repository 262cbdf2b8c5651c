//! Advisory analyses over resolved obligations.
//!
//! Conflicts and unmet obligations are reported as data, never as errors:
//! the caller decides severity (a strict mode may fail a build on any
//! conflict; the core stays advisory).

mod conflicts;
mod satisfy;

pub use conflicts::{detect_conflicts, Conflict, ConflictVariant};
pub use satisfy::{check, CheckError, SatisfactionReport};
