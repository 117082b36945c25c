//! Pattern families for Nextframe.
//!
//! Defines the [`PatternFamily`] contract, the shared option assembly that
//! deduplicates and shuffles answers, and the built-in catalog of families.

pub mod error;
pub mod families;
pub mod family;
pub mod options;

pub use error::{PatternError, PatternResult};
pub use families::builtin;
pub use family::{DEFAULT_PROMPT, PatternContext, PatternFamily};
pub use options::{MAX_SUBSTITUTIONS, OptionSet};
