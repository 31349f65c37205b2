//! Error taxonomy for execution results.
//!
//! [`BuildError`] is the propagating error type: a cause of this type is
//! already reportable and survives collapse untouched. [`MultipleFailures`]
//! is the composite produced when several causes are collapsed into one, and
//! [`InvalidState`] describes accessor calls that do not apply to a result's
//! variant.

mod aggregate;
mod constructors;
mod invalid_state;
mod types;

pub use aggregate::MultipleFailures;
pub use invalid_state::InvalidState;
pub use types::{BuildError, Cause};
