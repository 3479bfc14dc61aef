//! Predicate evaluators
//!
//! Every evaluator returns a [`Condition`](crate::Condition) with both
//! explanations rendered. Negated evaluators are the positive check reverted.

pub mod channel;
pub mod compare;
pub mod contains;
pub mod error;
pub mod panic;
pub mod value;

pub use channel::*;
pub use compare::*;
pub use contains::*;
pub use error::*;
pub use panic::*;
pub use value::*;
