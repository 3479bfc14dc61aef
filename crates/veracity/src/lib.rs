//! Veracity - Conditions as values
//!
//! A check such as "a equals b" or "element in collection" is evaluated into
//! a [`Condition`] instead of an immediate branch. The caller then picks a
//! reaction:
//! - [`Condition::assert`] raises [`AssertionFailed`] when false
//! - [`Condition::test`] reports the failure to a [`Reporter`] and continues
//! - [`Condition::on_true`] / [`Condition::on_false`] run callbacks
//! - [`Condition::revert`] negates, swapping both explanations
//!
//! ```rust
//! use std::collections::HashMap;
//! use veracity::{expect_contains, expect_equal, Recorder};
//!
//! let ports: HashMap<&str, u16> = [("http", 80)].into_iter().collect();
//! expect_contains(&"http", &ports).assert("");
//!
//! let recorder = Recorder::new();
//! expect_equal(ports["http"], 443).test(&recorder);
//! assert!(recorder.failed());
//! ```
//!
//! Operands with heterogeneous runtime types go through [`Inspect`].
//! Handing an evaluator an operand it cannot work with (membership in a
//! number, direction of a string) is a contract violation and raises
//! immediately rather than producing a false condition.

pub mod assert;
pub mod condition;
pub mod predicates;
pub mod reporter;

pub use assert::*;
pub use condition::{Check, Condition};
pub use predicates::*;
pub use reporter::{Recorder, Reporter};

pub use veracity_core::{
    channel, inspect_struct, raise, raise_fmt, raise_joined, raise_now, AssertionFailed,
    ChanDir, Channel, FailureKind, Inspect, Kind, Nil, Receiver, Sender,
};
