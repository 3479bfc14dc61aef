//! Panic capture
//!
//! The callback runs inside [`catch_unwind`], so the evaluator always returns
//! a [`Condition`] and the captured panic never escapes.

use std::any::Any;
use std::error::Error;
use std::fmt::{self, Debug};
use std::panic::{catch_unwind, AssertUnwindSafe};

use veracity_core::AssertionFailed;

use crate::condition::{Check, Condition};
use crate::predicates::error::ErrorTarget;

type PayloadMatcher = Box<dyn Fn(&(dyn Any + Send)) -> bool>;

enum Signal {
    Nothing,
    Text(String),
    Value { matches: PayloadMatcher, shown: String },
    Error(Box<dyn ErrorTarget>),
}

/// What a callback is expected to panic with
pub struct Expected(Signal);

impl Expected {
    /// The callback must not panic
    pub fn nothing() -> Self {
        Expected(Signal::Nothing)
    }

    /// The payload must be of the same type as `value` and equal to it.
    ///
    /// String expectations match both `&'static str` and `String` payloads,
    /// since `panic!` produces either depending on its arguments.
    pub fn value<T: PartialEq + Debug + 'static>(value: T) -> Self {
        let any: &dyn Any = &value;
        if let Some(text) = any.downcast_ref::<&'static str>() {
            return Expected(Signal::Text(text.to_string()));
        }
        if let Some(text) = any.downcast_ref::<String>() {
            return Expected(Signal::Text(text.clone()));
        }

        let shown = format!("{:?}", value);
        let matches = move |payload: &(dyn Any + Send)| payload.downcast_ref::<T>() == Some(&value);
        Expected(Signal::Value {
            matches: Box::new(matches),
            shown,
        })
    }

    /// The payload must carry an error whose chain matches `target`
    pub fn error<T: ErrorTarget + 'static>(target: T) -> Self {
        Expected(Signal::Error(Box::new(target)))
    }

    fn is_nothing(&self) -> bool {
        matches!(self.0, Signal::Nothing)
    }

    fn matches(&self, payload: &(dyn Any + Send)) -> bool {
        match &self.0 {
            Signal::Nothing => false,
            Signal::Text(text) => payload_text(payload) == Some(text.as_str()),
            Signal::Value { matches, .. } => matches(payload),
            Signal::Error(target) => target.matches_payload(payload),
        }
    }
}

impl From<&'static str> for Expected {
    fn from(text: &'static str) -> Self {
        Expected::value(text)
    }
}

impl From<String> for Expected {
    fn from(text: String) -> Self {
        Expected(Signal::Text(text))
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Signal::Nothing => f.write_str("nothing"),
            Signal::Text(text) => write!(f, "{:?}", text),
            Signal::Value { shown, .. } => f.write_str(shown),
            Signal::Error(target) => f.write_str(&target.describe()),
        }
    }
}

impl Debug for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expected({})", self)
    }
}

fn payload_text(payload: &(dyn Any + Send)) -> Option<&str> {
    if let Some(text) = payload.downcast_ref::<&'static str>() {
        return Some(*text);
    }
    payload.downcast_ref::<String>().map(String::as_str)
}

/// Human-readable form of a panic payload
pub fn describe_payload(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload_text(payload) {
        return format!("{:?}", text);
    }
    if let Some(failure) = payload.downcast_ref::<AssertionFailed>() {
        return failure.to_string();
    }
    if let Some(err) = payload.downcast_ref::<Box<dyn Error + Send + Sync>>() {
        return err.to_string();
    }
    if let Some(err) = payload.downcast_ref::<Box<dyn Error + Send>>() {
        return err.to_string();
    }
    "a non-printable payload".to_string()
}

/// Run `f` and check what it panicked with against `expected`.
///
/// With [`Expected::nothing`], the condition is true when `f` returns
/// normally. Otherwise it is true when `f` panics with a matching payload.
///
/// ```rust
/// use veracity::{expect_panic, Expected};
///
/// assert!(expect_panic("", || panic!("")).result());
/// assert!(expect_panic(Expected::nothing(), || {}).result());
/// assert!(!expect_panic(Expected::value(7u32), || {}).result());
/// ```
pub fn expect_panic<F: FnOnce()>(expected: impl Into<Expected>, f: F) -> Condition {
    let expected = expected.into();
    let payload = catch_unwind(AssertUnwindSafe(f)).err();

    let got = match &payload {
        Some(payload) => {
            let described = describe_payload(&**payload);
            tracing::trace!(payload = %described, "captured panic");
            described
        }
        None => "nothing".to_string(),
    };

    let result = match &payload {
        Some(payload) => expected.matches(&**payload),
        None => expected.is_nothing(),
    };

    if expected.is_nothing() {
        Condition::new(
            Check::NoPanic,
            result,
            "expect a panic, but got nothing",
            format!("expect no panic, but got {}", got),
        )
    } else {
        Condition::new(
            Check::Panic,
            result,
            format!("expect no panic of {}, but got {}", expected, got),
            format!("expect a panic of {}, but got {}", expected, got),
        )
    }
}

/// True if `f` returns without panicking
pub fn expect_no_panic<F: FnOnce()>(f: F) -> Condition {
    expect_panic(Expected::nothing(), f)
}

/// Negation of [`expect_panic`]: true unless `f` behaves as `expected`
pub fn expect_not_panic<F: FnOnce()>(expected: impl Into<Expected>, f: F) -> Condition {
    expect_panic(expected, f).revert()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::error::error_type;
    use std::cell::Cell;
    use thiserror::Error;
    use veracity_core::{raise, raise_joined, raise_now};

    #[derive(Error, Debug, Clone, PartialEq)]
    #[error("quota exceeded")]
    struct QuotaError;

    #[derive(Error, Debug)]
    #[error("upload failed")]
    struct UploadError {
        #[source]
        cause: QuotaError,
    }

    #[test]
    fn test_string_payloads() {
        assert!(expect_panic("", || panic!("")).result());
        assert!(expect_panic("boom", || panic!("boom")).result());
        assert!(expect_panic("n = 3", || panic!("n = {}", 3)).result());
        assert!(expect_panic(String::from("boom"), || panic!("boom")).result());
        assert!(!expect_panic("boom", || panic!("other")).result());
    }

    #[test]
    fn test_nothing() {
        assert!(expect_panic(Expected::nothing(), || {}).result());
        assert!(expect_no_panic(|| {}).result());
        assert!(!expect_no_panic(|| panic!("x")).result());
        assert!(!expect_panic("x", || {}).result());
    }

    #[test]
    fn test_typed_values() {
        assert!(expect_panic(Expected::value(42u32), || std::panic::panic_any(42u32)).result());
        assert!(!expect_panic(Expected::value(42u32), || std::panic::panic_any(42i64)).result());
        assert!(!expect_panic(Expected::value(42u32), || std::panic::panic_any(7u32)).result());
    }

    #[test]
    fn test_error_chain_in_payload() {
        let boxed: Box<dyn Error + Send + Sync> = Box::new(UploadError { cause: QuotaError });
        let c = expect_panic(Expected::error(QuotaError), move || std::panic::panic_any(boxed));
        assert!(c.result());

        assert!(expect_panic(Expected::error(QuotaError), || std::panic::panic_any(QuotaError)).result());
        assert!(!expect_panic(Expected::error(QuotaError), || panic!("quota exceeded")).result());
    }

    #[test]
    fn test_assertion_failures_match_by_type() {
        let target = || Expected::error(error_type::<AssertionFailed>());
        assert!(expect_panic(target(), || raise("")).result());
        assert!(expect_panic(target(), || raise_now()).result());
        assert!(expect_panic(target(), || raise_joined(&[&1, &"two"])).result());
        assert!(expect_panic(target(), || veracity_core::raise!("{}", 1)).result());
        assert!(!expect_panic(target(), || panic!("plain")).result());
    }

    #[test]
    fn test_side_effects_run_once() {
        let calls = Cell::new(0);
        let _ = expect_no_panic(|| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_messages() {
        let c = expect_no_panic(|| panic!("boom"));
        assert_eq!(c.false_message(), "expect no panic, but got \"boom\"");
        assert_eq!(c.true_message(), "expect a panic, but got nothing");

        let c = expect_panic("boom", || {});
        assert_eq!(c.false_message(), "expect a panic of \"boom\", but got nothing");
    }

    #[test]
    fn test_not_panic_reverts() {
        let c = expect_not_panic("boom", || panic!("boom"));
        assert!(!c.result());
        assert_eq!(c.check(), Check::NoPanic);
    }

    #[test]
    fn test_check_tags() {
        assert_eq!(expect_no_panic(|| {}).check(), Check::NoPanic);
        assert_eq!(expect_panic(Expected::nothing(), || {}).check(), Check::NoPanic);
        assert_eq!(expect_panic("x", || panic!("x")).check(), Check::Panic);

        let c = expect_not_panic(Expected::nothing(), || panic!("x"));
        assert!(c.result());
        assert_eq!(c.check(), Check::Panic);
    }

    #[test]
    fn test_describe_payload() {
        let payload: Box<dyn Any + Send> = Box::new(AssertionFailed::new("x"));
        assert_eq!(describe_payload(&*payload), "assertion failed: x");
        let payload: Box<dyn Any + Send> = Box::new(3u8);
        assert_eq!(describe_payload(&*payload), "a non-printable payload");
    }
}
