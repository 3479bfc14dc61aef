//! Condition values and the reactions they support

use std::fmt;
use std::ops::Not;
use std::panic::Location;

use veracity_core::raise;

use crate::reporter::Reporter;

/// Which check produced a [`Condition`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Check {
    Equal,
    NotEqual,
    LessThan,
    NotLessThan,
    GreaterThan,
    NotGreaterThan,
    Panic,
    NoPanic,
    Nil,
    NotNil,
    Empty,
    NotEmpty,
    KindIs,
    KindIsNot,
    SameType,
    NotSameType,
    Writable,
    NotWritable,
    Readable,
    NotReadable,
    ErrorIs,
    ErrorIsNot,
    Contains,
    NotContains,
    True,
    False,
}

impl Check {
    /// The logically opposite check. Applying it twice is the identity.
    pub fn negate(self) -> Check {
        use Check::*;
        match self {
            Equal => NotEqual,
            NotEqual => Equal,
            LessThan => NotLessThan,
            NotLessThan => LessThan,
            GreaterThan => NotGreaterThan,
            NotGreaterThan => GreaterThan,
            Panic => NoPanic,
            NoPanic => Panic,
            Nil => NotNil,
            NotNil => Nil,
            Empty => NotEmpty,
            NotEmpty => Empty,
            KindIs => KindIsNot,
            KindIsNot => KindIs,
            SameType => NotSameType,
            NotSameType => SameType,
            Writable => NotWritable,
            NotWritable => Writable,
            Readable => NotReadable,
            NotReadable => Readable,
            ErrorIs => ErrorIsNot,
            ErrorIsNot => ErrorIs,
            Contains => NotContains,
            NotContains => Contains,
            True => False,
            False => True,
        }
    }

    pub fn name(&self) -> &'static str {
        use Check::*;
        match self {
            Equal => "equal",
            NotEqual => "not-equal",
            LessThan => "less-than",
            NotLessThan => "not-less-than",
            GreaterThan => "greater-than",
            NotGreaterThan => "not-greater-than",
            Panic => "panic",
            NoPanic => "no-panic",
            Nil => "nil",
            NotNil => "not-nil",
            Empty => "empty",
            NotEmpty => "not-empty",
            KindIs => "kind-is",
            KindIsNot => "kind-is-not",
            SameType => "same-type",
            NotSameType => "not-same-type",
            Writable => "writable",
            NotWritable => "not-writable",
            Readable => "readable",
            NotReadable => "not-readable",
            ErrorIs => "error-is",
            ErrorIsNot => "error-is-not",
            Contains => "contains",
            NotContains => "not-contains",
            True => "true",
            False => "false",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a check, with an explanation for either outcome.
///
/// Both messages are rendered when the condition is built, so they describe
/// the operands as they were at evaluation time. Keeping both lets
/// [`Condition::revert`] negate without re-evaluating.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "a condition does nothing until asserted, tested, or reacted on"]
pub struct Condition {
    result: bool,
    check: Check,
    true_message: String,
    false_message: String,
}

impl Condition {
    pub(crate) fn new(
        check: Check,
        result: bool,
        true_message: impl Into<String>,
        false_message: impl Into<String>,
    ) -> Self {
        Condition {
            result,
            check,
            true_message: true_message.into(),
            false_message: false_message.into(),
        }
    }

    pub fn result(&self) -> bool {
        self.result
    }

    pub fn check(&self) -> Check {
        self.check
    }

    /// The explanation matching the current result
    pub fn message(&self) -> &str {
        if self.result {
            &self.true_message
        } else {
            &self.false_message
        }
    }

    pub fn true_message(&self) -> &str {
        &self.true_message
    }

    pub fn false_message(&self) -> &str {
        &self.false_message
    }

    /// Raise [`AssertionFailed`](veracity_core::AssertionFailed) if false.
    ///
    /// An empty `message` falls back to the condition's own explanation.
    ///
    /// # Panics
    ///
    /// Unwinds with an `AssertionFailed` payload when the condition is false.
    #[track_caller]
    pub fn assert(&self, message: &str) {
        if self.result {
            return;
        }
        if message.is_empty() {
            raise(self.false_message.as_str())
        } else {
            raise(message)
        }
    }

    /// Raise with a formatted message if false, ignoring the condition's own
    /// explanation. See also [`assertf!`](crate::assertf).
    ///
    /// # Panics
    ///
    /// Unwinds with an `AssertionFailed` payload when the condition is false.
    #[track_caller]
    pub fn assert_fmt(&self, args: fmt::Arguments<'_>) {
        if !self.result {
            raise(fmt::format(args))
        }
    }

    /// Report a false condition to `reporter` and keep going.
    ///
    /// The report is located at the caller of `test`.
    #[track_caller]
    pub fn test<R: Reporter + ?Sized>(&self, reporter: &R) {
        if self.result {
            return;
        }
        let location = Location::caller();
        tracing::debug!(
            check = %self.check,
            file = location.file(),
            line = location.line(),
            "{}",
            self.false_message
        );
        reporter.log(location, &self.false_message);
        reporter.fail();
    }

    /// Run `f` if true
    pub fn on_true<F: FnOnce()>(self, f: F) -> Self {
        if self.result {
            f();
        }
        self
    }

    /// Run `f` if false
    pub fn on_false<F: FnOnce()>(self, f: F) -> Self {
        if !self.result {
            f();
        }
        self
    }

    /// The negated condition: result inverted, explanations swapped
    pub fn revert(self) -> Self {
        Condition {
            result: !self.result,
            check: self.check.negate(),
            true_message: self.false_message,
            false_message: self.true_message,
        }
    }
}

impl Not for Condition {
    type Output = Condition;

    fn not(self) -> Condition {
        self.revert()
    }
}

impl From<Condition> for bool {
    fn from(c: Condition) -> bool {
        c.result
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}: {}] {}", self.check, self.result, self.message())
    }
}

/// Assert a condition with a `format!` style message
///
/// ```rust,should_panic
/// use veracity::{assertf, expect_equal};
///
/// let got = 3;
/// assertf!(expect_equal(got, 4), "expected four, got {}", got);
/// ```
#[macro_export]
macro_rules! assertf {
    ($cond:expr, $($arg:tt)*) => {
        $cond.assert_fmt(::std::format_args!($($arg)*))
    };
}
