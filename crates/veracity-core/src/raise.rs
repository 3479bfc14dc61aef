//! Raising the assertion failure signal
//!
//! Every helper here unwinds with an [`AssertionFailed`] payload via
//! [`std::panic::panic_any`]. All of them are `#[track_caller]`, so the
//! recorded location is the first caller outside this crate's raising path.

use std::fmt::{self, Display, Write};

use crate::error::{AssertionFailed, FailureKind};

/// Raise a check failure with `message`
#[track_caller]
pub fn raise(message: impl Into<String>) -> ! {
    fire(AssertionFailed::new(message))
}

/// Raise a check failure with a formatted message
#[track_caller]
pub fn raise_fmt(args: fmt::Arguments<'_>) -> ! {
    raise(fmt::format(args))
}

/// Raise a check failure whose message is `parts` joined by single spaces
#[track_caller]
pub fn raise_joined(parts: &[&dyn Display]) -> ! {
    let mut message = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            message.push(' ');
        }
        let _ = write!(message, "{}", part);
    }
    raise(message)
}

/// Raise a check failure with an empty message
#[track_caller]
pub fn raise_now() -> ! {
    raise(String::new())
}

/// Raise a contract violation: an evaluator was misused
#[track_caller]
pub fn violation(message: impl Into<String>) -> ! {
    fire(AssertionFailed::contract(message))
}

/// Unwind with `failure` as the payload
#[track_caller]
pub fn fire(failure: AssertionFailed) -> ! {
    #[cfg(feature = "panic-hook")]
    hook::install();

    match failure.kind() {
        FailureKind::Check => tracing::debug!(
            file = failure.file(),
            line = failure.line(),
            "{}",
            failure
        ),
        FailureKind::Contract => tracing::warn!(
            file = failure.file(),
            line = failure.line(),
            "{}",
            failure
        ),
    }

    std::panic::panic_any(failure)
}

/// Raise with a formatted message, `format!` style
#[macro_export]
macro_rules! raise {
    ($($arg:tt)*) => {
        $crate::raise_fmt(::std::format_args!($($arg)*))
    };
}

#[cfg(feature = "panic-hook")]
pub mod hook {
    //! Readable output for `AssertionFailed` payloads
    //!
    //! The standard hook only prints string payloads. This hook prints an
    //! `AssertionFailed` the way a string panic would appear and defers every
    //! other payload to the hook that was installed before it.

    use std::panic;
    use std::sync::Once;

    use crate::error::AssertionFailed;

    static INSTALL: Once = Once::new();

    /// Install the hook once per process
    pub fn install() {
        INSTALL.call_once(|| {
            let previous = panic::take_hook();
            panic::set_hook(Box::new(move |info| {
                match info.payload().downcast_ref::<AssertionFailed>() {
                    Some(failure) => {
                        let thread = std::thread::current();
                        eprintln!(
                            "thread '{}' panicked at {}:{}:\n{}",
                            thread.name().unwrap_or("<unnamed>"),
                            failure.file(),
                            failure.line(),
                            failure
                        );
                    }
                    None => previous(info),
                }
            }));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, UnwindSafe};

    fn payload_of<F: FnOnce() + UnwindSafe>(f: F) -> AssertionFailed {
        let payload = catch_unwind(f).expect_err("expected a raise");
        *payload
            .downcast::<AssertionFailed>()
            .expect("payload should be AssertionFailed")
    }

    #[test]
    fn test_raise_carries_message() {
        let failure = payload_of(|| raise("boom"));
        assert_eq!(failure.message(), "boom");
        assert_eq!(failure.kind(), FailureKind::Check);
    }

    #[test]
    fn test_raise_fmt_and_macro() {
        let failure = payload_of(|| raise_fmt(format_args!("{} + {}", 1, 2)));
        assert_eq!(failure.message(), "1 + 2");

        let failure = payload_of(|| crate::raise!("x = {}", 7));
        assert_eq!(failure.message(), "x = 7");
    }

    #[test]
    fn test_raise_joined() {
        let failure = payload_of(|| raise_joined(&[&"a", &1, &'c']));
        assert_eq!(failure.message(), "a 1 c");
    }

    #[test]
    fn test_raise_now_is_empty() {
        let failure = payload_of(|| raise_now());
        assert_eq!(failure.message(), "");
    }

    #[test]
    fn test_violation_kind() {
        let failure = payload_of(|| violation("not a channel"));
        assert!(failure.is_contract_violation());
    }

    #[test]
    fn test_location_is_outer_caller() {
        let line = line!() + 1;
        let failure = payload_of(|| raise("here"));
        assert_eq!(failure.line(), line);
        assert!(failure.file().ends_with("raise.rs"));
    }
}
