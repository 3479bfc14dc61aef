//! Error-chain membership
//!
//! An error matches a target if the error itself or any error reachable
//! through [`Error::source`] matches it.

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::marker::PhantomData;

use veracity_core::AssertionFailed;

use crate::condition::{Check, Condition};

/// Something an error can be compared against
pub trait ErrorTarget {
    /// Whether `err` itself, ignoring its sources, is this target
    fn matches(&self, err: &(dyn Error + 'static)) -> bool;

    /// Whether the absence of an error counts as this target
    fn matches_absent(&self) -> bool {
        false
    }

    /// Whether a panic payload carries an error whose chain matches
    fn matches_payload(&self, payload: &(dyn Any + Send)) -> bool {
        payload_error(payload).is_some_and(|err| chain_matches(self, err))
    }

    fn describe(&self) -> String;
}

impl<E: Error + PartialEq + 'static> ErrorTarget for E {
    fn matches(&self, err: &(dyn Error + 'static)) -> bool {
        err.downcast_ref::<E>() == Some(self)
    }

    fn matches_payload(&self, payload: &(dyn Any + Send)) -> bool {
        match payload.downcast_ref::<E>() {
            Some(err) => chain_matches(self, err),
            None => payload_error(payload).is_some_and(|err| chain_matches(self, err)),
        }
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

/// Matches any error of type `E`, whatever its value
pub struct ErrorType<E>(PhantomData<fn() -> E>);

/// Target matching every error of type `E`
pub fn error_type<E: Error + 'static>() -> ErrorType<E> {
    ErrorType(PhantomData)
}

impl<E: Error + 'static> ErrorTarget for ErrorType<E> {
    fn matches(&self, err: &(dyn Error + 'static)) -> bool {
        err.is::<E>()
    }

    fn matches_payload(&self, payload: &(dyn Any + Send)) -> bool {
        payload.is::<E>() || payload_error(payload).is_some_and(|err| chain_matches(self, err))
    }

    fn describe(&self) -> String {
        std::any::type_name::<E>().to_string()
    }
}

impl<E> fmt::Debug for ErrorType<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ErrorType<{}>", std::any::type_name::<E>())
    }
}

/// Target matched only by the absence of an error
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoError;

impl ErrorTarget for NoError {
    fn matches(&self, _err: &(dyn Error + 'static)) -> bool {
        false
    }

    fn matches_absent(&self) -> bool {
        true
    }

    fn matches_payload(&self, _payload: &(dyn Any + Send)) -> bool {
        false
    }

    fn describe(&self) -> String {
        "nil".to_string()
    }
}

/// Walk `err` and its sources, looking for `target`
pub fn chain_matches<T: ErrorTarget + ?Sized>(target: &T, err: &(dyn Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(err) = current {
        if target.matches(err) {
            return true;
        }
        current = err.source();
    }
    false
}

/// The error carried by a panic payload, for payload types known to hold one
pub fn payload_error(payload: &(dyn Any + Send)) -> Option<&(dyn Error + 'static)> {
    if let Some(failure) = payload.downcast_ref::<AssertionFailed>() {
        return Some(failure as &(dyn Error + 'static));
    }
    if let Some(err) = payload.downcast_ref::<Box<dyn Error + Send + Sync>>() {
        return Some(&**err as &(dyn Error + 'static));
    }
    if let Some(err) = payload.downcast_ref::<Box<dyn Error + Send>>() {
        return Some(&**err as &(dyn Error + 'static));
    }
    None
}

/// True if `err` matches at least one of `targets`.
///
/// A missing error only matches a target that accepts absence, such as
/// [`NoError`]. An empty target list never matches.
pub fn expect_error(err: Option<&(dyn Error + 'static)>, targets: &[&dyn ErrorTarget]) -> Condition {
    let result = match err {
        Some(err) => targets.iter().any(|target| chain_matches(*target, err)),
        None => targets.iter().any(|target| target.matches_absent()),
    };

    let got = err.map_or_else(|| "nil".to_string(), |err| err.to_string());
    let listed: Vec<String> = targets.iter().map(|target| target.describe()).collect();
    let listed = format!("[{}]", listed.join(", "));

    Condition::new(
        Check::ErrorIs,
        result,
        format!("expect an error not in {}, but got {}", listed, got),
        format!("expect an error in {}, but got {}", listed, got),
    )
}

pub fn expect_not_error(err: Option<&(dyn Error + 'static)>, targets: &[&dyn ErrorTarget]) -> Condition {
    expect_error(err, targets).revert()
}
