//! Raising shorthands: each `assert_x(..)` is `expect_x(..).assert("")`
//!
//! Failures are located at the caller of the `assert_*` function.

use std::error::Error;
use std::fmt::Debug;

use veracity_core::{Inspect, Kind};

use crate::predicates::*;

#[track_caller]
pub fn assert_equal<T: PartialEq + Debug>(a: T, b: T) {
    expect_equal(a, b).assert("")
}

#[track_caller]
pub fn assert_not_equal<T: PartialEq + Debug>(a: T, b: T) {
    expect_not_equal(a, b).assert("")
}

#[track_caller]
pub fn assert_less_than<T: Number>(a: T, b: T) {
    expect_less_than(a, b).assert("")
}

#[track_caller]
pub fn assert_not_less_than<T: Number>(a: T, b: T) {
    expect_not_less_than(a, b).assert("")
}

#[track_caller]
pub fn assert_greater_than<T: Number>(a: T, b: T) {
    expect_greater_than(a, b).assert("")
}

#[track_caller]
pub fn assert_not_greater_than<T: Number>(a: T, b: T) {
    expect_not_greater_than(a, b).assert("")
}

#[track_caller]
pub fn assert_zero<T: Number>(a: T) {
    expect_zero(a).assert("")
}

#[track_caller]
pub fn assert_not_zero<T: Number>(a: T) {
    expect_not_zero(a).assert("")
}

#[track_caller]
pub fn assert_nil(value: &dyn Inspect) {
    expect_nil(value).assert("")
}

#[track_caller]
pub fn assert_not_nil(value: &dyn Inspect) {
    expect_not_nil(value).assert("")
}

#[track_caller]
pub fn assert_empty(value: &dyn Inspect) {
    expect_empty(value).assert("")
}

#[track_caller]
pub fn assert_not_empty(value: &dyn Inspect) {
    expect_not_empty(value).assert("")
}

#[track_caller]
pub fn assert_kind(value: &dyn Inspect, kinds: &[Kind]) {
    expect_kind(value, kinds).assert("")
}

#[track_caller]
pub fn assert_not_kind(value: &dyn Inspect, kinds: &[Kind]) {
    expect_not_kind(value, kinds).assert("")
}

#[track_caller]
pub fn assert_same_type(values: &[&dyn Inspect]) {
    expect_same_type(values).assert("")
}

#[track_caller]
pub fn assert_not_same_type(values: &[&dyn Inspect]) {
    expect_not_same_type(values).assert("")
}

#[track_caller]
pub fn assert_writable(value: &dyn Inspect) {
    expect_writable(value).assert("")
}

#[track_caller]
pub fn assert_not_writable(value: &dyn Inspect) {
    expect_not_writable(value).assert("")
}

#[track_caller]
pub fn assert_readable(value: &dyn Inspect) {
    expect_readable(value).assert("")
}

#[track_caller]
pub fn assert_not_readable(value: &dyn Inspect) {
    expect_not_readable(value).assert("")
}

#[track_caller]
pub fn assert_error(err: Option<&(dyn Error + 'static)>, targets: &[&dyn ErrorTarget]) {
    expect_error(err, targets).assert("")
}

#[track_caller]
pub fn assert_not_error(err: Option<&(dyn Error + 'static)>, targets: &[&dyn ErrorTarget]) {
    expect_not_error(err, targets).assert("")
}

#[track_caller]
pub fn assert_contains(element: &dyn Inspect, container: &dyn Inspect) {
    expect_contains(element, container).assert("")
}

#[track_caller]
pub fn assert_not_contains(element: &dyn Inspect, container: &dyn Inspect) {
    expect_not_contains(element, container).assert("")
}

#[track_caller]
pub fn assert_panic<F: FnOnce()>(expected: impl Into<Expected>, f: F) {
    expect_panic(expected, f).assert("")
}

#[track_caller]
pub fn assert_no_panic<F: FnOnce()>(f: F) {
    expect_no_panic(f).assert("")
}

#[track_caller]
pub fn assert_not_panic<F: FnOnce()>(expected: impl Into<Expected>, f: F) {
    expect_not_panic(expected, f).assert("")
}

#[track_caller]
pub fn assert_true(value: bool) {
    expect_true(value).assert("")
}

#[track_caller]
pub fn assert_false(value: bool) {
    expect_false(value).assert("")
}
