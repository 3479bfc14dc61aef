//! Equality and numeric ordering

use std::fmt::Debug;

use crate::condition::{Check, Condition};

mod sealed {
    pub trait Sealed {}
}

/// Primitive numbers that support ordering checks
pub trait Number: sealed::Sealed + Copy + PartialOrd + Debug + 'static {
    const ZERO: Self;
}

macro_rules! impl_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Number for $ty {
                const ZERO: Self = 0 as $ty;
            }
        )*
    };
}

impl_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// True if `a == b`
pub fn expect_equal<T: PartialEq + Debug>(a: T, b: T) -> Condition {
    Condition::new(
        Check::Equal,
        a == b,
        format!("got the same value ({:?})", a),
        format!("{:?} != {:?}", a, b),
    )
}

/// True if `a != b`
pub fn expect_not_equal<T: PartialEq + Debug>(a: T, b: T) -> Condition {
    expect_equal(a, b).revert()
}

/// True if `a < b`
pub fn expect_less_than<T: Number>(a: T, b: T) -> Condition {
    Condition::new(
        Check::LessThan,
        a < b,
        format!("{:?} is less than {:?}", a, b),
        format!("{:?} is not less than {:?}", a, b),
    )
}

/// True unless `a < b`
pub fn expect_not_less_than<T: Number>(a: T, b: T) -> Condition {
    expect_less_than(a, b).revert()
}

/// True if `a > b`
pub fn expect_greater_than<T: Number>(a: T, b: T) -> Condition {
    Condition::new(
        Check::GreaterThan,
        a > b,
        format!("{:?} is greater than {:?}", a, b),
        format!("{:?} is not greater than {:?}", a, b),
    )
}

/// True unless `a > b`
pub fn expect_not_greater_than<T: Number>(a: T, b: T) -> Condition {
    expect_greater_than(a, b).revert()
}

/// True if `a` is its type's zero
pub fn expect_zero<T: Number>(a: T) -> Condition {
    expect_equal(a, T::ZERO)
}

pub fn expect_not_zero<T: Number>(a: T) -> Condition {
    expect_not_equal(a, T::ZERO)
}
