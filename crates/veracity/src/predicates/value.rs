//! Checks over runtime-typed values: nil, emptiness, kind, type, truth

use std::any::TypeId;

use veracity_core::{violation, Inspect, Kind};

use crate::condition::{Check, Condition};

/// True if `value` is the untyped nil, or a nilable kind holding nil.
///
/// A nilable value is still nil when reached through a `Box<dyn Inspect>`,
/// since the box reports the kind of what it holds.
pub fn expect_nil(value: &dyn Inspect) -> Condition {
    let kind = value.kind();
    let result = kind == Kind::Nil || (kind.is_nilable() && value.is_nil());
    let rendered = value.render();
    Condition::new(
        Check::Nil,
        result,
        format!("expect a not nil value, but got {}", rendered),
        format!("expect a nil value, but got {}", rendered),
    )
}

pub fn expect_not_nil(value: &dyn Inspect) -> Condition {
    expect_nil(value).revert()
}

/// True if `value` has length zero.
///
/// # Panics
///
/// Raises a contract violation when `value` has no observable length.
#[track_caller]
pub fn expect_empty(value: &dyn Inspect) -> Condition {
    let kind = value.kind();
    let len = match value.len() {
        Some(len) => len,
        None => violation(format!(
            "emptiness needs a string, array, slice, map, or channel, got {} ({})",
            value.type_name(),
            kind
        )),
    };
    Condition::new(
        Check::Empty,
        len == 0,
        format!("expect a not empty {}, but got empty", kind),
        format!("expect an empty {}, but got {}", kind, value.render()),
    )
}

#[track_caller]
pub fn expect_not_empty(value: &dyn Inspect) -> Condition {
    expect_empty(value).revert()
}

/// True if the kind of `value` is one of `kinds`
pub fn expect_kind(value: &dyn Inspect, kinds: &[Kind]) -> Condition {
    let kind = value.kind();
    let listed = kind_list(kinds);
    Condition::new(
        Check::KindIs,
        kinds.contains(&kind),
        format!("expect a value not in {}, but got {}", listed, kind),
        format!("expect a value in {}, but got {}", listed, kind),
    )
}

pub fn expect_not_kind(value: &dyn Inspect, kinds: &[Kind]) -> Condition {
    expect_kind(value, kinds).revert()
}

/// True if every value has the same concrete type.
///
/// # Panics
///
/// Raises a contract violation when `values` is empty.
#[track_caller]
pub fn expect_same_type(values: &[&dyn Inspect]) -> Condition {
    let first = match values.first() {
        Some(first) => *first,
        None => violation("a type comparison needs at least one value"),
    };

    // Distinct types in first-seen order
    let mut seen: Vec<(TypeId, &'static str)> = Vec::new();
    for value in values {
        let id = value.value_type_id();
        if !seen.iter().any(|(other, _)| *other == id) {
            seen.push((id, value.type_name()));
        }
    }
    let names: Vec<&str> = seen.iter().map(|(_, name)| *name).collect();

    Condition::new(
        Check::SameType,
        seen.len() == 1,
        format!(
            "expect values to be not the same type, but got only {}",
            first.type_name()
        ),
        format!(
            "expect values to be the same type, but got [{}]",
            names.join(", ")
        ),
    )
}

#[track_caller]
pub fn expect_not_same_type(values: &[&dyn Inspect]) -> Condition {
    expect_same_type(values).revert()
}

pub fn expect_true(value: bool) -> Condition {
    Condition::new(
        Check::True,
        value,
        "expect false, but got true",
        "expect true, but got false",
    )
}

pub fn expect_false(value: bool) -> Condition {
    expect_true(value).revert()
}

fn kind_list(kinds: &[Kind]) -> String {
    let names: Vec<&str> = kinds.iter().map(|k| k.name()).collect();
    format!("[{}]", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::panic::catch_unwind;
    use veracity_core::{channel, AssertionFailed, Nil};

    fn violation_of<F: FnOnce() -> Condition + std::panic::UnwindSafe>(f: F) -> AssertionFailed {
        let payload = catch_unwind(f).expect_err("expected a contract violation");
        *payload.downcast::<AssertionFailed>().unwrap()
    }

    #[test]
    fn test_nil() {
        let x: *const i32 = std::ptr::null();
        assert!(expect_nil(&x).result());
        assert!(expect_nil(&Nil).result());
        assert!(expect_nil(&None::<String>).result());

        let a: Vec<i32> = Vec::new();
        assert!(expect_not_nil(&a).result());
        assert!(expect_not_nil(&Box::new(5)).result());
        assert!(expect_not_nil(&0).result());
        assert!(expect_not_nil(&AssertionFailed::new("foo").to_string()).result());
    }

    #[test]
    fn test_nil_through_dynamic_holder() {
        let held: Box<dyn Inspect> = Box::new(std::ptr::null_mut::<u8>());
        assert!(expect_nil(&held).result());
        assert!(!expect_not_nil(&held).result());

        let held: Box<dyn Inspect> = Box::new(None::<i32>);
        assert!(expect_nil(&held).result());
    }

    #[test]
    fn test_nil_message_snapshot() {
        let c = expect_nil(&Some(3));
        assert_eq!(c.false_message(), "expect a nil value, but got Some(3)");
    }

    #[test]
    fn test_empty() {
        assert!(expect_empty(&"").result());
        assert!(expect_empty(&Vec::<i32>::new()).result());
        assert!(expect_empty(&HashMap::<i32, i32>::new()).result());
        assert!(expect_empty(&channel::<i32>()).result());
        assert!(expect_empty(&[0u8; 0]).result());

        assert!(expect_not_empty(&"a").result());
        assert!(expect_not_empty(&vec![1]).result());
        assert!(expect_not_empty(&[1]).result());
    }

    #[test]
    fn test_empty_on_every_channel() {
        let ch = channel::<u8>();
        let (tx, rx) = crossbeam_channel::unbounded::<u8>();
        let handles: [&dyn Inspect; 5] = [&ch, &ch.sender(), &ch.receiver(), &tx, &rx];
        for handle in handles {
            assert!(expect_empty(handle).result(), "{:?}", handle);
        }

        ch.send(1);
        tx.send(2).unwrap();
        let handles: [&dyn Inspect; 5] = [&ch, &ch.sender(), &ch.receiver(), &tx, &rx];
        for handle in handles {
            assert!(expect_not_empty(handle).result(), "{:?}", handle);
        }
    }

    #[test]
    fn test_empty_nonnil_container() {
        let v: Vec<i32> = Vec::with_capacity(8);
        assert!(!expect_nil(&v).result());
        assert!(expect_empty(&v).result());
    }

    #[test]
    fn test_empty_message_is_snapshot() {
        let mut v = vec![1, 2];
        let c = expect_empty(&v);
        v.clear();
        assert_eq!(c.false_message(), "expect an empty slice, but got [1, 2]");
    }

    #[test]
    fn test_empty_without_length_violates() {
        let failure = violation_of(|| expect_empty(&5));
        assert!(failure.is_contract_violation());
        assert!(failure.message().contains("i32"));
    }

    #[test]
    fn test_kind() {
        let cases: Vec<(Box<dyn Inspect>, Kind)> = vec![
            (Box::new(1isize) as Box<dyn Inspect>, Kind::Int),
            (Box::new("foo") as Box<dyn Inspect>, Kind::String),
            (Box::new(1.1f64) as Box<dyn Inspect>, Kind::Float64),
            (Box::new(true) as Box<dyn Inspect>, Kind::Bool),
            (Box::new('c') as Box<dyn Inspect>, Kind::Char),
        ];
        for (value, kind) in &cases {
            assert!(expect_kind(value, &[*kind]).result());
            assert!(expect_not_kind(value, &[Kind::Struct]).result());
        }
        assert!(expect_kind(&1u8, &[Kind::String, Kind::Uint8]).result());
    }

    #[test]
    fn test_kind_empty_set_is_false() {
        assert!(!expect_kind(&1, &[]).result());
        assert!(expect_not_kind(&1, &[]).result());
    }

    #[test]
    fn test_same_type() {
        assert!(expect_same_type(&[&1, &2]).result());
        assert!(expect_same_type(&[&1, &2, &3, &4, &5]).result());
        assert!(expect_same_type(&[&channel::<i32>(), &channel::<i32>()]).result());
        assert!(expect_same_type(&[&"only"]).result());

        assert!(expect_not_same_type(&[&1, &"a"]).result());
        assert!(expect_not_same_type(&[&1, &'3']).result());
        assert!(expect_not_same_type(&[&"a", &1]).result());
        assert!(expect_not_same_type(&[&1, &2, &3, &"a"]).result());
        assert!(expect_not_same_type(&[&vec![1], &[1]]).result());
    }

    #[test]
    fn test_same_type_lists_distinct_types() {
        let c = expect_same_type(&[&1, &2, &"a", &3]);
        assert_eq!(
            c.false_message(),
            "expect values to be the same type, but got [i32, &str]"
        );
    }

    #[test]
    fn test_same_type_empty_violates() {
        let failure = violation_of(|| expect_same_type(&[]));
        assert!(failure.is_contract_violation());
    }

    #[test]
    fn test_true_false() {
        assert!(expect_true(true).result());
        assert!(expect_false(false).result());
        assert_eq!(expect_true(false).false_message(), "expect true, but got false");
        assert_eq!(expect_false(true).false_message(), "expect false, but got true");
    }
}
