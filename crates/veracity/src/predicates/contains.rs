//! Container membership
//!
//! The element always comes first and the container second, for both
//! [`expect_contains`] and [`expect_not_contains`].

use veracity_core::{violation, Container, Inspect};

use crate::condition::{Check, Condition};

/// True if `element` is in `container`.
///
/// - map: `element` is one of its keys
/// - sequence: some entry equals `element`
/// - text: `element` is a `char`, an ASCII `u8` byte, or a substring (`&str`
///   or `String`) found in the text
///
/// # Panics
///
/// Raises a contract violation when `container` is not searchable, when
/// `element` is not of the key or entry type, or when text is searched for
/// anything other than a character, ASCII byte, or string.
#[track_caller]
pub fn expect_contains(element: &dyn Inspect, container: &dyn Inspect) -> Condition {
    let view = match container.container() {
        Some(view) => view,
        None => violation(format!(
            "membership needs a map, sequence, or string, got {} ({})",
            container.type_name(),
            container.kind()
        )),
    };

    let found = match view {
        Container::Map(map) => match map.contains_key(element.as_any()) {
            Some(found) => found,
            None => violation(format!(
                "map keys are {}, got a {} element",
                map.key_type(),
                element.type_name()
            )),
        },
        Container::Sequence(seq) => match seq.contains_value(element.as_any()) {
            Some(found) => found,
            None => violation(format!(
                "sequence entries are {}, got a {} element",
                seq.elem_type(),
                element.type_name()
            )),
        },
        Container::Text(text) => text_contains(element, text),
    };

    let element = element.render();
    let container = container.render();
    Condition::new(
        Check::Contains,
        found,
        format!("{} IN {}", element, container),
        format!("{} NOT IN {}", element, container),
    )
}

/// True unless `element` is in `container`. Same operand rules as
/// [`expect_contains`].
#[track_caller]
pub fn expect_not_contains(element: &dyn Inspect, container: &dyn Inspect) -> Condition {
    expect_contains(element, container).revert()
}

#[track_caller]
fn text_contains(element: &dyn Inspect, text: &str) -> bool {
    let any = element.as_any();
    if let Some(c) = any.downcast_ref::<char>() {
        return text.contains(*c);
    }
    if let Some(b) = any.downcast_ref::<u8>() {
        // A non-ASCII byte could only match inside a multi-byte character
        if !b.is_ascii() {
            violation(format!("text is searched by ASCII byte, got {:#04x}", b));
        }
        return text.as_bytes().contains(b);
    }
    if let Some(s) = any.downcast_ref::<&'static str>() {
        return text.contains(*s);
    }
    if let Some(s) = any.downcast_ref::<String>() {
        return text.contains(s.as_str());
    }
    violation(format!(
        "text is searched by char, byte, or string, got {} ({})",
        element.type_name(),
        element.kind()
    ))
}
