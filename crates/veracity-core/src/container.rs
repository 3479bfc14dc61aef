//! Container views used by membership checks
//!
//! Only three shapes are searchable: maps (by key), sequences (by entry
//! value), and text (by character, byte, or substring). Everything else is
//! rejected by the evaluators before any search happens.

use std::any::Any;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt::{Debug, Write};
use std::hash::{BuildHasher, Hash};

/// Containers longer than this render only their first entries
pub const MAX_RENDERED_ENTRIES: usize = 10;

/// Tagged view over a searchable container
#[derive(Clone, Copy)]
pub enum Container<'a> {
    Map(&'a dyn MapView),
    Sequence(&'a dyn SeqView),
    Text(&'a str),
}

impl Container<'_> {
    pub fn shape(&self) -> &'static str {
        match self {
            Container::Map(_) => "map",
            Container::Sequence(_) => "sequence",
            Container::Text(_) => "text",
        }
    }
}

impl Debug for Container<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Container::Map(m) => write!(f, "Map<{}>({})", m.key_type(), m.len()),
            Container::Sequence(s) => write!(f, "Sequence<{}>({})", s.elem_type(), s.len()),
            Container::Text(t) => write!(f, "Text({:?})", t),
        }
    }
}

/// Ordered collection searched by value equality
pub trait SeqView {
    /// Type name of the entries
    fn elem_type(&self) -> &'static str;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `None` when `needle` is not of the entry type
    fn contains_value(&self, needle: &dyn Any) -> Option<bool>;
}

/// Keyed collection searched by key
pub trait MapView {
    /// Type name of the keys
    fn key_type(&self) -> &'static str;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `None` when `key` is not of the key type
    fn contains_key(&self, key: &dyn Any) -> Option<bool>;
}

macro_rules! impl_seq_view {
    ($($ty:ty => [$($gen:tt)*]),* $(,)?) => {
        $(
            impl<$($gen)*> SeqView for $ty {
                fn elem_type(&self) -> &'static str {
                    std::any::type_name::<T>()
                }

                fn len(&self) -> usize {
                    self.iter().len()
                }

                fn contains_value(&self, needle: &dyn Any) -> Option<bool> {
                    let needle = needle.downcast_ref::<T>()?;
                    Some(self.iter().any(|entry| entry == needle))
                }
            }
        )*
    };
}

impl_seq_view! {
    Vec<T> => [T: PartialEq + 'static],
    VecDeque<T> => [T: PartialEq + 'static],
    &'static [T] => [T: PartialEq + 'static],
    [T; N] => [T: PartialEq + 'static, const N: usize],
}

impl<K, V, S> MapView for HashMap<K, V, S>
where
    K: Eq + Hash + 'static,
    S: BuildHasher,
{
    fn key_type(&self) -> &'static str {
        std::any::type_name::<K>()
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn contains_key(&self, key: &dyn Any) -> Option<bool> {
        let key = key.downcast_ref::<K>()?;
        Some(HashMap::contains_key(self, key))
    }
}

impl<K, V> MapView for BTreeMap<K, V>
where
    K: Ord + 'static,
{
    fn key_type(&self) -> &'static str {
        std::any::type_name::<K>()
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn contains_key(&self, key: &dyn Any) -> Option<bool> {
        let key = key.downcast_ref::<K>()?;
        Some(BTreeMap::contains_key(self, key))
    }
}

/// Render a sequence as `[a, b, ...]`, keeping at most
/// [`MAX_RENDERED_ENTRIES`] entries
pub fn render_entries<I>(entries: I) -> String
where
    I: ExactSizeIterator,
    I::Item: Debug,
{
    let total = entries.len();
    let mut out = String::from("[");
    for (i, entry) in entries.take(MAX_RENDERED_ENTRIES).enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{:?}", entry);
    }
    push_elision(&mut out, total);
    out.push(']');
    out
}

/// Render a map as `{k: v, ...}`, keeping at most [`MAX_RENDERED_ENTRIES`]
/// pairs
pub fn render_pairs<I, K, V>(pairs: I) -> String
where
    I: ExactSizeIterator<Item = (K, V)>,
    K: Debug,
    V: Debug,
{
    let total = pairs.len();
    let mut out = String::from("{");
    for (i, (k, v)) in pairs.take(MAX_RENDERED_ENTRIES).enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{:?}: {:?}", k, v);
    }
    push_elision(&mut out, total);
    out.push('}');
    out
}

fn push_elision(out: &mut String, total: usize) {
    if total > MAX_RENDERED_ENTRIES {
        let _ = write!(out, ", ... {} more", total - MAX_RENDERED_ENTRIES);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_render_short_sequence() {
        assert_eq!(render_entries([1, 2, 3].iter()), "[1, 2, 3]");
        assert_eq!(render_entries(Vec::<i32>::new().iter()), "[]");
    }

    #[test]
    fn test_render_truncates_long_sequence() {
        let v: Vec<u32> = (0..25).collect();
        let rendered = render_entries(v.iter());
        assert_eq!(rendered, "[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, ... 15 more]");
    }

    #[test]
    fn test_render_exactly_limit_is_not_truncated() {
        let v: Vec<u32> = (0..10).collect();
        assert!(!render_entries(v.iter()).contains("more"));
    }

    #[test]
    fn test_render_pairs() {
        let m: BTreeMap<i32, &str> = [(1, "foo"), (2, "bar")].into_iter().collect();
        assert_eq!(render_pairs(m.iter()), "{1: \"foo\", 2: \"bar\"}");

        let big: BTreeMap<i32, i32> = (0..12).map(|i| (i, i)).collect();
        assert!(render_pairs(big.iter()).ends_with(", ... 2 more}"));
    }

    #[test]
    fn test_seq_view_type_mismatch() {
        let v = vec!["foo", "bar"];
        assert_eq!(v.contains_value(&"foo"), Some(true));
        assert_eq!(v.contains_value(&"buzz"), Some(false));
        assert_eq!(v.contains_value(&1i32), None);
    }

    #[test]
    fn test_map_view_key_mismatch() {
        let m: HashMap<i32, &str> = [(1, "foo")].into_iter().collect();
        assert_eq!(MapView::contains_key(&m, &1i32), Some(true));
        assert_eq!(MapView::contains_key(&m, &3i32), Some(false));
        assert_eq!(MapView::contains_key(&m, &1u8), None);
    }

    #[test]
    fn test_array_and_deque_views() {
        let a = [1u8, 2, 3];
        assert_eq!(a.contains_value(&2u8), Some(true));
        assert_eq!(SeqView::len(&a), 3);

        let d: VecDeque<char> = "abc".chars().collect();
        assert_eq!(d.contains_value(&'c'), Some(true));
        assert_eq!(d.contains_value(&"c"), None);
    }

    proptest! {
        #[test]
        fn prop_render_keeps_at_most_limit(v in prop::collection::vec(any::<u16>(), 0..40)) {
            let rendered = render_entries(v.iter());
            let shown = v.len().min(MAX_RENDERED_ENTRIES);
            let elided = v.len() > MAX_RENDERED_ENTRIES;

            prop_assert_eq!(rendered.contains("more"), elided);
            let separators = rendered.matches(", ").count();
            let expected = shown.saturating_sub(1) + usize::from(elided);
            prop_assert_eq!(separators, expected);
        }

        #[test]
        fn prop_seq_view_agrees_with_contains(v in prop::collection::vec(any::<u8>(), 0..20), x in any::<u8>()) {
            prop_assert_eq!(v.contains_value(&x), Some(v.contains(&x)));
        }
    }
}
