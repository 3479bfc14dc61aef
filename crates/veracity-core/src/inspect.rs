//! Runtime introspection of heterogeneous operands
//!
//! [`Inspect`] is the narrow reflection surface the generic evaluators rely
//! on: the runtime kind, the concrete type, nil-ness, length, channel
//! direction, and a searchable [`Container`] view. Values are rendered when
//! a condition is built, so messages capture operands as they were then.

use std::any::{Any, TypeId};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

use crate::container::{render_entries, render_pairs, Container};
use crate::kind::{ChanDir, Kind};

/// A value the generic evaluators can look into at runtime
pub trait Inspect: Any + Debug {
    /// The concrete value, for downcasting and type identity
    fn as_any(&self) -> &dyn Any;

    fn kind(&self) -> Kind;

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Only meaningful for nilable kinds
    fn is_nil(&self) -> bool {
        false
    }

    /// `None` when the value has no observable length
    fn len(&self) -> Option<usize> {
        None
    }

    fn chan_dir(&self) -> Option<ChanDir> {
        None
    }

    fn container(&self) -> Option<Container<'_>> {
        None
    }

    /// Snapshot text used in condition messages
    fn render(&self) -> String {
        format!("{:?}", self)
    }
}

impl dyn Inspect {
    /// `TypeId` of the concrete value, seen through any forwarding wrapper
    pub fn value_type_id(&self) -> TypeId {
        Any::type_id(self.as_any())
    }

    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// The untyped nil
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Nil;

impl Inspect for Nil {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn kind(&self) -> Kind {
        Kind::Nil
    }

    fn is_nil(&self) -> bool {
        true
    }

    fn render(&self) -> String {
        "nil".to_string()
    }
}

macro_rules! impl_scalar {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn kind(&self) -> Kind {
                    Kind::$kind
                }
            }
        )*
    };
}

impl_scalar! {
    () => Unit,
    bool => Bool,
    isize => Int,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    i128 => Int128,
    usize => Uint,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    u128 => Uint128,
    f32 => Float32,
    f64 => Float64,
    char => Char,
}

impl Inspect for String {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn kind(&self) -> Kind {
        Kind::String
    }

    fn len(&self) -> Option<usize> {
        Some(String::len(self))
    }

    fn container(&self) -> Option<Container<'_>> {
        Some(Container::Text(self))
    }
}

impl Inspect for &'static str {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn kind(&self) -> Kind {
        Kind::String
    }

    fn len(&self) -> Option<usize> {
        Some(str::len(self))
    }

    fn container(&self) -> Option<Container<'_>> {
        Some(Container::Text(self))
    }
}

macro_rules! impl_sequence {
    ($($ty:ty => $kind:ident [$($gen:tt)*]),* $(,)?) => {
        $(
            impl<$($gen)*> Inspect for $ty {
                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn kind(&self) -> Kind {
                    Kind::$kind
                }

                fn len(&self) -> Option<usize> {
                    Some(self.iter().len())
                }

                fn container(&self) -> Option<Container<'_>> {
                    Some(Container::Sequence(self))
                }

                fn render(&self) -> String {
                    render_entries(self.iter())
                }
            }
        )*
    };
}

impl_sequence! {
    Vec<T> => Slice [T: Debug + PartialEq + 'static],
    VecDeque<T> => Slice [T: Debug + PartialEq + 'static],
    &'static [T] => Slice [T: Debug + PartialEq + 'static],
    [T; N] => Array [T: Debug + PartialEq + 'static, const N: usize],
}

impl<K, V, S> Inspect for HashMap<K, V, S>
where
    K: Eq + Hash + Debug + 'static,
    V: Debug + 'static,
    S: BuildHasher + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn kind(&self) -> Kind {
        Kind::Map
    }

    fn len(&self) -> Option<usize> {
        Some(HashMap::len(self))
    }

    fn container(&self) -> Option<Container<'_>> {
        Some(Container::Map(self))
    }

    fn render(&self) -> String {
        render_pairs(self.iter())
    }
}

impl<K, V> Inspect for BTreeMap<K, V>
where
    K: Ord + Debug + 'static,
    V: Debug + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn kind(&self) -> Kind {
        Kind::Map
    }

    fn len(&self) -> Option<usize> {
        Some(BTreeMap::len(self))
    }

    fn container(&self) -> Option<Container<'_>> {
        Some(Container::Map(self))
    }

    fn render(&self) -> String {
        render_pairs(self.iter())
    }
}

impl<T: Debug + 'static> Inspect for Option<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn kind(&self) -> Kind {
        Kind::Option
    }

    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized + 'static> Inspect for *const T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn kind(&self) -> Kind {
        Kind::Pointer
    }

    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized + 'static> Inspect for *mut T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn kind(&self) -> Kind {
        Kind::Pointer
    }

    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized + Debug + 'static> Inspect for Rc<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn kind(&self) -> Kind {
        Kind::Pointer
    }
}

impl<T: ?Sized + Debug + 'static> Inspect for Arc<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn kind(&self) -> Kind {
        Kind::Pointer
    }
}

// A box is looked through, the way a dynamically typed holder reports the
// value it holds rather than itself.
impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }

    fn kind(&self) -> Kind {
        (**self).kind()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }

    fn len(&self) -> Option<usize> {
        (**self).len()
    }

    fn chan_dir(&self) -> Option<ChanDir> {
        (**self).chan_dir()
    }

    fn container(&self) -> Option<Container<'_>> {
        (**self).container()
    }

    fn render(&self) -> String {
        (**self).render()
    }
}

impl<R: 'static> Inspect for fn() -> R {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn kind(&self) -> Kind {
        Kind::Func
    }
}

impl<A: 'static, R: 'static> Inspect for fn(A) -> R {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn kind(&self) -> Kind {
        Kind::Func
    }
}

impl<A: 'static, B: 'static, R: 'static> Inspect for fn(A, B) -> R {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn kind(&self) -> Kind {
        Kind::Func
    }
}

/// Implement [`Inspect`] for plain data types, reported with kind
/// [`Kind::Struct`]
///
/// ```rust
/// #[derive(Debug)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// veracity_core::inspect_struct!(Point);
///
/// use veracity_core::{Inspect, Kind};
/// assert_eq!(Point { x: 1, y: 2 }.kind(), Kind::Struct);
/// ```
#[macro_export]
macro_rules! inspect_struct {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Inspect for $ty {
                fn as_any(&self) -> &dyn ::std::any::Any {
                    self
                }

                fn kind(&self) -> $crate::Kind {
                    $crate::Kind::Struct
                }
            }
        )+
    };
}
