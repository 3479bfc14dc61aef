//! Runtime kind tags

use std::fmt;

/// Runtime kind of an inspected value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// The untyped nil ([`crate::Nil`])
    Nil,
    Unit,
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Int128,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uint128,
    Float32,
    Float64,
    Char,
    String,
    /// Fixed-size array
    Array,
    /// Growable or borrowed sequence
    Slice,
    Map,
    Chan,
    Func,
    Pointer,
    Option,
    Struct,
}

impl Kind {
    /// Kinds whose values may hold nil
    pub const NILABLE: &'static [Kind] = &[
        Kind::Chan,
        Kind::Func,
        Kind::Map,
        Kind::Pointer,
        Kind::Slice,
        Kind::Option,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Kind::Nil => "nil",
            Kind::Unit => "unit",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Int8 => "int8",
            Kind::Int16 => "int16",
            Kind::Int32 => "int32",
            Kind::Int64 => "int64",
            Kind::Int128 => "int128",
            Kind::Uint => "uint",
            Kind::Uint8 => "uint8",
            Kind::Uint16 => "uint16",
            Kind::Uint32 => "uint32",
            Kind::Uint64 => "uint64",
            Kind::Uint128 => "uint128",
            Kind::Float32 => "float32",
            Kind::Float64 => "float64",
            Kind::Char => "char",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Slice => "slice",
            Kind::Map => "map",
            Kind::Chan => "chan",
            Kind::Func => "func",
            Kind::Pointer => "ptr",
            Kind::Option => "option",
            Kind::Struct => "struct",
        }
    }

    pub fn is_nilable(&self) -> bool {
        Self::NILABLE.contains(self)
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Kind::Int
                | Kind::Int8
                | Kind::Int16
                | Kind::Int32
                | Kind::Int64
                | Kind::Int128
                | Kind::Uint
                | Kind::Uint8
                | Kind::Uint16
                | Kind::Uint32
                | Kind::Uint64
                | Kind::Uint128
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Kind::Float32 | Kind::Float64)
    }

    pub fn is_number(&self) -> bool {
        self.is_integer() || self.is_float()
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction a channel handle may move values in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

impl ChanDir {
    #[inline]
    pub fn can_send(self) -> bool {
        matches!(self, ChanDir::Both | ChanDir::Send)
    }

    #[inline]
    pub fn can_recv(self) -> bool {
        matches!(self, ChanDir::Both | ChanDir::Recv)
    }
}

impl fmt::Display for ChanDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChanDir::Both => f.write_str("chan"),
            ChanDir::Send => f.write_str("chan<-"),
            ChanDir::Recv => f.write_str("<-chan"),
        }
    }
}
