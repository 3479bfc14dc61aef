//! Veracity Core - Runtime introspection and the failure signal
//!
//! This crate defines what the condition engine needs underneath it:
//! - The `AssertionFailed` signal and the helpers that raise it
//! - Runtime kind tags (`Kind`, `ChanDir`)
//! - The `Inspect` introspection trait and its standard impls
//! - Container views for membership checks (map, sequence, text)
//! - Directional channels

pub mod error;
pub mod kind;
pub mod inspect;
pub mod container;
pub mod channel;
pub mod raise;

pub use error::*;
pub use kind::*;
pub use inspect::*;
pub use container::*;
pub use channel::{
    channel, Channel, Receiver, RecvError, RecvTimeoutError, SendError, Sender, TryRecvError,
};
pub use raise::{fire, raise, raise_fmt, raise_joined, raise_now, violation};
