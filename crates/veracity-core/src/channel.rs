//! Directional channels
//!
//! A [`Channel`] moves values both ways. [`Channel::sender`] and
//! [`Channel::receiver`] hand out send-only and receive-only views of the
//! same queue, so a direction is carried by the handle's type and can be
//! inspected at runtime. The queue is an unbounded `crossbeam_channel`; its
//! raw `Sender` and `Receiver` handles are inspectable too.

use std::any::Any;
use std::fmt;
use std::time::Duration;

use crossbeam_channel as cb;

pub use crossbeam_channel::{RecvError, RecvTimeoutError, SendError, TryRecvError};

use crate::inspect::Inspect;
use crate::kind::{ChanDir, Kind};

/// Create an unbounded bidirectional channel
pub fn channel<T>() -> Channel<T> {
    let (tx, rx) = cb::unbounded();
    Channel { tx, rx }
}

/// Bidirectional channel handle.
///
/// It holds both ends, so it never observes a disconnect: [`Channel::recv`]
/// blocks until a value arrives.
pub struct Channel<T> {
    tx: cb::Sender<T>,
    rx: cb::Receiver<T>,
}

/// Send-only view of a channel
pub struct Sender<T> {
    tx: cb::Sender<T>,
}

/// Receive-only view of a channel
pub struct Receiver<T> {
    rx: cb::Receiver<T>,
}

impl<T> Channel<T> {
    pub fn send(&self, value: T) {
        // Cannot fail while `self.rx` is alive
        let _ = self.tx.send(value);
    }

    /// Block until a value is available
    pub fn recv(&self) -> Result<T, RecvError> {
        self.rx.recv()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Result<T, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn try_recv(&self) -> Result<T, TryRecvError> {
        self.rx.try_recv()
    }

    /// Number of queued values
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    pub fn sender(&self) -> Sender<T> {
        Sender {
            tx: self.tx.clone(),
        }
    }

    pub fn receiver(&self) -> Receiver<T> {
        Receiver {
            rx: self.rx.clone(),
        }
    }

    /// Give up the bidirectional handle for one view of each direction.
    ///
    /// Unlike views taken with [`Channel::sender`] and [`Channel::receiver`],
    /// the split ends disconnect once every handle on the other side is gone.
    pub fn split(self) -> (Sender<T>, Receiver<T>) {
        (Sender { tx: self.tx }, Receiver { rx: self.rx })
    }
}

impl<T> Sender<T> {
    /// Fails once every receiving handle has been dropped
    pub fn send(&self, value: T) -> Result<(), SendError<T>> {
        self.tx.send(value)
    }

    pub fn len(&self) -> usize {
        self.tx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tx.is_empty()
    }
}

impl<T> Receiver<T> {
    /// Block until a value arrives, or fail once the queue is drained and
    /// every sending handle has been dropped
    pub fn recv(&self) -> Result<T, RecvError> {
        self.rx.recv()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Result<T, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn try_recv(&self) -> Result<T, TryRecvError> {
        self.rx.try_recv()
    }

    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

macro_rules! impl_handle {
    ($($handle:ident { $($field:ident),+ } => $end:ident, $dir:ident),* $(,)?) => {
        $(
            impl<T> Clone for $handle<T> {
                fn clone(&self) -> Self {
                    $handle {
                        $($field: self.$field.clone()),+
                    }
                }
            }

            // Handles compare by identity of the underlying queue
            impl<T> PartialEq for $handle<T> {
                fn eq(&self, other: &Self) -> bool {
                    self.$end.same_channel(&other.$end)
                }
            }

            impl<T> Eq for $handle<T> {}

            impl<T> fmt::Debug for $handle<T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}(len {})", ChanDir::$dir, self.$end.len())
                }
            }

            impl<T: 'static> Inspect for $handle<T> {
                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn kind(&self) -> Kind {
                    Kind::Chan
                }

                fn len(&self) -> Option<usize> {
                    Some(self.$end.len())
                }

                fn chan_dir(&self) -> Option<ChanDir> {
                    Some(ChanDir::$dir)
                }
            }
        )*
    };
}

impl_handle! {
    Channel { tx, rx } => rx, Both,
    Sender { tx } => tx, Send,
    Receiver { rx } => rx, Recv,
}

macro_rules! impl_raw_handle {
    ($($handle:ty => $dir:ident),* $(,)?) => {
        $(
            impl<T: 'static> Inspect for $handle {
                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn kind(&self) -> Kind {
                    Kind::Chan
                }

                fn len(&self) -> Option<usize> {
                    Some(<$handle>::len(self))
                }

                fn chan_dir(&self) -> Option<ChanDir> {
                    Some(ChanDir::$dir)
                }
            }
        )*
    };
}

impl_raw_handle! {
    cb::Sender<T> => Send,
    cb::Receiver<T> => Recv,
}
