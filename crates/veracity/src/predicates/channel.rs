//! Channel direction checks

use veracity_core::{violation, ChanDir, Inspect, Kind};

use crate::condition::{Check, Condition};

#[track_caller]
fn direction(value: &dyn Inspect) -> ChanDir {
    match value.chan_dir() {
        Some(dir) if value.kind() == Kind::Chan => dir,
        _ => violation(format!(
            "direction checks need a channel, got {} ({})",
            value.type_name(),
            value.kind()
        )),
    }
}

/// True for bidirectional and send-only channels.
///
/// # Panics
///
/// Raises a contract violation when `value` is not a channel.
#[track_caller]
pub fn expect_writable(value: &dyn Inspect) -> Condition {
    let dir = direction(value);
    Condition::new(
        Check::Writable,
        dir.can_send(),
        format!("expect not a writable channel, but got {}", dir),
        format!("expect a writable channel, but got {}", dir),
    )
}

#[track_caller]
pub fn expect_not_writable(value: &dyn Inspect) -> Condition {
    expect_writable(value).revert()
}

/// True for bidirectional and receive-only channels.
///
/// # Panics
///
/// Raises a contract violation when `value` is not a channel.
#[track_caller]
pub fn expect_readable(value: &dyn Inspect) -> Condition {
    let dir = direction(value);
    Condition::new(
        Check::Readable,
        dir.can_recv(),
        format!("expect not a readable channel, but got {}", dir),
        format!("expect a readable channel, but got {}", dir),
    )
}

#[track_caller]
pub fn expect_not_readable(value: &dyn Inspect) -> Condition {
    expect_readable(value).revert()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::catch_unwind;
    use veracity_core::{channel, AssertionFailed};

    #[test]
    fn test_writable() {
        let both = channel::<i32>();
        let send = both.sender();
        let receive = both.receiver();

        assert!(expect_writable(&both).result());
        assert!(expect_writable(&send).result());
        assert!(expect_not_writable(&receive).result());
    }

    #[test]
    fn test_readable() {
        let both = channel::<i32>();
        let send = both.sender();
        let receive = both.receiver();

        assert!(expect_readable(&both).result());
        assert!(expect_readable(&receive).result());
        assert!(expect_not_readable(&send).result());
    }

    #[test]
    fn test_raw_crossbeam_channels() {
        let (tx, rx) = crossbeam_channel::unbounded::<u8>();
        assert!(expect_writable(&tx).result());
        assert!(expect_not_readable(&tx).result());
        assert!(expect_readable(&rx).result());
        assert!(expect_not_writable(&rx).result());
    }

    #[test]
    fn test_message_names_direction() {
        let receive = channel::<i32>().receiver();
        assert_eq!(
            expect_writable(&receive).false_message(),
            "expect a writable channel, but got <-chan"
        );
    }

    #[test]
    fn test_non_channel_violates() {
        let payload = catch_unwind(|| expect_readable(&5)).unwrap_err();
        let failure = payload.downcast_ref::<AssertionFailed>().unwrap();
        assert!(failure.is_contract_violation());

        let payload = catch_unwind(|| expect_not_writable(&"chan")).unwrap_err();
        assert!(payload.downcast_ref::<AssertionFailed>().is_some());
    }
}
