//! Non-fatal failure reporting for [`Condition::test`](crate::Condition::test)

use std::panic::Location;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use veracity_core::raise;

/// Something that can mark the current test as failed
pub trait Reporter {
    fn fail(&self);

    /// Emit a failure explanation located at `location`
    fn log(&self, location: &'static Location<'static>, message: &str) {
        eprintln!("{}:{}: {}", location.file(), location.line(), message);
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn fail(&self) {
        (**self).fail()
    }

    fn log(&self, location: &'static Location<'static>, message: &str) {
        (**self).log(location, message)
    }
}

/// Collects failures so a test can check many conditions before failing.
///
/// ```rust
/// use veracity::{expect_equal, expect_true, Recorder};
///
/// let recorder = Recorder::new();
/// expect_equal(1, 1).test(&recorder);
/// expect_true(true).test(&recorder);
/// recorder.finish();
/// ```
#[derive(Debug, Default)]
pub struct Recorder {
    failures: AtomicUsize,
    messages: Mutex<Vec<String>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failed(&self) -> bool {
        self.failures() > 0
    }

    /// Number of times [`Reporter::fail`] was called
    pub fn failures(&self) -> usize {
        self.failures.load(Ordering::Acquire)
    }

    /// Logged explanations, each prefixed with `file:line: `
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    /// Raise one failure listing every recorded explanation, if any
    #[track_caller]
    pub fn finish(self) {
        let failures = self.failures.into_inner();
        if failures == 0 {
            return;
        }
        let messages = self.messages.into_inner();
        let mut report = format!("{} check(s) failed", failures);
        for message in &messages {
            report.push_str("\n  ");
            report.push_str(message);
        }
        raise(report)
    }
}

impl Reporter for Recorder {
    fn fail(&self) {
        self.failures.fetch_add(1, Ordering::AcqRel);
    }

    fn log(&self, location: &'static Location<'static>, message: &str) {
        let line = format!("{}:{}: {}", location.file(), location.line(), message);
        eprintln!("{}", line);
        self.messages.lock().push(line);
    }
}
