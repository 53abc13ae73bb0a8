//! Test failure reporting
//!
//! The engine never panics on behalf of a test. Every rejected registration,
//! failed construction and missed verification is handed to a
//! [`TestContext`], which decides how the owning test fails.

use std::sync::Arc;

/// Sink for test failures
pub trait TestContext: Send + Sync {
    /// Mark the test failed with `message`; must not abort the caller
    fn report_failure(&self, message: &str);

    /// Check whether any failure was reported
    fn has_failed(&self) -> bool;
}

impl<T: TestContext + ?Sized> TestContext for Arc<T> {
    fn report_failure(&self, message: &str) {
        (**self).report_failure(message);
    }

    fn has_failed(&self) -> bool {
        (**self).has_failed()
    }
}

impl<T: TestContext + ?Sized> TestContext for &T {
    fn report_failure(&self, message: &str) {
        (**self).report_failure(message);
    }

    fn has_failed(&self) -> bool {
        (**self).has_failed()
    }
}
