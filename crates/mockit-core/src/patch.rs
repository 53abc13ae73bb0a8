//! Call redirection
//!
//! The engine never redirects calls itself; it asks a [`Patcher`] to route a
//! target's calls to the mock's dispatch entry point and keeps the returned
//! [`PatchGuard`] until the mock is disabled or dropped.

use crate::error::PatchError;
use crate::func::{DispatchFn, FuncRef};

/// Redirects a target's calls to a dispatch entry point
#[cfg_attr(test, mockall::automock)]
pub trait Patcher: Send + Sync {
    /// Start routing calls of `target` to `entry`
    ///
    /// # Errors
    /// Returns [`PatchError`] when the target cannot be redirected.
    fn install(&self, target: &FuncRef, entry: DispatchFn)
        -> Result<Box<dyn PatchGuard>, PatchError>;
}

/// Live redirection, undone by [`PatchGuard::restore`]
pub trait PatchGuard: Send {
    /// Route calls back to the original implementation
    fn restore(self: Box<Self>);
}

/// Default patcher: writes the entry point into the function's redirect slot
#[derive(Debug, Clone, Copy, Default)]
pub struct TrampolinePatcher;

impl TrampolinePatcher {
    /// Create patcher
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Patcher for TrampolinePatcher {
    fn install(
        &self,
        target: &FuncRef,
        entry: DispatchFn,
    ) -> Result<Box<dyn PatchGuard>, PatchError> {
        target.install_redirect(DispatchFn::clone(&entry))?;
        tracing::trace!(function = target.name(), "redirect installed");
        Ok(Box::new(TrampolineGuard {
            target: target.clone(),
            entry: Some(entry),
        }))
    }
}

/// Guard for [`TrampolinePatcher`]; restores on drop as well
struct TrampolineGuard {
    target: FuncRef,
    entry: Option<DispatchFn>,
}

impl TrampolineGuard {
    fn release(&mut self) {
        if let Some(entry) = self.entry.take() {
            if self.target.clear_redirect(&entry) {
                tracing::trace!(function = self.target.name(), "redirect restored");
            }
        }
    }
}

impl PatchGuard for TrampolineGuard {
    fn restore(mut self: Box<Self>) {
        self.release();
    }
}

impl Drop for TrampolineGuard {
    fn drop(&mut self) {
        self.release();
    }
}
