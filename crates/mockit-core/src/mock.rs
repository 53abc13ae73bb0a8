//! Function mock controller
//!
//! [`FuncMock`] is the object a test holds. It owns the behavior registry,
//! the call log, the precomputed default outputs and the enabled flag, all
//! behind one lock, and drives the [`Patcher`] that routes the target's calls
//! to [`FuncMock::dispatch`].
//!
//! # Example
//!
//! ```rust
//! use mockit_core::{values, FuncMock, FuncRef, Signature, TestContext, Value, ValueType};
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//!
//! #[derive(Default)]
//! struct Flag(AtomicBool);
//!
//! impl TestContext for Flag {
//!     fn report_failure(&self, _message: &str) {
//!         self.0.store(true, Ordering::SeqCst);
//!     }
//!     fn has_failed(&self) -> bool {
//!         self.0.load(Ordering::SeqCst)
//!     }
//! }
//!
//! let greet = FuncRef::new(
//!     "greet",
//!     Signature::new(vec![ValueType::String], vec![ValueType::String]),
//!     |args| vec![Value::from(format!("hello {}", args[0].as_str().unwrap_or_default()))],
//! );
//! let ctx = Arc::new(Flag::default());
//! let mock = FuncMock::new(ctx.clone(), greet.clone()).unwrap();
//! mock.with(["bob"]).returns(["hi bob"]);
//!
//! assert_eq!(greet.call(&values!["bob"]), values!["hi bob"]);
//! assert_eq!(greet.call(&values!["amy"]), values![""]);
//! assert!(mock.verify(&*ctx, ["amy"]));
//! assert!(!ctx.has_failed());
//! ```

use crate::config::MockConfig;
use crate::context::TestContext;
use crate::error::MockError;
use crate::func::{DispatchFn, FuncRef};
use crate::log::CallLog;
use crate::matcher::Arg;
use crate::patch::{PatchGuard, Patcher, TrampolinePatcher};
use crate::record::{Invocation, Pattern};
use crate::registry::{BehaviorRegistry, Response};
use crate::resolver::{resolve, Resolution};
use crate::signature::Signature;
use crate::value::{display_values, Value};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Unique mock identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MockId(pub Uuid);

impl MockId {
    /// Generate new random ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Controller for one intercepted function
pub struct FuncMock {
    shared: Arc<Shared>,
}

struct Shared {
    id: MockId,
    label: String,
    target: FuncRef,
    defaults: Vec<Value>,
    ctx: Arc<dyn TestContext>,
    config: MockConfig,
    patcher: Arc<dyn Patcher>,
    state: Mutex<State>,
}

/// Everything calls and registrations mutate, guarded by one lock
struct State {
    registry: BehaviorRegistry,
    log: CallLog,
    enabled: bool,
    guard: Option<Box<dyn PatchGuard>>,
}

impl FuncMock {
    /// Mock `target` with the default configuration and patcher
    ///
    /// # Errors
    /// Returns [`MockError::NotCallable`] when `target` is not a function and
    /// [`MockError::Patch`] when the redirect cannot be installed. Both are
    /// reported to `ctx` first.
    pub fn new<C>(ctx: C, target: impl Into<Value>) -> Result<Self, MockError>
    where
        C: TestContext + 'static,
    {
        Self::with_config(ctx, target, MockConfig::default())
    }

    /// Mock `target` with `config` and the default patcher
    ///
    /// # Errors
    /// See [`FuncMock::new`].
    pub fn with_config<C>(
        ctx: C,
        target: impl Into<Value>,
        config: MockConfig,
    ) -> Result<Self, MockError>
    where
        C: TestContext + 'static,
    {
        Self::with_patcher(ctx, target, config, Arc::new(TrampolinePatcher::new()))
    }

    /// Mock `target`, redirecting calls through `patcher`
    ///
    /// # Errors
    /// See [`FuncMock::new`].
    pub fn with_patcher<C>(
        ctx: C,
        target: impl Into<Value>,
        config: MockConfig,
        patcher: Arc<dyn Patcher>,
    ) -> Result<Self, MockError>
    where
        C: TestContext + 'static,
    {
        let func = match target.into() {
            Value::Func(func) => func,
            other => {
                let err = MockError::NotCallable {
                    kind: other.kind(),
                    rendered: other.to_string(),
                };
                tracing::warn!(error = %err, "mock construction failed");
                ctx.report_failure(&err.to_string());
                return Err(err);
            }
        };

        let label = config
            .label
            .clone()
            .unwrap_or_else(|| func.name().to_string());
        let defaults = func.signature().zero_results();
        let shared = Arc::new(Shared {
            id: MockId::new(),
            label,
            target: func,
            defaults,
            ctx: Arc::new(ctx),
            config,
            patcher,
            state: Mutex::new(State {
                registry: BehaviorRegistry::new(),
                log: CallLog::new(),
                enabled: false,
                guard: None,
            }),
        });

        shared.activate()?;
        tracing::info!(
            mock = %shared.id,
            label = %shared.label,
            signature = %shared.target.signature(),
            "mock installed"
        );
        Ok(Self { shared })
    }

    /// Stage a registration for calls with `args`
    ///
    /// Positions convert into [`Arg`]s: plain values become literals,
    /// matchers stay predicates. A wrong argument count is reported to the
    /// test context and turns the returned [`Staged`] into a no-op.
    pub fn with<I>(&self, args: I) -> Staged<'_>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        let args: Vec<Arg> = args.into_iter().map(Into::into).collect();
        let pattern = match self.signature().check_arguments(args.len()) {
            Ok(()) => Some(Pattern::new(args)),
            Err(err) => {
                self.shared.report(&err);
                None
            }
        };
        Staged {
            mock: self,
            pattern,
        }
    }

    /// Dispatch entry point for one call of the target
    ///
    /// While enabled the call is logged and resolved against the registry;
    /// while disabled it goes straight to the original implementation.
    pub fn dispatch(&self, args: &[Value]) -> Vec<Value> {
        self.shared.dispatch(args)
    }

    /// Re-install the redirect after [`FuncMock::disable`]
    ///
    /// No-op while enabled. An install failure is reported to the test
    /// context and leaves the mock disabled.
    pub fn enable(&self) {
        if self.shared.activate().is_ok() {
            tracing::debug!(mock = %self.shared.id, label = %self.shared.label, "mock enabled");
        }
    }

    /// Route calls back to the original implementation
    ///
    /// Calls made while disabled are not logged. The registry and the calls
    /// logged so far are kept.
    pub fn disable(&self) {
        {
            let mut state = self.shared.state.lock();
            if !state.enabled {
                return;
            }
            state.enabled = false;
            // Restore before unlocking; activate installs under the same lock.
            if let Some(guard) = state.guard.take() {
                guard.restore();
            }
        }
        tracing::debug!(mock = %self.shared.id, label = %self.shared.label, "mock disabled");
    }

    /// Assert that the target was called with exactly `args`
    ///
    /// Comparison is literal and nil-safe; matchers play no part. A miss is
    /// reported to `ctx`. Returns whether a matching call was found.
    pub fn verify<C, I>(&self, ctx: &C, args: I) -> bool
    where
        C: TestContext + ?Sized,
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let args: Vec<Value> = args.into_iter().map(Into::into).collect();
        if let Err(err) = self.signature().check_arguments(args.len()) {
            tracing::warn!(mock = %self.shared.id, error = %err, "verification rejected");
            ctx.report_failure(&err.to_string());
            return false;
        }

        let miss = {
            let state = self.shared.state.lock();
            if state.log.contains(&args) {
                None
            } else {
                Some(MockError::VerificationMiss {
                    mock: self.shared.label.clone(),
                    args: display_values(&args),
                    observed: state.log.summary(self.shared.config.max_listed_calls),
                })
            }
        };

        match miss {
            None => true,
            Some(err) => {
                tracing::warn!(mock = %self.shared.id, error = %err, "verification failed");
                ctx.report_failure(&err.to_string());
                false
            }
        }
    }

    /// Mock ID
    #[inline]
    #[must_use]
    pub fn id(&self) -> MockId {
        self.shared.id
    }

    /// Label used in logs and failure messages
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.shared.label
    }

    /// Intercepted function
    #[inline]
    #[must_use]
    pub fn target(&self) -> &FuncRef {
        &self.shared.target
    }

    /// Signature captured at construction
    #[inline]
    #[must_use]
    pub fn signature(&self) -> &Signature {
        self.shared.target.signature()
    }

    /// Zero values returned when nothing matches
    #[inline]
    #[must_use]
    pub fn default_outputs(&self) -> &[Value] {
        &self.shared.defaults
    }

    /// Check whether calls are currently intercepted
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.shared.state.lock().enabled
    }

    /// Snapshot of the logged calls, in order
    #[must_use]
    pub fn calls(&self) -> Vec<Invocation> {
        self.shared.state.lock().log.entries().to_vec()
    }

    /// Number of logged calls
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.shared.state.lock().log.len()
    }

    /// How many logged calls had exactly `args`
    #[must_use]
    pub fn times_called<I>(&self, args: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let args: Vec<Value> = args.into_iter().map(Into::into).collect();
        self.shared.state.lock().log.count(&args)
    }

    /// Number of committed registrations
    #[must_use]
    pub fn registered(&self) -> usize {
        self.shared.state.lock().registry.len()
    }

    /// Response of the registration at `index`
    #[must_use]
    pub fn response(&self, index: usize) -> Option<Response> {
        self.shared
            .state
            .lock()
            .registry
            .get(index)
            .map(|behavior| behavior.response.clone())
    }
}

impl Drop for FuncMock {
    fn drop(&mut self) {
        let mut state = self.shared.state.lock();
        state.enabled = false;
        if let Some(guard) = state.guard.take() {
            guard.restore();
        }
    }
}

impl fmt::Debug for FuncMock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("FuncMock")
            .field("id", &self.shared.id)
            .field("label", &self.shared.label)
            .field("signature", self.shared.target.signature())
            .field("registered", &state.registry.len())
            .field("calls", &state.log.len())
            .field("enabled", &state.enabled)
            .finish()
    }
}

impl Shared {
    /// Install the redirect and mark the mock enabled
    fn activate(self: &Arc<Self>) -> Result<(), MockError> {
        let mut state = self.state.lock();
        if state.enabled {
            return Ok(());
        }
        match self.patcher.install(&self.target, self.entry_point()) {
            Ok(guard) => {
                state.guard = Some(guard);
                state.enabled = true;
                Ok(())
            }
            Err(err) => {
                drop(state);
                let err = MockError::from(err);
                self.report(&err);
                Err(err)
            }
        }
    }

    /// Entry point handed to the patcher
    ///
    /// Holds the mock weakly: the redirect lives in the target, and the
    /// target is owned by the mock.
    fn entry_point(self: &Arc<Self>) -> DispatchFn {
        let shared = Arc::downgrade(self);
        let target = self.target.downgrade();
        Arc::new(move |args: &[Value]| match shared.upgrade() {
            Some(shared) => shared.dispatch(args),
            None => target
                .upgrade()
                .map(|func| func.call_original(args))
                .unwrap_or_default(),
        })
    }

    fn dispatch(&self, args: &[Value]) -> Vec<Value> {
        let resolution = {
            let mut state = self.state.lock();
            if !state.enabled {
                drop(state);
                return self.target.call_original(args);
            }
            let seq = state.log.append(args);
            if self.config.log_arguments {
                tracing::trace!(
                    mock = %self.id,
                    label = %self.label,
                    seq,
                    args = %display_values(args),
                    "call recorded"
                );
            } else {
                tracing::trace!(mock = %self.id, label = %self.label, seq, "call recorded");
            }
            resolve(&state.registry, &self.defaults, args)
        };

        // The real implementation runs unlocked: it may block or re-enter.
        match resolution {
            Resolution::Values(values) => values,
            Resolution::CallReal => self.target.call_original(args),
        }
    }

    fn commit(&self, pattern: Pattern, response: Response) -> usize {
        let kind = response.name();
        let rendered = pattern.to_string();
        let index = self.state.lock().registry.push(pattern, response);
        tracing::debug!(
            mock = %self.id,
            label = %self.label,
            index,
            pattern = %rendered,
            response = kind,
            "behavior registered"
        );
        index
    }

    fn report(&self, err: &MockError) {
        tracing::warn!(mock = %self.id, label = %self.label, error = %err, "mock failure");
        self.ctx.report_failure(&err.to_string());
    }
}

/// Registration staged by [`FuncMock::with`], awaiting its response
///
/// Each finalizer returns the index of the committed registration, or `None`
/// when the pattern or the response was rejected.
#[must_use = "a staged registration is discarded unless it is finalized"]
pub struct Staged<'a> {
    mock: &'a FuncMock,
    pattern: Option<Pattern>,
}

impl Staged<'_> {
    /// Return `values` for matching calls
    ///
    /// The count and types are checked against the result signature; a
    /// violation is reported and nothing is registered.
    pub fn returns<I>(self, values: I) -> Option<usize>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        let pattern = self.pattern?;
        let shared = &self.mock.shared;
        if let Err(err) = shared.target.signature().check_results(&values) {
            shared.report(&err);
            return None;
        }
        Some(shared.commit(pattern, Response::MockedValues(values)))
    }

    /// Run the original implementation for matching calls
    pub fn call_real_method(self) -> Option<usize> {
        let pattern = self.pattern?;
        Some(self.mock.shared.commit(pattern, Response::DelegateToReal))
    }

    /// Return the zero values for matching calls
    pub fn return_defaults(self) -> Option<usize> {
        let pattern = self.pattern?;
        Some(self.mock.shared.commit(pattern, Response::ReturnDefaults))
    }

    /// Staged pattern; `None` when the argument count was rejected
    #[inline]
    #[must_use]
    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }
}

impl fmt::Debug for Staged<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Staged")
            .field("mock", &self.mock.shared.id)
            .field("pattern", &self.pattern.as_ref().map(ToString::to_string))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatchError;
    use crate::patch::MockPatcher;
    use crate::value::{ValueType, NIL};
    use crate::values;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct Failures(parking_lot::Mutex<Vec<String>>);

    impl Failures {
        fn messages(&self) -> Vec<String> {
            self.0.lock().clone()
        }
    }

    impl TestContext for Failures {
        fn report_failure(&self, message: &str) {
            self.0.lock().push(message.to_string());
        }

        fn has_failed(&self) -> bool {
            !self.0.lock().is_empty()
        }
    }

    struct NoopGuard(Arc<AtomicUsize>);

    impl PatchGuard for NoopGuard {
        fn restore(self: Box<Self>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn base() -> FuncRef {
        FuncRef::new(
            "base",
            Signature::new(vec![ValueType::String], vec![ValueType::String]),
            |args| {
                let path = args[0].as_str().unwrap_or_default();
                vec![Value::from(path.rsplit('/').next().unwrap_or_default())]
            },
        )
    }

    /// Mock whose patcher never redirects anything; tests drive `dispatch`.
    fn detached(ctx: Arc<Failures>) -> (FuncMock, Arc<AtomicUsize>) {
        let restored = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&restored);
        let mut patcher = MockPatcher::new();
        patcher
            .expect_install()
            .returning(move |_, _| {
                Ok(Box::new(NoopGuard(Arc::clone(&counter))) as Box<dyn PatchGuard>)
            });
        let mock = FuncMock::with_patcher(ctx, base(), MockConfig::default(), Arc::new(patcher))
            .unwrap();
        (mock, restored)
    }

    #[test]
    fn construction_computes_defaults() {
        let ctx = Arc::new(Failures::default());
        let (mock, _) = detached(Arc::clone(&ctx));

        assert_eq!(mock.default_outputs(), &values![""][..]);
        assert_eq!(mock.label(), "base");
        assert_eq!(mock.registered(), 0);
        assert_eq!(mock.call_count(), 0);
        assert!(mock.is_enabled());
        assert!(!ctx.has_failed());
    }

    #[test]
    fn construction_rejects_non_function() {
        let ctx = Arc::new(Failures::default());
        let err = FuncMock::new(Arc::clone(&ctx), "non-function-type").unwrap_err();

        assert!(matches!(err, MockError::NotCallable { kind: "string", .. }));
        assert!(ctx.has_failed());
    }

    #[test]
    fn construction_fails_when_patch_fails() {
        let ctx = Arc::new(Failures::default());
        let mut patcher = MockPatcher::new();
        patcher.expect_install().returning(|target, _| {
            Err(PatchError::Unsupported {
                name: target.name().to_string(),
                reason: "read-only".to_string(),
            })
        });

        let err = FuncMock::with_patcher(
            Arc::clone(&ctx),
            base(),
            MockConfig::default(),
            Arc::new(patcher),
        )
        .unwrap_err();

        assert!(err.is_fatal());
        assert_eq!(ctx.messages(), vec!["patch failed: cannot patch base: read-only"]);
    }

    #[test]
    fn with_rejects_wrong_arity_and_discards_pattern() {
        let ctx = Arc::new(Failures::default());
        let (mock, _) = detached(Arc::clone(&ctx));

        let staged = mock.with(["some-in", "some-additional-in"]);
        assert!(staged.pattern().is_none());
        assert_eq!(staged.returns(["out"]), None);

        assert_eq!(mock.registered(), 0);
        assert_eq!(
            ctx.messages(),
            vec!["wrong number of arguments: expected 1, got 2"]
        );
    }

    #[test]
    fn with_stages_literals() {
        let ctx = Arc::new(Failures::default());
        let (mock, _) = detached(Arc::clone(&ctx));

        let staged = mock.with(["some-in"]);
        let pattern = staged.pattern().unwrap();
        assert_eq!(pattern.len(), 1);
        assert_eq!(pattern.args()[0].literal(), Some(&Value::from("some-in")));
        assert_eq!(mock.registered(), 0);
        assert!(!ctx.has_failed());
    }

    #[test]
    fn returns_validates_count_and_types() {
        let cases: Vec<(&str, Vec<Value>, bool)> = vec![
            ("first mock", values!["out-1"], false),
            ("wrong return type", values![100], true),
            ("not enough return values", values![], true),
            ("too many return values", values!["out-0", "out-1"], true),
        ];

        for (name, values, should_fail) in cases {
            let ctx = Arc::new(Failures::default());
            let (mock, _) = detached(Arc::clone(&ctx));

            let committed = mock.with(["some-arg"]).returns(values.clone());

            assert_eq!(ctx.has_failed(), should_fail, "{name}");
            if should_fail {
                assert_eq!(committed, None, "{name}");
                assert_eq!(mock.registered(), 0, "{name}");
            } else {
                assert_eq!(committed, Some(0), "{name}");
                assert_eq!(mock.response(0), Some(Response::MockedValues(values)), "{name}");
            }
            assert_eq!(mock.call_count(), 0, "{name}");
        }
    }

    #[test]
    fn rejected_return_keeps_earlier_behavior() {
        let ctx = Arc::new(Failures::default());
        let (mock, _) = detached(Arc::clone(&ctx));

        mock.with(["some-arg"]).returns(["out-1"]);
        assert_eq!(mock.with(["some-arg"]).returns([100]), None);

        assert_eq!(mock.registered(), 1);
        assert_eq!(mock.dispatch(&values!["some-arg"]), values!["out-1"]);
    }

    #[test]
    fn call_real_method_and_return_defaults_append() {
        let ctx = Arc::new(Failures::default());
        let (mock, _) = detached(Arc::clone(&ctx));

        assert_eq!(mock.with(["a"]).call_real_method(), Some(0));
        assert_eq!(mock.with(["b"]).return_defaults(), Some(1));

        assert_eq!(mock.response(0), Some(Response::DelegateToReal));
        assert_eq!(mock.response(1), Some(Response::ReturnDefaults));
        assert_eq!(mock.call_count(), 0);
        assert!(!ctx.has_failed());
    }

    #[test]
    fn dispatch_resolves_and_logs_inputs() {
        let ctx = Arc::new(Failures::default());
        let (mock, _) = detached(Arc::clone(&ctx));
        mock.with(["some-arg"]).returns(["mocked-out-value"]);
        mock.with(["dir/real.txt"]).call_real_method();

        assert_eq!(mock.dispatch(&values!["some-arg"]), values!["mocked-out-value"]);
        assert_eq!(mock.dispatch(&values!["dir/real.txt"]), values!["real.txt"]);
        assert_eq!(mock.dispatch(&values!["unknown"]), values![""]);

        let calls: Vec<Vec<Value>> = mock.calls().iter().map(|c| c.args().to_vec()).collect();
        assert_eq!(
            calls,
            vec![values!["some-arg"], values!["dir/real.txt"], values!["unknown"]]
        );
        assert!(!ctx.has_failed());
    }

    #[test]
    fn disable_restores_guard_and_skips_logging() {
        let ctx = Arc::new(Failures::default());
        let (mock, restored) = detached(Arc::clone(&ctx));
        mock.with(["a/b"]).returns(["mocked"]);

        mock.disable();
        mock.disable();
        assert!(!mock.is_enabled());
        assert_eq!(restored.load(Ordering::SeqCst), 1);
        assert_eq!(mock.dispatch(&values!["a/b"]), values!["b"]);
        assert_eq!(mock.call_count(), 0);

        mock.enable();
        assert!(mock.is_enabled());
        assert_eq!(mock.dispatch(&values!["a/b"]), values!["mocked"]);
        assert_eq!(mock.call_count(), 1);
    }

    #[test]
    fn drop_restores_guard() {
        let ctx = Arc::new(Failures::default());
        let (mock, restored) = detached(ctx);
        drop(mock);
        assert_eq!(restored.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn verify_reports_missing_call() {
        let ctx = Arc::new(Failures::default());
        let (mock, _) = detached(Arc::clone(&ctx));
        mock.dispatch(&values!["some-arg"]);

        let verifier = Failures::default();
        assert!(mock.verify(&verifier, ["some-arg"]));
        assert!(!verifier.has_failed());

        assert!(!mock.verify(&verifier, ["some-other-arg"]));
        assert_eq!(
            verifier.messages(),
            vec![r#"base was never called with ("some-other-arg"); observed calls: ("some-arg")"#]
        );
    }

    #[test]
    fn verify_without_calls() {
        let ctx = Arc::new(Failures::default());
        let (mock, _) = detached(Arc::clone(&ctx));

        let verifier = Failures::default();
        assert!(!mock.verify(&verifier, ["some-arg"]));
        assert_eq!(
            verifier.messages(),
            vec![r#"base was never called with ("some-arg"), no calls were recorded"#]
        );
    }

    #[test]
    fn verify_rejects_wrong_arity() {
        let ctx = Arc::new(Failures::default());
        let (mock, _) = detached(Arc::clone(&ctx));
        mock.dispatch(&values!["x"]);

        let verifier = Failures::default();
        assert!(!mock.verify(&verifier, [NIL, NIL]));
        assert_eq!(
            verifier.messages(),
            vec!["wrong number of arguments: expected 1, got 2"]
        );
    }

    #[test]
    fn mock_id_serializes_as_uuid() {
        let id = MockId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        let back: MockId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn times_called_counts_identical_calls() {
        let ctx = Arc::new(Failures::default());
        let (mock, _) = detached(ctx);
        mock.dispatch(&values!["x"]);
        mock.dispatch(&values!["x"]);
        mock.dispatch(&values!["y"]);

        assert_eq!(mock.times_called(["x"]), 2);
        assert_eq!(mock.times_called(["y"]), 1);
        assert_eq!(mock.times_called(["z"]), 0);
    }

    #[test]
    fn label_from_config() {
        let ctx = Arc::new(Failures::default());
        let mock = FuncMock::with_config(
            Arc::clone(&ctx),
            base(),
            MockConfig::new().with_label("path.Base").with_max_listed_calls(0),
        )
        .unwrap();
        mock.dispatch(&values!["x"]);

        assert!(!mock.verify(&*ctx, ["y"]));
        assert_eq!(ctx.messages(), vec![r#"path.Base was never called with ("y")"#]);
    }
}
