//! Testing utilities for mockit workspace
//!
//! Shared test contexts, fixture functions and tracing setup.

#![allow(missing_docs)]

use mockit_core::{FuncRef, Signature, TestContext, Value, ValueType};
use parking_lot::Mutex;
use std::path::Path;
use std::sync::Arc;

/// Test context that only records failures
///
/// Plays the role of a throwaway test handle: the engine reports into it and
/// the real test asserts on what was reported.
#[derive(Debug, Default)]
pub struct RecordingContext {
    failures: Mutex<Vec<String>>,
}

impl RecordingContext {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().clone()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.lock().len()
    }
}

impl TestContext for RecordingContext {
    fn report_failure(&self, message: &str) {
        self.failures.lock().push(message.to_string());
    }

    fn has_failed(&self) -> bool {
        !self.failures.lock().is_empty()
    }
}

/// Test context that fails the test when dropped with failures
///
/// The test keeps running after a report; all failures are listed together
/// once the context goes out of scope.
#[derive(Debug, Default)]
pub struct StrictContext {
    inner: RecordingContext,
}

impl StrictContext {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failures(&self) -> Vec<String> {
        self.inner.failures()
    }
}

impl TestContext for StrictContext {
    fn report_failure(&self, message: &str) {
        self.inner.report_failure(message);
    }

    fn has_failed(&self) -> bool {
        self.inner.has_failed()
    }
}

impl Drop for StrictContext {
    fn drop(&mut self) {
        let failures = self.inner.failures();
        if !failures.is_empty() && !std::thread::panicking() {
            panic!("test reported {} failure(s):\n{}", failures.len(), failures.join("\n"));
        }
    }
}

/// Signature of `base`: `(string) string`
pub fn base_signature() -> Signature {
    Signature::new(vec![ValueType::String], vec![ValueType::String])
}

/// Last element of a slash-separated path
pub fn base_function() -> FuncRef {
    FuncRef::new("base", base_signature(), |args| {
        let path = args[0].as_str().unwrap_or_default();
        vec![Value::from(base_name(path))]
    })
}

fn base_name(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    Path::new(trimmed)
        .file_name()
        .map_or_else(|| trimmed.to_string(), |name| name.to_string_lossy().into_owned())
}

/// Signature of the callback `walk` takes: `(string) error`
pub fn walk_callback_signature() -> Signature {
    Signature::new(vec![ValueType::String], vec![ValueType::Error])
}

/// Signature of `walk`: `(string, func(string) error) error`
pub fn walk_signature() -> Signature {
    Signature::new(
        vec![ValueType::String, ValueType::func(walk_callback_signature())],
        vec![ValueType::Error],
    )
}

/// Calls the callback once with the root; a nil callback is an error
pub fn walk_function() -> FuncRef {
    FuncRef::new("walk", walk_signature(), |args| match &args[1] {
        Value::Func(callback) => callback.call(&args[..1]),
        _ => vec![Value::error("walk: nil callback")],
    })
}

/// Signature of `sum`: `([]int) (int, error)`
pub fn sum_signature() -> Signature {
    Signature::new(
        vec![ValueType::list(ValueType::Int)],
        vec![ValueType::Int, ValueType::Error],
    )
}

/// Sums a list of ints; a nil list is an error
pub fn sum_function() -> FuncRef {
    FuncRef::new("sum", sum_signature(), |args| match &args[0] {
        Value::List(items) => {
            let total = items
                .iter()
                .map(|item| match item {
                    Value::Int(n) => *n,
                    _ => 0,
                })
                .sum::<i64>();
            vec![Value::Int(total), Value::Nil]
        }
        _ => vec![Value::Int(0), Value::error("sum: nil list")],
    })
}

/// Install a fmt subscriber honouring `RUST_LOG`; repeated calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
