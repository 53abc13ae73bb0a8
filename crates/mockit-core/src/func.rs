//! Patchable functions
//!
//! A [`FuncRef`] is the target a mock intercepts: a named body with a
//! [`Signature`] and a redirect slot. Calls made through [`FuncRef::call`]
//! reach whatever entry point is installed in the slot, while
//! [`FuncRef::call_original`] always runs the untouched body.

use crate::error::PatchError;
use crate::signature::Signature;
use crate::value::Value;
use parking_lot::RwLock;
use std::fmt;
use std::sync::{Arc, Weak};

/// Entry point a patched function is redirected to
pub type DispatchFn = Arc<dyn Fn(&[Value]) -> Vec<Value> + Send + Sync>;

type Body = dyn Fn(&[Value]) -> Vec<Value> + Send + Sync;

struct Function {
    name: String,
    signature: Signature,
    body: Box<Body>,
    redirect: RwLock<Option<DispatchFn>>,
}

/// Shared handle to a patchable function
///
/// Cloning is cheap; clones refer to the same function and the same redirect
/// slot. Two handles are equal when they refer to the same function.
#[derive(Clone)]
pub struct FuncRef(Arc<Function>);

impl FuncRef {
    /// Create function from its name, signature and body
    #[must_use]
    pub fn new<F>(name: impl Into<String>, signature: Signature, body: F) -> Self
    where
        F: Fn(&[Value]) -> Vec<Value> + Send + Sync + 'static,
    {
        Self(Arc::new(Function {
            name: name.into(),
            signature,
            body: Box::new(body),
            redirect: RwLock::new(None),
        }))
    }

    /// Function name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Function signature
    #[inline]
    #[must_use]
    pub fn signature(&self) -> &Signature {
        &self.0.signature
    }

    /// Call the function, honouring an installed redirect
    ///
    /// # Panics
    /// Panics if `args` does not match the parameter arity.
    pub fn call(&self, args: &[Value]) -> Vec<Value> {
        self.assert_arity(args);
        // Clone the entry out so the slot is not locked while it runs.
        let entry = self.0.redirect.read().clone();
        match entry {
            Some(entry) => entry(args),
            None => (self.0.body)(args),
        }
    }

    /// Call the original body, bypassing any redirect
    ///
    /// # Panics
    /// Panics if `args` does not match the parameter arity.
    pub fn call_original(&self, args: &[Value]) -> Vec<Value> {
        self.assert_arity(args);
        (self.0.body)(args)
    }

    /// Check whether a redirect is installed
    #[inline]
    #[must_use]
    pub fn is_patched(&self) -> bool {
        self.0.redirect.read().is_some()
    }

    pub(crate) fn downgrade(&self) -> WeakFuncRef {
        WeakFuncRef(Arc::downgrade(&self.0))
    }

    pub(crate) fn install_redirect(&self, entry: DispatchFn) -> Result<(), PatchError> {
        let mut slot = self.0.redirect.write();
        if slot.is_some() {
            return Err(PatchError::AlreadyPatched {
                name: self.name().to_string(),
            });
        }
        *slot = Some(entry);
        Ok(())
    }

    /// Clear the slot if it still holds `entry`
    pub(crate) fn clear_redirect(&self, entry: &DispatchFn) -> bool {
        let mut slot = self.0.redirect.write();
        match slot.as_ref() {
            Some(current) if Arc::ptr_eq(current, entry) => {
                *slot = None;
                true
            }
            _ => false,
        }
    }

    fn assert_arity(&self, args: &[Value]) {
        assert_eq!(
            args.len(),
            self.0.signature.arity(),
            "{} called with {} arguments, signature is {}",
            self.0.name,
            args.len(),
            self.0.signature
        );
    }
}

/// Non-owning handle, held by redirect entries so a function's slot never
/// keeps the function itself alive
#[derive(Clone)]
pub(crate) struct WeakFuncRef(Weak<Function>);

impl WeakFuncRef {
    pub(crate) fn upgrade(&self) -> Option<FuncRef> {
        self.0.upgrade().map(FuncRef)
    }
}

impl PartialEq for FuncRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for FuncRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuncRef")
            .field("name", &self.0.name)
            .field("signature", &self.0.signature)
            .field("patched", &self.is_patched())
            .finish()
    }
}
