//! mockit core
//!
//! Call matching, response dispatch and call recording for function mocks.
//!
//! # Overview
//!
//! - [`FuncMock`]: controller a test holds for one intercepted function
//! - [`BehaviorRegistry`]: ordered `(pattern, response)` registrations
//! - [`resolve`]: picks the response for an incoming argument vector
//! - [`CallLog`]: append-only history used by [`FuncMock::verify`]
//! - [`Patcher`]: redirects a [`FuncRef`]'s calls to the mock
//! - [`TestContext`]: where failures are reported
//!
//! # Example
//!
//! ```rust,ignore
//! use mockit_core::{args, values, FuncMock, NIL};
//!
//! let mock = FuncMock::new(ctx.clone(), walk.clone())?;
//! mock.with(args!["arg", NIL]).returns([NIL]);
//!
//! assert_eq!(walk.call(&values!["arg", NIL]), values![NIL]);
//! mock.verify(&*ctx, values!["arg", NIL]);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod context;
pub mod error;
pub mod func;
pub mod log;
pub mod matcher;
pub mod mock;
pub mod patch;
pub mod record;
pub mod registry;
pub mod resolver;
pub mod signature;
pub mod value;

// Re-exports
pub use config::MockConfig;
pub use context::TestContext;
pub use error::{Arity, MockError, PatchError};
pub use func::{DispatchFn, FuncRef};
pub use log::CallLog;
pub use matcher::{Arg, ArgumentMatcher};
pub use mock::{FuncMock, MockId, Staged};
pub use patch::{PatchGuard, Patcher, TrampolinePatcher};
pub use record::{Invocation, Pattern};
pub use registry::{Behavior, BehaviorRegistry, Response};
pub use resolver::{resolve, Resolution};
pub use signature::Signature;
pub use value::{display_values, ConversionError, FromValue, Value, ValueType, NIL};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for writing mocks
    pub use crate::{
        args, values, Arg, ArgumentMatcher, FromValue, FuncMock, FuncRef, MockConfig, Signature,
        TestContext, Value, ValueType, NIL,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
