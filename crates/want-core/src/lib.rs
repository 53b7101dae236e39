//! Want Core
//!
//! Resolves exactly one request parameter through a fixed pipeline:
//! presence check, no-value substitution, coercion, lookup, transform.
//!
//! # Core Concepts
//!
//! - [`Param`]: `Missing` / `NoValue` / `Present(V)` working value
//! - [`ParamSource`], [`Coerce`], [`Lookup`]: capabilities supplied by the host
//! - [`Policy`]: what missing parameters and failed lookups do
//! - [`want`], [`want_strict`], [`want_probe`]: façade entry points
//! - [`Outcome`]: a resolved value or a [`Terminal`] action for the host
//!
//! # Example
//!
//! ```rust
//! use want_core::{want_probe, want_strict, NotFoundPolicy, Terminal};
//! use serde_json::{json, Value};
//!
//! let params = json!({"vm": "web1", "locked": null});
//! let params = params.as_object().unwrap();
//!
//! // `?locked` with no value
//! let locked = want_probe::<Value>("locked")
//!     .default(false)
//!     .no_value(true)
//!     .resolve(params)
//!     .unwrap();
//! assert_eq!(locked.into_value(), Some(json!(true)));
//!
//! // Unknown VM renders the host's 404
//! let vms = |_: &Value| -> Option<Value> { None };
//! let vm = want_strict::<Value>("vm")
//!     .lookup(&vms)
//!     .not_found(NotFoundPolicy::RenderNotFound)
//!     .resolve(params)
//!     .unwrap();
//! assert_eq!(vm.terminal(), Some(Terminal::NotFound));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod capability;
pub mod config;
pub mod engine;
pub mod error;
pub mod param;
pub mod policy;
pub mod want;

// Re-exports
pub use capability::{Coerce, Lookup, ParamSource};
pub use config::WantConfig;
pub use engine::{resolve, Outcome, Request, Terminal, Transform};
pub use error::{CoercionError, ConfigError, FailureKind, ParamError, WantResult};
pub use param::{Param, ParamRef};
pub use policy::{MissingPolicy, NotFoundPolicy, Policy, Preset};
pub use want::{want, want_probe, want_strict, Want};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for resolving parameters
    pub use crate::{
        want, want_probe, want_strict, Coerce, CoercionError, Lookup, MissingPolicy,
        NotFoundPolicy, Outcome, Param, ParamError, ParamRef, ParamSource, Policy, Terminal,
        Want,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
