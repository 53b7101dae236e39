//! Want Adapters
//!
//! Ready-made capabilities for `want-core` over `serde_json::Value`.
//!
//! # Components
//!
//! - [`QueryParams`]: parameter source parsed from a raw query string
//! - [`json`]: integer, float, boolean, string and membership coercers
//! - [`CoerceExt`]: `or_undefined` and `then` on any coercer
//! - [`Records`]: lookup over a list of JSON records
//! - [`CapabilityRegistry`]: coercers and getters addressed by name
//!
//! # Example
//!
//! ```rust
//! use want_adapters::{json, QueryParams};
//! use want_core::want;
//! use serde_json::{json, Value};
//!
//! let query = QueryParams::parse("?count=3&type=savestate");
//! let actions = json::one_of(["shutdown", "savestate", "poweroff"]);
//! let integer = json::integer();
//!
//! let action = want::<Value>("type").coerce(&actions).resolve(&query).unwrap();
//! assert_eq!(action.into_value(), Some(json!("savestate")));
//!
//! let count = want::<Value>("count").coerce(&integer).resolve(&query).unwrap();
//! assert_eq!(count.into_value(), Some(json!(3)));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod combinators;
pub mod json;
mod lookup;
mod query;
mod registry;

// Re-exports
pub use combinators::{CoerceExt, Then, WithUndefined};
pub use json::{Boolean, Float, Integer, OneOf, Text};
pub use lookup::Records;
pub use query::QueryParams;
pub use registry::CapabilityRegistry;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for the JSON adapters
    pub use crate::{json, CapabilityRegistry, CoerceExt, QueryParams, Records};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
