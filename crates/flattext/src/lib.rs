//! # Flattext
//!
//! Total normalization of dynamic runtime values into display-safe text.
//!
//! Flattext models loosely-shaped runtime data — the kind that arrives at a
//! rendering boundary with no static type guarantee — as a [`Value`] enum,
//! and provides one exported operation over it: [`normalize`], which turns
//! any value into a `String` suitable for direct display. The function is
//! total: it never panics and never returns an error. Inputs that cannot be
//! represented textually come back as the empty string.
//!
//! ## Dispatch
//!
//! [`normalize`] resolves a value by shape, first match wins:
//!
//! - nullish → empty text
//! - string / number / boolean → canonical text form
//! - timestamp → ISO-8601 UTC with millisecond precision
//! - record with a string `text` field → that text verbatim
//! - record with a `richText` array → concatenated span text
//! - any other record or array → JSON serialization, or empty text on failure
//! - opaque kinds (symbols, decimals, callables) → their textual form
//!
//! ## Example
//!
//! ```
//! use flattext::{normalize, RecordValue, Value};
//!
//! let spans = Value::array(vec![
//!     Value::record(RecordValue::new().with_field("text", Value::string("hello, "))),
//!     Value::record(RecordValue::new().with_field("text", Value::string("world"))),
//! ]);
//! let value = Value::record(RecordValue::new().with_field("richText", spans));
//!
//! assert_eq!(normalize(&value), "hello, world");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod normalize;
pub mod value;

// Re-export main types
pub use error::{FlattextError, Result};
pub use normalize::{normalize, RICH_TEXT_FIELD, TEXT_FIELD};
pub use value::{NativeFn, NativeFnPtr, RecordValue, SymbolValue, Timestamp, Value};

/// Flattext version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
