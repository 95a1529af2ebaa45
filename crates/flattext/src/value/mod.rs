//! Value representation for loosely-shaped runtime data

mod callable;
mod display;
mod impls;
mod record;
mod serde;
mod symbol;
mod timestamp;

pub use callable::{NativeFn, NativeFnPtr};
pub use record::RecordValue;
pub use symbol::SymbolValue;
pub use timestamp::Timestamp;

use std::sync::Arc;

use rust_decimal::Decimal;

/// Runtime value representation for display normalization.
///
/// Values are organized into three tiers:
/// - Tier 1: Inline primitives (no allocation)
/// - Tier 2: Heap-allocated compound types (Arc-wrapped)
/// - Tier 3: Opaque kinds with no structural representation
#[derive(Clone)]
pub enum Value {
    // ═══════════════════════════════════════════════════════════════════
    // Tier 1: Inline Primitives
    // ═══════════════════════════════════════════════════════════════════
    /// The nullish value (absent / none marker)
    Null,

    /// Boolean: `true` or `false`
    Bool(bool),

    /// 64-bit signed integer (default integer type)
    Int(i64),

    /// 64-bit floating point (default float type)
    Float(f64),

    /// A point in time, normalized to UTC
    Timestamp(Timestamp),

    // ═══════════════════════════════════════════════════════════════════
    // Tier 2: Heap-Allocated Compound Types
    // ═══════════════════════════════════════════════════════════════════
    /// Heap-allocated string
    String(Arc<String>),

    /// Ordered sequence of values
    Array(Arc<Vec<Value>>),

    /// Structured record with ordered, string-keyed fields
    Record(Arc<RecordValue>),

    // ═══════════════════════════════════════════════════════════════════
    // Tier 3: Opaque Kinds (no structural representation)
    // ═══════════════════════════════════════════════════════════════════
    /// Symbolic identifier with an optional description
    Symbol(Arc<SymbolValue>),

    /// Arbitrary-precision decimal number
    Decimal(Decimal),

    /// Callable native function
    Callable(NativeFn),
}
