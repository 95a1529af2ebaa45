//! Serialize implementation for Value
//!
//! Records and arrays serialize structurally (JSON-compatible), with
//! record fields emitted in insertion order. Opaque kinds (symbols,
//! decimals, callables) have no structural representation and fail to
//! serialize; normalization absorbs that failure as empty text.

use serde::ser::{Error, Serialize, SerializeMap, SerializeSeq, Serializer};

use super::Value;

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Timestamp(t) => serializer.serialize_str(&t.to_iso_string()),

            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }

            Value::Record(record) => {
                let mut map = serializer.serialize_map(Some(record.len()))?;
                for (key, value) in record.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }

            Value::Symbol(_) => Err(Error::custom("symbol values have no serialized form")),
            Value::Decimal(_) => Err(Error::custom("decimal values have no serialized form")),
            Value::Callable(func) => Err(Error::custom(format_args!(
                "callable `{}` has no serialized form",
                func.name
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{NativeFn, RecordValue, SymbolValue, Timestamp};
    use super::*;

    #[test]
    fn test_scalars_serialize_as_json() {
        assert_eq!(serde_json::to_string(&Value::Null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Value::Bool(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&Value::Int(42)).unwrap(), "42");
        assert_eq!(serde_json::to_string(&Value::Float(1.5)).unwrap(), "1.5");
        assert_eq!(
            serde_json::to_string(&Value::string("hi")).unwrap(),
            "\"hi\""
        );
    }

    #[test]
    fn test_timestamp_serializes_as_iso_string() {
        let ts = Timestamp::from_timestamp_millis(1_704_067_200_000).unwrap();
        assert_eq!(
            serde_json::to_string(&Value::Timestamp(ts)).unwrap(),
            "\"2024-01-01T00:00:00.000Z\""
        );
    }

    #[test]
    fn test_record_fields_keep_insertion_order() {
        let record = RecordValue::new()
            .with_field("b", Value::Int(2))
            .with_field("a", Value::Int(1));
        assert_eq!(
            serde_json::to_string(&Value::record(record)).unwrap(),
            r#"{"b":2,"a":1}"#
        );
    }

    #[test]
    fn test_opaque_kinds_fail_to_serialize() {
        assert!(serde_json::to_string(&Value::symbol(SymbolValue::anonymous())).is_err());
        assert!(
            serde_json::to_string(&Value::Decimal(rust_decimal::Decimal::new(1, 0))).is_err()
        );
        let func = Value::callable(NativeFn::new("f", 0, |_| Ok(Value::Null)));
        assert!(serde_json::to_string(&func).is_err());
    }

    #[test]
    fn test_nested_opaque_fails_the_whole_record() {
        let record = RecordValue::new()
            .with_field("ok", Value::Int(1))
            .with_field("bad", Value::symbol(SymbolValue::anonymous()));
        assert!(serde_json::to_string(&Value::record(record)).is_err());
    }
}
