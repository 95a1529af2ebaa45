//! Comprehensive tests for Value type

use pretty_assertions::assert_eq;

use flattext::*;

#[test]
fn test_primitive_values() {
    // Null
    assert_eq!(Value::Null, Value::Null);

    // Bool
    assert_eq!(Value::Bool(true), Value::Bool(true));
    assert_ne!(Value::Bool(true), Value::Bool(false));

    // Integers
    assert_eq!(Value::Int(42), Value::Int(42));
    assert_ne!(Value::Int(42), Value::Int(43));

    // Int and Float are distinct kinds
    assert_ne!(Value::Int(42), Value::Float(42.0));

    // Floats
    assert_eq!(Value::Float(3.5), Value::Float(3.5));
}

#[test]
fn test_string_values() {
    let s1 = Value::string("hello");
    let s2 = Value::string("hello");
    let s3 = Value::string("world");

    assert_eq!(s1, s2);
    assert_ne!(s1, s3);

    assert_eq!(s1.as_str(), Some("hello"));
}

#[test]
fn test_array_values() {
    let v1 = Value::array(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    let v2 = Value::array(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    let v3 = Value::array(vec![Value::Int(1), Value::Int(2)]);

    assert_eq!(v1, v2);
    assert_ne!(v1, v3);
}

#[test]
fn test_record_values() {
    let r1 = RecordValue::new()
        .with_field("x", Value::Int(10))
        .with_field("y", Value::Int(20));

    let r2 = RecordValue::new()
        .with_field("x", Value::Int(10))
        .with_field("y", Value::Int(20));

    assert_eq!(Value::record(r1.clone()), Value::record(r2));

    assert_eq!(r1.get("x"), Some(&Value::Int(10)));
    assert_eq!(r1.get("z"), None);
}

#[test]
fn test_timestamp_values() {
    let t1 = Timestamp::from_timestamp_millis(1_704_067_200_000).unwrap();
    let t2 = Timestamp::parse("2024-01-01T00:00:00.000Z").unwrap();

    assert_eq!(Value::Timestamp(t1), Value::Timestamp(t2));
    assert_eq!(Value::Timestamp(t1).as_timestamp(), Some(t1));
    assert_eq!(Value::Int(1).as_timestamp(), None);
}

#[test]
fn test_callable_values() {
    let f1 = Value::callable(NativeFn::new("id", 1, |args| {
        args.first().cloned().ok_or_else(|| "missing argument".to_string())
    }));
    let f2 = Value::callable(NativeFn::new("id", 1, |_| Ok(Value::Null)));
    let f3 = Value::callable(NativeFn::new("other", 1, |_| Ok(Value::Null)));

    // Callables compare by name (identity)
    assert_eq!(f1, f2);
    assert_ne!(f1, f3);
    assert!(f1.is_opaque());
}

#[test]
fn test_display_formatting() {
    assert_eq!(Value::string("hi").to_string(), "hi");
    assert_eq!(Value::Int(42).to_string(), "42");
    assert_eq!(Value::Null.to_string(), "null");

    let record = RecordValue::new()
        .with_field("a", Value::Int(1))
        .with_field("s", Value::string("x"));
    assert_eq!(Value::record(record).to_string(), r#"{a: 1, s: "x"}"#);

    let arr = Value::array(vec![Value::Int(1), Value::Bool(false)]);
    assert_eq!(arr.to_string(), "[1, false]");
}

#[test]
fn test_debug_quotes_strings() {
    assert_eq!(format!("{:?}", Value::string("hi")), "\"hi\"");
    assert_eq!(format!("{:?}", Value::Null), "null");
}

#[test]
fn test_deep_clone_shares_structure() {
    let record = Value::record(
        RecordValue::new().with_field("items", Value::array(vec![Value::Int(1)])),
    );
    let clone = record.clone();
    assert_eq!(record, clone);
}
