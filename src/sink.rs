use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use fastrace::prelude::*;
use google_cloud_trace_v2::model::{AttributeValue, TruncatableString};

/// A single attribute value written by the extractor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Str(Cow<'static, str>),
    I64(i64),
}

impl Value {
    /// Renders the value the way span properties carry it.
    pub fn into_cow(self) -> Cow<'static, str> {
        match self {
            Value::Str(s) => s,
            Value::I64(n) => Cow::Owned(n.to_string()),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(Cow::Owned(value))
    }
}

impl From<&'static str> for Value {
    fn from(value: &'static str) -> Self {
        Value::Str(Cow::Borrowed(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::I64(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::I64(value.into())
    }
}

/// Destination for the attributes of a single operation.
pub trait AttributeSink {
    fn set(&mut self, key: &'static str, value: Value);
}

/// Writes `value` under `key`, or does nothing when it is absent.
pub(crate) fn set_opt<S, V>(sink: &mut S, key: &'static str, value: Option<V>)
where
    S: AttributeSink + ?Sized,
    V: Into<Value>,
{
    if let Some(value) = value {
        sink.set(key, value.into());
    }
}

impl AttributeSink for Span {
    fn set(&mut self, key: &'static str, value: Value) {
        self.add_property(|| (key, value.into_cow()));
    }
}

/// Writes to the thread's current [`LocalSpan`].
#[derive(Clone, Copy, Debug, Default)]
pub struct CurrentLocalSpan;

impl AttributeSink for CurrentLocalSpan {
    fn set(&mut self, key: &'static str, value: Value) {
        LocalSpan::add_property(|| (key, value.into_cow()));
    }
}

impl AttributeSink for Vec<(Cow<'static, str>, Cow<'static, str>)> {
    fn set(&mut self, key: &'static str, value: Value) {
        self.push((Cow::Borrowed(key), value.into_cow()));
    }
}

impl AttributeSink for HashMap<String, AttributeValue> {
    fn set(&mut self, key: &'static str, value: Value) {
        let value = match value {
            Value::Str(s) => AttributeValue::new()
                .set_string_value(TruncatableString::new().set_value(s.into_owned())),
            Value::I64(n) => AttributeValue::new().set_int_value(n),
        };
        self.insert(key.to_string(), value);
    }
}

impl AttributeSink for BTreeMap<&'static str, Value> {
    fn set(&mut self, key: &'static str, value: Value) {
        self.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_value_is_not_written() {
        let mut sink: BTreeMap<&'static str, Value> = BTreeMap::new();
        set_opt::<_, String>(&mut sink, "net.peer.name", None);
        assert!(sink.is_empty());

        set_opt(&mut sink, "net.peer.name", Some("example.com"));
        assert_eq!(sink.get("net.peer.name"), Some(&Value::from("example.com")));
    }

    #[test]
    fn property_list_renders_integers() {
        let mut sink: Vec<(Cow<'static, str>, Cow<'static, str>)> = Vec::new();
        sink.set("net.peer.port", Value::I64(8080));
        sink.set("net.peer.port", Value::I64(8081));
        assert_eq!(
            sink,
            vec![
                (Cow::Borrowed("net.peer.port"), Cow::Borrowed("8080")),
                (Cow::Borrowed("net.peer.port"), Cow::Borrowed("8081")),
            ]
        );
    }

    #[test]
    fn cloud_trace_map_keeps_strings_and_ints_apart() {
        let mut sink: HashMap<String, AttributeValue> = HashMap::new();
        sink.set("net.peer.name", Value::from("api.example.com"));
        sink.set("net.peer.port", Value::I64(443));

        let name = sink
            .get("net.peer.name")
            .and_then(|v| v.string_value())
            .map(|s| s.value.clone());
        assert_eq!(name.as_deref(), Some("api.example.com"));
        assert!(sink["net.peer.port"].string_value().is_none());
    }
}
