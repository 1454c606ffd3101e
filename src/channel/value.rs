use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

pub type EncodableMap = BTreeMap<String, EncodableValue>;

/// Dynamically typed value exchanged over a method channel.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(untagged)]
pub enum EncodableValue {
    #[default]
    Null,
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Double(f64),
    String(String),
    List(Vec<EncodableValue>),
    Map(EncodableMap),
}

impl EncodableValue {
    pub fn as_map(&self) -> Option<&EncodableMap> {
        match self {
            EncodableValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<bool> for EncodableValue {
    fn from(value: bool) -> Self {
        EncodableValue::Bool(value)
    }
}

impl From<&str> for EncodableValue {
    fn from(value: &str) -> Self {
        EncodableValue::String(value.to_owned())
    }
}

pub fn get_string<'a>(map: &'a EncodableMap, key: &str) -> Option<&'a str> {
    match map.get(key)? {
        EncodableValue::String(s) => Some(s.as_str()),
        _ => None,
    }
}

/// Reads any numeric value as an integer, doubles are truncated toward zero
pub fn get_int(map: &EncodableMap, key: &str) -> Option<i64> {
    match map.get(key)? {
        EncodableValue::Int32(v) => Some(i64::from(*v)),
        EncodableValue::Int64(v) => Some(*v),
        EncodableValue::Double(v) => Some(*v as i64),
        _ => None,
    }
}

pub fn get_bool(map: &EncodableMap, key: &str) -> Option<bool> {
    match map.get(key)? {
        EncodableValue::Bool(b) => Some(*b),
        _ => None,
    }
}
