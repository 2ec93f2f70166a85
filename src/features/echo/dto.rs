use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

pub const SUCCESS_STATUS: &str = "success";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameter {
    pub key: String,
    pub value: String,
}

impl QueryParameter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

// Serialized as a single-entry object: `{"key": "value"}`.
impl Serialize for QueryParameter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.key, &self.value)?;
        map.end()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EchoResponseDto {
    pub status: &'static str,
    pub data: Vec<QueryParameter>,
}

impl EchoResponseDto {
    pub fn success(data: Vec<QueryParameter>) -> Self {
        Self {
            status: SUCCESS_STATUS,
            data,
        }
    }
}
