use serde_json::Value;

use super::action::ActionType;
use crate::core::{ClientError, Result};

/// A materialized gateway response
///
/// The server's shape is not statically known (each action populates
/// `responseData` differently), so the body is held as a read-only JSON value
/// tree. The only contractual field is `responseData`.
#[derive(Debug, Clone)]
pub struct GatewayResponse {
    root: Value,
}

impl GatewayResponse {
    /// Parse a raw response body
    ///
    /// Fails with a decode error on invalid JSON; never returns a partial
    /// tree.
    pub fn from_json(raw: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(raw)?;
        Ok(GatewayResponse { root })
    }

    /// The full response tree
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Extract the action-specific `responseData` payload
    pub fn response_data(&self) -> Result<ResponseData> {
        match self.root.get("responseData") {
            Some(data) => Ok(ResponseData {
                value: data.clone(),
            }),
            None => Err(ClientError::protocol(
                "Response is missing the 'responseData' field",
            )),
        }
    }
}

/// The action-specific payload inside a gateway response
///
/// Read-only. Arrays keep server order; objects are field-addressable by
/// name.
#[derive(Debug, Clone)]
pub struct ResponseData {
    value: Value,
}

impl ResponseData {
    /// The underlying JSON value
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Look up a field by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.value.get(name)
    }

    /// The record collection stored under `key`
    ///
    /// Fails with a protocol error when the field is absent or not an array.
    pub fn records(&self, key: &str) -> Result<&Vec<Value>> {
        self.value
            .get(key)
            .and_then(Value::as_array)
            .ok_or_else(|| {
                ClientError::protocol(format!("Response data has no '{}' collection", key))
            })
    }

    /// The record collection the given action is defined to return
    pub fn records_for(&self, action: ActionType) -> Result<&Vec<Value>> {
        self.records(action.collection_key())
    }

    /// Profile records (`profiles`)
    pub fn profiles(&self) -> Result<&Vec<Value>> {
        self.records("profiles")
    }

    /// Transaction records (`transactions`)
    pub fn transactions(&self) -> Result<&Vec<Value>> {
        self.records("transactions")
    }

    /// Summary records (`summaries`)
    pub fn summaries(&self) -> Result<&Vec<Value>> {
        self.records("summaries")
    }
}
