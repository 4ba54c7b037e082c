//! Wire types for the contact endpoint.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// JSON body posted to the contact endpoint: one string per form field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactRequest {
    fields: BTreeMap<String, String>,
}

impl ContactRequest {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<HashMap<String, String>> for ContactRequest {
    fn from(values: HashMap<String, String>) -> Self {
        Self {
            fields: values.into_iter().collect(),
        }
    }
}

/// Success payload returned by the contact endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
