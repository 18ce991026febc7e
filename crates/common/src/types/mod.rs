use serde::{Deserialize, Serialize};

/// Liveness marker returned from `/`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Health {
    #[serde(rename = "Data")]
    pub data: String,
}

impl Health {
    pub fn successful() -> Self {
        Self { data: "Successful".to_string() }
    }
}

/// Plain `{"message": ...}` confirmation body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
