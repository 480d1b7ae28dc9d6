use serde::{Deserialize, Serialize};

/// Wire shape of every error returned to callers.
///
/// `error_code` is the stable contract, `message` is display text only.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDto {
    pub error_code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}
