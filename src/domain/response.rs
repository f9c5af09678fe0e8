use serde_json::{Map, Value};

/// Code used for failures detected before anything is sent.
pub const LOCAL_FAILURE_CODE: i32 = -1;

#[derive(Debug, Clone, PartialEq)]
/// Uniform outcome of a send, whether rejected locally or answered by the gateway.
pub struct ActionResult {
    pub success: bool,
    pub status_code: Option<i32>,
    pub message: Option<String>,
    pub info: Option<Map<String, Value>>,
}

impl ActionResult {
    pub fn new(
        success: bool,
        status_code: Option<i32>,
        message: Option<String>,
        info: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            success,
            status_code,
            message,
            info,
        }
    }

    /// A failed result with a code and message and no info.
    pub fn failure(status_code: i32, message: impl Into<String>) -> Self {
        Self::new(false, Some(status_code), Some(message.into()), None)
    }

    /// No eligible recipients were left after filtering.
    pub fn no_numbers() -> Self {
        Self::failure(LOCAL_FAILURE_CODE, "No Numbers")
    }

    /// More recipients than one request may carry.
    pub fn too_many_numbers() -> Self {
        Self::failure(LOCAL_FAILURE_CODE, "Max 2000 Items")
    }

    /// The gateway answered with something that is not the expected JSON.
    pub fn unparsed() -> Self {
        Self::new(false, None, None, None)
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}
