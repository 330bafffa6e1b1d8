//! Confirmation dialog requests.

use serde::{Deserialize, Serialize};

/// Yes (`accepted`) or No on the open `dialog/confirm`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerConfirmReq {
    pub accepted: bool,
}

impl AnswerConfirmReq {
    pub const PATH: &'static str = "dialog/answer";
}
