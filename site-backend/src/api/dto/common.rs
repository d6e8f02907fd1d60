// src/api/dto/common.rs

use serde::{Deserialize, Serialize};

/// 削除成功などを伝えるメッセージのみのレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
