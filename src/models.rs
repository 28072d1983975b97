use serde::{Deserialize, Serialize};

pub const PONG: &str = "pong";

/// Response body shared by every `/ping` route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn pong() -> Self {
        MessageResponse {
            message: PONG.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pong_serializes_to_single_message_key() {
        let body = serde_json::to_value(MessageResponse::pong()).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "pong" }));
    }
}
