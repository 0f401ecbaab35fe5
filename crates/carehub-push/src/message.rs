//! Push message construction.

use serde::Serialize;

/// One notification addressed to one device.
#[derive(Debug, Clone, Serialize)]
pub struct PushMessage {
    /// Provider device token.
    pub device_token: String,
    /// Notification title.
    pub title: String,
    /// Notification body.
    pub body: String,
}

impl PushMessage {
    /// The provider wire payload for this message.
    pub fn to_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "message": {
                "token": self.device_token,
                "notification": {
                    "title": self.title,
                    "body": self.body,
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_matches_provider_shape() {
        let msg = PushMessage {
            device_token: "device-abc".to_string(),
            title: "Lembrete de medicação".to_string(),
            body: "Está quase na hora de tomar Losartana (50mg).".to_string(),
        };

        let payload = msg.to_payload();
        assert_eq!(payload["message"]["token"], "device-abc");
        assert_eq!(payload["message"]["notification"]["title"], "Lembrete de medicação");
        assert!(payload["message"].get("data").is_none());
    }
}
