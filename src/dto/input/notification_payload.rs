use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct NotificationPayload {
    pub message: String,

    ///
    /// ISO-8601 timestamp. It is forwarded as is,
    /// without any validation.
    ///
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn notification_payload_json_deserialize_ok() {
        let json = r#"{
            "message": "Release v2 (build-42)",
            "createdAt": "2024-01-01T00:00:00Z"
        }"#;

        let payload = serde_json::from_str::<NotificationPayload>(json).unwrap();

        assert_eq!(payload.message, "Release v2 (build-42)");
        assert_eq!(payload.created_at, "2024-01-01T00:00:00Z");
    }

    #[test]
    fn notification_payload_json_deserialize_ignores_unknown_fields() {
        let json = r#"{
            "name": "preparing to update release",
            "type": "preparing to update release",
            "level": "LevelDebug",
            "message": "Preparing to update deployment",
            "createdAt": "2024-01-01T00:00:00Z"
        }"#;

        let payload = serde_json::from_str::<NotificationPayload>(json);

        assert!(payload.is_ok());
    }

    #[test]
    fn notification_payload_json_deserialize_snake_case_created_at_err() {
        let json = r#"{
            "message": "Release v2",
            "created_at": "2024-01-01T00:00:00Z"
        }"#;

        let payload = serde_json::from_str::<NotificationPayload>(json);

        assert!(payload.is_err());
    }

    #[test]
    fn notification_payload_json_deserialize_missing_message_err() {
        let json = r#"{ "createdAt": "2024-01-01T00:00:00Z" }"#;

        let payload = serde_json::from_str::<NotificationPayload>(json);

        assert!(payload.is_err());
    }
}
