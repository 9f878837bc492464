#[cfg(test)]
mod tests {
    use crate::auth::{
        authorization_url, decode_state, encode_state, generate_correlation_token, tokens_match,
    };
    use crate::models::PendingAuthorization;
    use base64::{engine::general_purpose::URL_SAFE, Engine as _};
    use crmlink_config::HubspotConfig;

    fn config() -> HubspotConfig {
        HubspotConfig {
            client_id: "client-123".to_string(),
            client_secret: "secret-xyz".to_string(),
            redirect_uri: "http://localhost:8000/integrations/hubspot/oauth2callback".to_string(),
            scope: "oauth crm.objects.contacts.read".to_string(),
            authorization_url: "https://app.hubspot.com/oauth/authorize".to_string(),
            token_url: "https://api.hubapi.com/oauth/v1/token".to_string(),
            api_base_url: "https://api.hubapi.com".to_string(),
            state_ttl_secs: 600,
            credentials_ttl_secs: 600,
            request_timeout_secs: None,
        }
    }

    fn pending() -> PendingAuthorization {
        PendingAuthorization {
            correlation_token: "tok".to_string(),
            user_id: "user-1".to_string(),
            org_id: "org-1".to_string(),
        }
    }

    #[test]
    fn correlation_tokens_are_43_url_safe_chars_and_unique() {
        let a = generate_correlation_token().unwrap();
        let b = generate_correlation_token().unwrap();
        assert_eq!(a.len(), 43);
        assert!(a
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert_ne!(a, b);
    }

    #[test]
    fn state_decodes_to_the_encoded_pending_authorization() {
        let state = encode_state(&pending()).unwrap();
        assert!(!state.contains('='));
        assert_eq!(decode_state(&state), Some(pending()));
    }

    #[test]
    fn state_json_uses_state_field_name() {
        let json = serde_json::to_value(pending()).unwrap();
        assert_eq!(json["state"], "tok");
        assert_eq!(json["user_id"], "user-1");
        assert_eq!(json["org_id"], "org-1");
    }

    #[test]
    fn padded_state_is_accepted() {
        let json = serde_json::to_vec(&pending()).unwrap();
        let padded = URL_SAFE.encode(json);
        assert_eq!(decode_state(&padded), Some(pending()));
    }

    #[test]
    fn garbage_state_is_rejected() {
        assert_eq!(decode_state("!!!not-base64!!!"), None);
        // valid base64url, but not the expected JSON
        assert_eq!(decode_state("aGVsbG8"), None);
        assert_eq!(decode_state(""), None);
    }

    #[test]
    fn tokens_match_is_exact() {
        assert!(tokens_match("abc", "abc"));
        assert!(!tokens_match("abc", "abd"));
        assert!(!tokens_match("abc", "abcd"));
    }

    #[test]
    fn authorization_url_carries_encoded_parameters() {
        let url = authorization_url(&config(), "STATE_value-1").unwrap();
        assert_eq!(
            url,
            "https://app.hubspot.com/oauth/authorize\
             ?client_id=client-123\
             &scope=oauth+crm.objects.contacts.read\
             &redirect_uri=http%3A%2F%2Flocalhost%3A8000%2Fintegrations%2Fhubspot%2Foauth2callback\
             &state=STATE_value-1"
        );
    }
}
