use super::*;

#[test]
fn default_endpoint_is_api_contact() {
    if option_env!("PORTFOLIO_CONTACT_ENDPOINT").is_none() {
        assert_eq!(CONTACT_ENDPOINT, "/api/contact");
    }
    assert_eq!(HttpContactClient::default().endpoint(), CONTACT_ENDPOINT);
}

#[test]
fn custom_endpoint_is_kept() {
    let client = HttpContactClient::new("https://forms.example.test/contact");
    assert_eq!(client.endpoint(), "https://forms.example.test/contact");
}

#[test]
fn ok_status_with_json_body_is_accepted() {
    assert_eq!(classify_contact_response(true, r#"{"ok":true}"#), Ok(ContactReply::Accepted));
    assert_eq!(classify_contact_response(true, "{}"), Ok(ContactReply::Accepted));
    assert_eq!(classify_contact_response(true, "null"), Ok(ContactReply::Accepted));
}

#[test]
fn error_status_with_error_field_is_rejected_with_text() {
    assert_eq!(
        classify_contact_response(false, r#"{"error":"Invalid email"}"#),
        Ok(ContactReply::Rejected { error: Some("Invalid email".to_owned()) })
    );
}

#[test]
fn error_status_without_error_field_is_rejected_without_text() {
    assert_eq!(
        classify_contact_response(false, r#"{"status":"bad"}"#),
        Ok(ContactReply::Rejected { error: None })
    );
}

#[test]
fn non_json_body_is_transport_failure_for_any_status() {
    for ok in [true, false] {
        for body in ["", "<html>502 Bad Gateway</html>", "{\"error\":"] {
            assert!(
                matches!(classify_contact_response(ok, body), Err(TransportError::MalformedBody(_))),
                "ok={ok} body={body:?}"
            );
        }
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_client_is_unavailable_outside_browser() {
    let payload = ContactFormData::default();
    let result = futures::executor::block_on(HttpContactClient::default().send(&payload));
    assert_eq!(result, Err(TransportError::Unavailable));
}

#[test]
fn transport_error_messages() {
    assert_eq!(TransportError::Request("offline".into()).to_string(), "request failed: offline");
    assert_eq!(
        TransportError::MalformedBody("eof".into()).to_string(),
        "malformed response body: eof"
    );
}
