use blockkit::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_button_parsed_as_unrelated_kind() {
    let button = json!({
        "type": "button",
        "text": {"type": "plain_text", "text": "Go"},
        "action_id": "go"
    });
    let err = Divider::from_value(button.clone()).unwrap_err();
    assert_eq!(
        err,
        Error::TypeMismatch(TypeMismatch {
            resolved: Kind::Button,
            expected: "divider",
        })
    );

    let err = Block::from_value(button.clone()).unwrap_err();
    assert_eq!(err.to_string(), "expected block, found button");

    assert!(Element::from_value(button).is_ok());
}

#[test]
fn test_nested_type_mismatch() {
    let err = Section::from_value(json!({
        "type": "section",
        "text": {"type": "mrkdwn", "text": "Hi"},
        "accessory": {"type": "section", "text": {"type": "mrkdwn", "text": "No"}}
    }))
    .unwrap_err();
    assert_eq!(
        err,
        Error::TypeMismatch(TypeMismatch {
            resolved: Kind::Section,
            expected: "element",
        })
    );
}

#[test]
fn test_unknown_discriminator() {
    let err = Message::from_value(json!({
        "blocks": [{"type": "carousel"}]
    }))
    .unwrap_err();
    assert_eq!(
        err,
        Error::UnknownDiscriminator(UnknownDiscriminator {
            discriminator: "carousel".to_string(),
        })
    );
}

#[test]
fn test_list_entry_without_discriminator() {
    let err = Modal::from_value(json!({
        "type": "modal",
        "title": {"type": "plain_text", "text": "Form"},
        "blocks": [{"text": {"type": "mrkdwn", "text": "untyped"}}]
    }))
    .unwrap_err();
    assert_eq!(
        err,
        Error::Hydration(HydrationError::MissingDiscriminator { expected: "block" })
    );
}

#[test]
fn test_direct_hydration_checks_type() {
    let err = Header::from_value(json!({
        "type": "header",
        "text": {"type": "mrkdwn", "text": "Headers are plain"}
    }))
    .unwrap_err();
    assert_eq!(
        err,
        Error::TypeMismatch(TypeMismatch {
            resolved: Kind::MrkdwnText,
            expected: "plain_text",
        })
    );
}

#[test]
fn test_parsed_documents_are_validated() {
    let err = Actions::from_value(json!({"type": "actions", "elements": []})).unwrap_err();
    assert_eq!(
        err,
        Error::Validation(
            ValidationErrorKind::TooFew {
                what: "elements",
                min: 1
            }
            .at(Kind::Actions)
        )
    );
}

#[test]
fn test_invalid_input_shapes() {
    assert!(matches!(
        Divider::from_value(json!([{"type": "divider"}])),
        Err(Error::Hydration(HydrationError::NotAnObject { .. }))
    ));
    assert!(matches!(
        Divider::from_value(json!({"type": 7})),
        Err(Error::Hydration(HydrationError::InvalidDiscriminator { .. }))
    ));
    assert!(matches!(
        Divider::from_json_str("{\"type\": \"divider\""),
        Err(Error::Hydration(HydrationError::InvalidJson(_)))
    ));
    assert!(matches!(
        Button::from_value(json!({"type": "button", "text": "Go"})),
        Err(Error::Hydration(HydrationError::UnexpectedShape { .. }))
    ));
}

#[test]
fn test_failed_serialize_can_be_retried() {
    let mut header = Header::new("h".repeat(151));
    assert!(header.to_json().is_err());
    header.text = Some(PlainText::new("Short"));
    assert_eq!(
        header.to_json().unwrap(),
        json!({"type": "header", "text": {"type": "plain_text", "text": "Short"}})
    );
}
