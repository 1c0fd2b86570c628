use std::collections::HashSet;

use blockkit::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_discriminators_are_a_bijection() {
    let mut tags = HashSet::new();
    for &kind in Kind::ALL {
        assert_eq!(Kind::from_tag(kind.tag()), Some(kind));
        assert_eq!(kind.tag().parse::<Kind>(), Ok(kind));
        assert!(tags.insert(kind.tag()), "tag {} registered twice", kind.tag());
    }
    assert_eq!(tags.len(), Kind::ALL.len());
}

#[test]
fn test_unregistered_tag_is_an_error() {
    assert_eq!(Kind::from_tag("rich_text"), None);
    assert_eq!(
        "rich_text".parse::<Kind>(),
        Err(UnknownDiscriminator {
            discriminator: "rich_text".to_string(),
        })
    );
}

#[test]
fn test_every_kind_resolves_through_any_node() {
    for &kind in Kind::ALL {
        // Most empty objects fail validation, but only after resolving.
        match AnyNode::from_value(json!({"type": kind.tag()})) {
            Ok(node) => assert_eq!(node.kind(), kind),
            Err(Error::Validation(_)) => {}
            Err(other) => panic!("{kind} did not resolve: {other}"),
        }
    }
}

#[test]
fn test_bare_kinds_are_written_without_type() {
    let option = OptionItem::new("A", "a").to_json().unwrap();
    assert!(option.get("type").is_none());
    let text = PlainText::new("A").to_json().unwrap();
    assert_eq!(text["type"], json!("plain_text"));
}

#[test]
fn test_category_checks() {
    assert!(Kind::Image.is_accessory());
    assert!(!Kind::NumberInput.is_accessory());
    assert!(Kind::Button.is_action_element());
    assert!(!Kind::Button.is_input_element());
    assert!(Kind::Modal.is_surface());
    assert!(!Kind::Section.is_surface());
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_documents_are_send_and_sync() {
    assert_send_sync::<Message>();
    assert_send_sync::<Modal>();
    assert_send_sync::<AnyNode>();
    assert_send_sync::<Error>();
}
