mod button;
mod choice;
mod image;
mod input;
mod picker;
mod select;

pub use button::{Button, ButtonStyle};
pub use choice::{Checkboxes, OverflowMenu, RadioButtons};
pub use image::Image;
pub use input::{NumberInput, TextInput};
pub use picker::{DatePicker, TimePicker};
pub use select::{
    ChannelsSelect, ConversationsSelect, ExternalSelect, MultiChannelsSelect,
    MultiConversationsSelect, MultiExternalSelect, MultiStaticSelect, MultiUsersSelect,
    StaticSelect, UsersSelect,
};

pub use crate::composition::ConversationType;

use crate::prelude_internal::*;
use crate::union::node_union;

/// Longest accepted `action_id`.
pub const MAX_ACTION_ID: usize = 255;

pub(crate) fn validate_action_id(
    owner: Kind,
    action_id: Option<&str>,
) -> Result<(), ValidationError> {
    match action_id.filter(|id| !id.is_empty()) {
        Some(id) => {
            validate_string("action_id", id, 1, Some(MAX_ACTION_ID)).map_err(|err| err.at(owner))
        }
        None => Ok(()),
    }
}

/// Empty ids are treated as unset.
pub(crate) fn write_action_id(out: &mut FieldWriter<'_>, action_id: Option<&str>) {
    out.field_optional("action_id", action_id.filter(|id| !id.is_empty()));
}

pub(crate) fn hydrate_action_id(data: &mut HydrationData) -> Result<Option<String>, Error> {
    Ok(data.use_str("action_id")?.filter(|id| !id.is_empty()))
}

node_union! {
    /// Any element that can sit inside a block.
    pub enum Element as "element" {
        Button(Button),
        Checkboxes(Checkboxes),
        DatePicker(DatePicker),
        Image(Image),
        MultiChannelsSelect(MultiChannelsSelect),
        MultiConversationsSelect(MultiConversationsSelect),
        MultiExternalSelect(MultiExternalSelect),
        MultiStaticSelect(MultiStaticSelect),
        MultiUsersSelect(MultiUsersSelect),
        NumberInput(NumberInput),
        OverflowMenu(OverflowMenu),
        RadioButtons(RadioButtons),
        ChannelsSelect(ChannelsSelect),
        ConversationsSelect(ConversationsSelect),
        ExternalSelect(ExternalSelect),
        StaticSelect(StaticSelect),
        UsersSelect(UsersSelect),
        TextInput(TextInput),
        TimePicker(TimePicker),
    }
}

impl Element {
    /// The `action_id` of an interactive element; images have none.
    pub fn action_id(&self) -> Option<&str> {
        match self {
            Element::Button(e) => e.action_id.as_deref(),
            Element::Checkboxes(e) => e.action_id.as_deref(),
            Element::DatePicker(e) => e.action_id.as_deref(),
            Element::Image(_) => None,
            Element::MultiChannelsSelect(e) => e.action_id.as_deref(),
            Element::MultiConversationsSelect(e) => e.action_id.as_deref(),
            Element::MultiExternalSelect(e) => e.action_id.as_deref(),
            Element::MultiStaticSelect(e) => e.action_id.as_deref(),
            Element::MultiUsersSelect(e) => e.action_id.as_deref(),
            Element::NumberInput(e) => e.action_id.as_deref(),
            Element::OverflowMenu(e) => e.action_id.as_deref(),
            Element::RadioButtons(e) => e.action_id.as_deref(),
            Element::ChannelsSelect(e) => e.action_id.as_deref(),
            Element::ConversationsSelect(e) => e.action_id.as_deref(),
            Element::ExternalSelect(e) => e.action_id.as_deref(),
            Element::StaticSelect(e) => e.action_id.as_deref(),
            Element::UsersSelect(e) => e.action_id.as_deref(),
            Element::TextInput(e) => e.action_id.as_deref(),
            Element::TimePicker(e) => e.action_id.as_deref(),
        }
        .filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::TypeMismatch;

    #[test]
    fn test_parse_resolves_member_kind() {
        let element = Element::from_value(json!({
            "type": "button",
            "text": {"type": "plain_text", "text": "Go"},
            "action_id": "go"
        }))
        .unwrap();
        assert_eq!(element.kind(), Kind::Button);
        assert_eq!(element.action_id(), Some("go"));
    }

    #[test]
    fn test_parse_rejects_blocks() {
        let err = Element::from_value(json!({"type": "divider"})).unwrap_err();
        assert_eq!(
            err,
            Error::TypeMismatch(TypeMismatch {
                resolved: Kind::Divider,
                expected: "element"
            })
        );
        assert_eq!(err.to_string(), "expected element, found divider");
    }

    #[test]
    fn test_action_id_length() {
        let button = Button::new("Go").action_id("a".repeat(256));
        assert_eq!(
            button.validate().unwrap_err().kind,
            ValidationErrorKind::TooLong {
                field: "action_id",
                max: MAX_ACTION_ID
            }
        );
    }
}
