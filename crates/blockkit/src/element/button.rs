use tracing::warn;

use super::{hydrate_action_id, validate_action_id, write_action_id};
use crate::prelude_internal::*;

/// Visual emphasis of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonStyle {
    Primary,
    Danger,
}

impl ButtonStyle {
    pub const fn as_str(self) -> &'static str {
        match self {
            ButtonStyle::Primary => "primary",
            ButtonStyle::Danger => "danger",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "primary" => Some(ButtonStyle::Primary),
            "danger" => Some(ButtonStyle::Danger),
            _ => None,
        }
    }
}

/// A `button` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Button {
    pub action_id: Option<String>,
    pub text: Option<PlainText>,
    pub value: Option<String>,
    pub url: Option<String>,
    pub style: Option<ButtonStyle>,
    pub confirm: Companion<ConfirmSlot>,
    pub extra: Extra,
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(PlainText::new(text)),
            ..Default::default()
        }
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }

    pub fn text(mut self, text: impl Into<PlainText>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn primary(self) -> Self {
        self.style(ButtonStyle::Primary)
    }

    pub fn danger(self) -> Self {
        self.style(ButtonStyle::Danger)
    }
}

impl HasConfirm for Button {
    fn confirm_slot(&mut self) -> &mut Companion<ConfirmSlot> {
        &mut self.confirm
    }
}

impl Node for Button {
    fn kind(&self) -> Kind {
        Kind::Button
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        let inner = cx.enter(Kind::Button);
        validate_action_id(Kind::Button, self.action_id.as_deref())?;
        validate_text_field(Kind::Button, "text", self.text.as_ref(), true, Some(75), inner)?;
        if let Some(value) = self.value.as_deref().filter(|v| !v.is_empty()) {
            validate_string("value", value, 1, Some(2000)).map_err(|err| err.at(Kind::Button))?;
        }
        if let Some(url) = self.url.as_deref().filter(|u| !u.is_empty()) {
            validate_string("url", url, 1, Some(3000)).map_err(|err| err.at(Kind::Button))?;
            url::Url::parse(url).map_err(|err| {
                ValidationErrorKind::InvalidValue {
                    field: "url",
                    reason: err.to_string(),
                }
                .at(Kind::Button)
            })?;
        }
        self.confirm.validate(Kind::Button, inner)
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        write_action_id(out, self.action_id.as_deref());
        out.node_optional("text", self.text.as_ref())?;
        out.field_optional("value", self.value.as_deref().filter(|v| !v.is_empty()));
        out.field_optional("url", self.url.as_deref().filter(|u| !u.is_empty()));
        out.field_optional("style", self.style.map(ButtonStyle::as_str));
        self.confirm.write(out)
    }
}

impl Hydrate for Button {
    const KIND: Kind = Kind::Button;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.action_id = hydrate_action_id(data)?;
        self.text = data.use_node("text")?;
        self.value = data.use_str("value")?;
        self.url = data.use_str("url")?;
        if let Some(style) = data.use_str("style")? {
            self.style = ButtonStyle::from_name(&style);
            if self.style.is_none() {
                warn!(%style, "dropping unsupported button style");
            }
        }
        self.confirm.hydrate(data)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_button_output() {
        let json = Button::new("Approve")
            .action_id("approve")
            .value("req-1")
            .primary()
            .confirm("Approve?", "This cannot be undone.")
            .to_json()
            .unwrap();
        assert_eq!(
            json,
            json!({
                "type": "button",
                "action_id": "approve",
                "text": {"type": "plain_text", "text": "Approve"},
                "value": "req-1",
                "style": "primary",
                "confirm": {
                    "title": {"type": "plain_text", "text": "Approve?"},
                    "text": {"type": "mrkdwn", "text": "This cannot be undone."},
                    "confirm": {"type": "plain_text", "text": "OK"},
                    "deny": {"type": "plain_text", "text": "Cancel"}
                }
            })
        );
    }

    #[test]
    fn test_button_requires_text() {
        assert_eq!(
            Button::default().validate().unwrap_err(),
            ValidationErrorKind::MissingField("text").at(Kind::Button)
        );
    }

    #[test]
    fn test_button_text_limit() {
        let err = Button::new("x".repeat(76)).validate().unwrap_err();
        assert_eq!(
            err.kind,
            ValidationErrorKind::TooLong {
                field: "text",
                max: 75
            }
        );
    }

    #[test]
    fn test_button_url_must_parse() {
        let err = Button::new("Docs").url("not a url").validate().unwrap_err();
        assert!(matches!(
            err.kind,
            ValidationErrorKind::InvalidValue { field: "url", .. }
        ));
        assert!(
            Button::new("Docs")
                .url("https://example.com/docs")
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_unknown_style_is_dropped() {
        let button = Button::from_value(json!({
            "type": "button",
            "text": {"type": "plain_text", "text": "Go"},
            "style": "fancy"
        }))
        .unwrap();
        assert_eq!(button.style, None);
        assert!(button.extra.is_empty());
    }
}
