use super::{hydrate_block_id, validate_block_id, write_block_id};
use crate::element::Element;
use crate::prelude_internal::*;

const MAX_TEXT: usize = 3000;
const MAX_FIELDS: usize = 10;
const MAX_FIELD_TEXT: usize = 2000;

/// A `section` block: text and/or a grid of fields, with an optional accessory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    pub block_id: Option<String>,
    pub text: Option<Text>,
    pub fields: Vec<Text>,
    pub accessory: Option<Element>,
    pub extra: Extra,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    pub fn text(mut self, text: impl Into<Text>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn mrkdwn(self, text: impl Into<String>) -> Self {
        self.text(Text::mrkdwn(text))
    }

    pub fn plain_text(self, text: impl Into<String>) -> Self {
        self.text(Text::plain(text))
    }

    pub fn field(mut self, field: impl Into<Text>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Add each string as a `mrkdwn` field.
    pub fn fields<S: Into<String>>(mut self, fields: impl IntoIterator<Item = S>) -> Self {
        self.fields.extend(fields.into_iter().map(Text::mrkdwn));
        self
    }

    /// Add a label field and a value field per pair.
    pub fn field_map<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.fields.push(Text::mrkdwn(key));
            self.fields.push(Text::mrkdwn(value));
        }
        self
    }

    pub fn accessory(mut self, accessory: impl Into<Element>) -> Self {
        self.accessory = Some(accessory.into());
        self
    }
}

impl Node for Section {
    fn kind(&self) -> Kind {
        Kind::Section
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        let inner = cx.enter(Kind::Section);
        validate_block_id(Kind::Section, self.block_id.as_deref())?;
        if self.text.is_none() && self.fields.is_empty() {
            return Err(ValidationErrorKind::MissingOneOf {
                fields: &["text", "fields"],
            }
            .at(Kind::Section));
        }
        validate_text_field(
            Kind::Section,
            "text",
            self.text.as_ref(),
            false,
            Some(MAX_TEXT),
            inner,
        )?;

        if self.fields.len() > MAX_FIELDS {
            return Err(ValidationErrorKind::TooMany {
                what: "fields",
                max: MAX_FIELDS,
            }
            .at(Kind::Section));
        }
        for field in &self.fields {
            validate_text_field(
                Kind::Section,
                "fields",
                Some(field),
                true,
                Some(MAX_FIELD_TEXT),
                inner,
            )?;
        }

        if let Some(accessory) = &self.accessory {
            if !accessory.kind().is_accessory() {
                return Err(ValidationErrorKind::KindNotAllowed {
                    child: accessory.kind(),
                    slot: "accessory",
                }
                .at(Kind::Section));
            }
            accessory.validate_in(inner)?;
        }
        Ok(())
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        write_block_id(out, self.block_id.as_deref());
        out.node_optional("text", self.text.as_ref())?;
        if !self.fields.is_empty() {
            out.nodes("fields", &self.fields)?;
        }
        out.node_optional("accessory", self.accessory.as_ref())
    }
}

impl Hydrate for Section {
    const KIND: Kind = Kind::Section;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.text = data.use_node("text")?;
        self.fields = data.use_nodes("fields")?;
        self.accessory = data.use_node("accessory")?;
        self.block_id = hydrate_block_id(data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::element::{Button, Image, NumberInput};

    #[test]
    fn test_section_with_accessory() {
        let json = Section::new()
            .block_id("intro")
            .mrkdwn("*Hello*")
            .accessory(Button::new("Go").action_id("go"))
            .to_json()
            .unwrap();
        assert_eq!(
            json,
            json!({
                "type": "section",
                "block_id": "intro",
                "text": {"type": "mrkdwn", "text": "*Hello*"},
                "accessory": {
                    "type": "button",
                    "action_id": "go",
                    "text": {"type": "plain_text", "text": "Go"}
                }
            })
        );
    }

    #[test]
    fn test_section_needs_text_or_fields() {
        assert_eq!(
            Section::new().validate().unwrap_err(),
            ValidationErrorKind::MissingOneOf {
                fields: &["text", "fields"]
            }
            .at(Kind::Section)
        );
        assert!(Section::new().fields(["a", "b"]).validate().is_ok());
    }

    #[test]
    fn test_field_map_adds_pairs() {
        let section = Section::new().field_map([("Owner", "ops"), ("Status", "open")]);
        assert_eq!(section.fields.len(), 4);
        let json = section.to_json().unwrap();
        assert_eq!(json["fields"][2], json!({"type": "mrkdwn", "text": "Status"}));
    }

    #[test]
    fn test_too_many_fields() {
        let section = Section::new().fields((0..11).map(|i| i.to_string()));
        assert_eq!(
            section.validate().unwrap_err().kind,
            ValidationErrorKind::TooMany {
                what: "fields",
                max: 10
            }
        );
    }

    #[test]
    fn test_number_input_is_not_an_accessory() {
        let section = Section::new()
            .plain_text("Amount")
            .accessory(NumberInput::new().action_id("amount"));
        assert_eq!(
            section.validate().unwrap_err().kind,
            ValidationErrorKind::KindNotAllowed {
                child: Kind::NumberInput,
                slot: "accessory"
            }
        );
    }

    #[test]
    fn test_image_accessory_drops_block_fields() {
        let json = Section::new()
            .mrkdwn("Logo")
            .accessory(
                Image::new("https://example.com/logo.png", "Logo")
                    .title("Hidden")
                    .block_id("hidden"),
            )
            .to_json()
            .unwrap();
        assert_eq!(
            json["accessory"],
            json!({
                "type": "image",
                "image_url": "https://example.com/logo.png",
                "alt_text": "Logo"
            })
        );
    }

    #[test]
    fn test_hydrate_rejects_block_accessory() {
        let err = Section::from_value(json!({
            "type": "section",
            "text": {"type": "mrkdwn", "text": "x"},
            "accessory": {"type": "divider"}
        }))
        .unwrap_err();
        assert!(matches!(err, Error::TypeMismatch(_)));
    }
}
