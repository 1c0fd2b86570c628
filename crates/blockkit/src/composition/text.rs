use crate::prelude_internal::*;
use crate::union::node_union;

/// Check a string field against inclusive character-count bounds.
pub fn validate_string(
    field: &'static str,
    value: &str,
    min: usize,
    max: Option<usize>,
) -> Result<(), ValidationErrorKind> {
    let len = value.chars().count();
    if len < min {
        return Err(ValidationErrorKind::TooShort { field, min });
    }
    if let Some(max) = max
        && len > max
    {
        return Err(ValidationErrorKind::TooLong { field, max });
    }
    Ok(())
}

/// Text nodes expose their raw string for length checks by their owner.
pub trait TextContent {
    /// The text, or `""` when unset.
    fn as_str(&self) -> &str;
}

/// Validate a text child held by `owner` under `field`.
///
/// `cx` is the context of the owner's children. Missing text fails only when
/// `required` is set; present text must be valid and at most `max` characters.
pub fn validate_text_field<T: Node + TextContent>(
    owner: Kind,
    field: &'static str,
    text: Option<&T>,
    required: bool,
    max: Option<usize>,
    cx: Context<'_>,
) -> Result<(), ValidationError> {
    let Some(text) = text else {
        return if required {
            Err(ValidationErrorKind::MissingField(field).at(owner))
        } else {
            Ok(())
        };
    };
    text.validate_in(cx)?;
    validate_string(field, text.as_str(), 1, max).map_err(|kind| kind.at(owner))
}

/// A `plain_text` object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlainText {
    pub text: Option<String>,
    /// Falls back to [`Config::default_emoji`] when unset.
    pub emoji: Option<bool>,
    pub extra: Extra,
}

impl PlainText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn emoji(mut self, emoji: bool) -> Self {
        self.emoji = Some(emoji);
        self
    }
}

impl From<&str> for PlainText {
    fn from(text: &str) -> Self {
        PlainText::new(text)
    }
}

impl From<String> for PlainText {
    fn from(text: String) -> Self {
        PlainText::new(text)
    }
}

impl TextContent for PlainText {
    fn as_str(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

impl Node for PlainText {
    fn kind(&self) -> Kind {
        Kind::PlainText
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, _cx: Context<'_>) -> Result<(), ValidationError> {
        validate_raw_text(Kind::PlainText, self.text.as_deref())
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        out.field_optional("text", self.text.as_deref());
        out.field_optional("emoji", self.emoji.or(out.config().default_emoji));
        Ok(())
    }
}

impl Hydrate for PlainText {
    const KIND: Kind = Kind::PlainText;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.text = data.use_str("text")?;
        self.emoji = data.use_bool("emoji")?;
        Ok(())
    }
}

/// A `mrkdwn` object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MrkdwnText {
    pub text: Option<String>,
    /// Falls back to [`Config::default_verbatim`] when unset.
    pub verbatim: Option<bool>,
    pub extra: Extra,
}

impl MrkdwnText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn verbatim(mut self, verbatim: bool) -> Self {
        self.verbatim = Some(verbatim);
        self
    }
}

impl TextContent for MrkdwnText {
    fn as_str(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

impl Node for MrkdwnText {
    fn kind(&self) -> Kind {
        Kind::MrkdwnText
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, _cx: Context<'_>) -> Result<(), ValidationError> {
        validate_raw_text(Kind::MrkdwnText, self.text.as_deref())
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        out.field_optional("text", self.text.as_deref());
        out.field_optional("verbatim", self.verbatim.or(out.config().default_verbatim));
        Ok(())
    }
}

impl Hydrate for MrkdwnText {
    const KIND: Kind = Kind::MrkdwnText;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.text = data.use_str("text")?;
        self.verbatim = data.use_bool("verbatim")?;
        Ok(())
    }
}

fn validate_raw_text(kind: Kind, text: Option<&str>) -> Result<(), ValidationError> {
    let text = text.ok_or(ValidationErrorKind::MissingField("text").at(kind))?;
    validate_string("text", text, 1, None).map_err(|err| err.at(kind))
}

node_union! {
    /// Either text format, where the schema accepts both.
    pub enum Text as "text" {
        Plain(PlainText),
        Mrkdwn(MrkdwnText),
    }
}

impl Text {
    pub fn plain(text: impl Into<String>) -> Self {
        Text::Plain(PlainText::new(text))
    }

    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Text::Mrkdwn(MrkdwnText::new(text))
    }
}

impl TextContent for Text {
    fn as_str(&self) -> &str {
        match self {
            Text::Plain(text) => text.as_str(),
            Text::Mrkdwn(text) => text.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::TypeMismatch;

    #[test]
    fn test_validate_string_counts_characters() {
        assert!(validate_string("text", "日本語", 1, Some(3)).is_ok());
        assert_eq!(
            validate_string("text", "日本語!", 1, Some(3)),
            Err(ValidationErrorKind::TooLong {
                field: "text",
                max: 3
            })
        );
        assert_eq!(
            validate_string("text", "", 1, None),
            Err(ValidationErrorKind::TooShort {
                field: "text",
                min: 1
            })
        );
    }

    #[test]
    fn test_plain_text_requires_text() {
        let err = PlainText::default().validate().unwrap_err();
        assert_eq!(
            err,
            ValidationErrorKind::MissingField("text").at(Kind::PlainText)
        );
        assert_eq!(err.to_string(), "invalid plain_text: must contain \"text\"");
    }

    #[test]
    fn test_plain_text_serializes_with_type() {
        let json = PlainText::new("Hi").emoji(true).to_json().unwrap();
        assert_eq!(json, json!({"type": "plain_text", "text": "Hi", "emoji": true}));
    }

    #[test]
    fn test_config_defaults_apply_when_unset() {
        let config = Config::new()
            .default_emoji(Some(false))
            .default_verbatim(Some(true));
        let plain = PlainText::new("a").serialize_with(&config).unwrap();
        assert_eq!(plain["emoji"], json!(false));
        let explicit = PlainText::new("a").emoji(true).serialize_with(&config).unwrap();
        assert_eq!(explicit["emoji"], json!(true));
        let mrkdwn = MrkdwnText::new("*a*").serialize_with(&config).unwrap();
        assert_eq!(mrkdwn["verbatim"], json!(true));
    }

    #[test]
    fn test_text_union_resolves_discriminator() {
        let text = Text::from_value(json!({"type": "mrkdwn", "text": "*b*"})).unwrap();
        assert_eq!(text, Text::mrkdwn("*b*"));
        assert_eq!(text.as_str(), "*b*");
    }

    #[test]
    fn test_text_union_requires_discriminator() {
        let err = Text::from_value(json!({"text": "x"})).unwrap_err();
        assert_eq!(
            err,
            Error::Hydration(crate::error::HydrationError::MissingDiscriminator {
                expected: "text"
            })
        );
    }

    #[test]
    fn test_text_union_rejects_other_kinds() {
        let err = Text::from_value(json!({"type": "button"})).unwrap_err();
        assert_eq!(
            err,
            Error::TypeMismatch(TypeMismatch {
                resolved: Kind::Button,
                expected: "text"
            })
        );
    }

    #[test]
    fn test_validate_text_field_reports_owner() {
        let long = PlainText::new("x".repeat(76));
        let err = validate_text_field(
            Kind::Button,
            "text",
            Some(&long),
            true,
            Some(75),
            Context::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationErrorKind::TooLong {
                field: "text",
                max: 75
            }
            .at(Kind::Button)
        );
    }
}
