use super::{hydrate_block_id, validate_block_id, write_block_id};
use crate::prelude_internal::*;

/// A `header` block: a single line of large plain text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    pub block_id: Option<String>,
    pub text: Option<PlainText>,
    pub extra: Extra,
}

impl Header {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(PlainText::new(text)),
            ..Default::default()
        }
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    pub fn text(mut self, text: impl Into<PlainText>) -> Self {
        self.text = Some(text.into());
        self
    }
}

impl Node for Header {
    fn kind(&self) -> Kind {
        Kind::Header
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        validate_block_id(Kind::Header, self.block_id.as_deref())?;
        validate_text_field(
            Kind::Header,
            "text",
            self.text.as_ref(),
            true,
            Some(150),
            cx.enter(Kind::Header),
        )
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        write_block_id(out, self.block_id.as_deref());
        out.node_optional("text", self.text.as_ref())
    }
}

impl Hydrate for Header {
    const KIND: Kind = Kind::Header;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.text = data.use_node("text")?;
        self.block_id = hydrate_block_id(data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_requires_text() {
        assert_eq!(
            Header::default().validate().unwrap_err(),
            ValidationErrorKind::MissingField("text").at(Kind::Header)
        );
    }

    #[test]
    fn test_header_text_limit() {
        assert!(Header::new("h".repeat(150)).validate().is_ok());
        assert_eq!(
            Header::new("h".repeat(151)).validate().unwrap_err().kind,
            ValidationErrorKind::TooLong {
                field: "text",
                max: 150
            }
        );
    }
}
