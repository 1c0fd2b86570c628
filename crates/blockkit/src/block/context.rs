use super::{hydrate_block_id, validate_block_id, write_block_id};
use crate::element::Image;
use crate::prelude_internal::*;
use crate::union::node_union;

const MAX_ELEMENTS: usize = 10;

node_union! {
    /// What a context block can hold: images and text.
    pub enum ContextElement as "context element" {
        Image(Image),
        PlainText(PlainText),
        MrkdwnText(MrkdwnText),
    }
}

/// A `context` block: a line of small images and text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextBlock {
    pub block_id: Option<String>,
    pub elements: Vec<ContextElement>,
    pub extra: Extra,
}

impl ContextBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    pub fn element(mut self, element: impl Into<ContextElement>) -> Self {
        self.elements.push(element.into());
        self
    }

    pub fn image(self, image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        self.element(Image::new(image_url, alt_text))
    }

    pub fn plain_text(self, text: impl Into<String>) -> Self {
        self.element(PlainText::new(text))
    }

    pub fn mrkdwn(self, text: impl Into<String>) -> Self {
        self.element(MrkdwnText::new(text))
    }
}

impl Node for ContextBlock {
    fn kind(&self) -> Kind {
        Kind::Context
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        let inner = cx.enter(Kind::Context);
        validate_block_id(Kind::Context, self.block_id.as_deref())?;
        if self.elements.is_empty() {
            return Err(ValidationErrorKind::TooFew {
                what: "elements",
                min: 1,
            }
            .at(Kind::Context));
        }
        if self.elements.len() > MAX_ELEMENTS {
            return Err(ValidationErrorKind::TooMany {
                what: "elements",
                max: MAX_ELEMENTS,
            }
            .at(Kind::Context));
        }
        for element in &self.elements {
            element.validate_in(inner)?;
        }
        Ok(())
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        write_block_id(out, self.block_id.as_deref());
        out.nodes("elements", &self.elements)
    }
}

impl Hydrate for ContextBlock {
    const KIND: Kind = Kind::Context;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.elements = data.use_nodes("elements")?;
        self.block_id = hydrate_block_id(data)?;
        Ok(())
    }
}
