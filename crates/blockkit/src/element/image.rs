use crate::block::{hydrate_block_id, validate_block_id};
use crate::prelude_internal::*;

/// An `image`, usable as a block, a section accessory and a context element.
///
/// Written as a block (with `title` and `block_id`) when placed at the root or
/// directly in a surface. Anywhere else those two fields are left out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Image {
    pub block_id: Option<String>,
    pub image_url: Option<String>,
    pub alt_text: Option<String>,
    pub title: Option<PlainText>,
    pub extra: Extra,
}

impl Image {
    pub fn new(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            image_url: Some(image_url.into()),
            alt_text: Some(alt_text.into()),
            ..Default::default()
        }
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    pub fn title(mut self, title: impl Into<PlainText>) -> Self {
        self.title = Some(title.into());
        self
    }
}

fn is_block_position(cx: Context<'_>) -> bool {
    cx.parent().is_none_or(Kind::is_surface)
}

impl Node for Image {
    fn kind(&self) -> Kind {
        Kind::Image
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        let inner = cx.enter(Kind::Image);
        let Some(image_url) = self.image_url.as_deref().filter(|url| !url.is_empty()) else {
            return Err(ValidationErrorKind::MissingField("image_url").at(Kind::Image));
        };
        validate_string("image_url", image_url, 1, Some(3000)).map_err(|err| err.at(Kind::Image))?;
        url::Url::parse(image_url).map_err(|err| {
            ValidationErrorKind::InvalidValue {
                field: "image_url",
                reason: err.to_string(),
            }
            .at(Kind::Image)
        })?;

        let Some(alt_text) = self.alt_text.as_deref().filter(|alt| !alt.is_empty()) else {
            return Err(ValidationErrorKind::MissingField("alt_text").at(Kind::Image));
        };
        validate_string("alt_text", alt_text, 1, Some(2000)).map_err(|err| err.at(Kind::Image))?;

        validate_text_field(Kind::Image, "title", self.title.as_ref(), false, Some(2000), inner)?;
        if is_block_position(cx) {
            validate_block_id(Kind::Image, self.block_id.as_deref())?;
        }
        Ok(())
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        if is_block_position(out.position()) {
            out.field_optional("block_id", self.block_id.as_deref().filter(|id| !id.is_empty()));
            out.node_optional("title", self.title.as_ref())?;
        }
        out.field_optional("image_url", self.image_url.as_deref());
        out.field_optional("alt_text", self.alt_text.as_deref());
        Ok(())
    }
}

impl Hydrate for Image {
    const KIND: Kind = Kind::Image;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.title = data.use_node("title")?;
        self.image_url = data.use_str("image_url")?;
        self.alt_text = data.use_str("alt_text")?;
        self.block_id = hydrate_block_id(data)?;
        Ok(())
    }
}
