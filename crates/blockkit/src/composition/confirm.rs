use crate::prelude_internal::*;

/// A `confirm` dialog shown before an interactive element acts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Confirm {
    pub title: Option<PlainText>,
    pub text: Option<Text>,
    pub confirm: Option<PlainText>,
    pub deny: Option<PlainText>,
    pub extra: Extra,
}

impl Confirm {
    /// A dialog with `text` as mrkdwn and "OK" / "Cancel" buttons.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: Some(PlainText::new(title)),
            text: Some(Text::mrkdwn(text)),
            confirm: Some(PlainText::new("OK")),
            deny: Some(PlainText::new("Cancel")),
            extra: Extra::default(),
        }
    }

    pub fn title(mut self, title: impl Into<PlainText>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn text(mut self, text: impl Into<Text>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn confirm(mut self, confirm: impl Into<PlainText>) -> Self {
        self.confirm = Some(confirm.into());
        self
    }

    pub fn deny(mut self, deny: impl Into<PlainText>) -> Self {
        self.deny = Some(deny.into());
        self
    }
}

impl Node for Confirm {
    fn kind(&self) -> Kind {
        Kind::Confirm
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        let inner = cx.enter(Kind::Confirm);
        validate_text_field(Kind::Confirm, "title", self.title.as_ref(), true, None, inner)?;
        validate_text_field(Kind::Confirm, "text", self.text.as_ref(), true, None, inner)?;
        validate_text_field(Kind::Confirm, "confirm", self.confirm.as_ref(), true, None, inner)?;
        validate_text_field(Kind::Confirm, "deny", self.deny.as_ref(), true, None, inner)
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        out.node_optional("title", self.title.as_ref())?;
        out.node_optional("text", self.text.as_ref())?;
        out.node_optional("confirm", self.confirm.as_ref())?;
        out.node_optional("deny", self.deny.as_ref())
    }
}

impl Hydrate for Confirm {
    const KIND: Kind = Kind::Confirm;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.title = data.use_node("title")?;
        self.text = data.use_node("text")?;
        self.confirm = data.use_node("confirm")?;
        self.deny = data.use_node("deny")?;
        Ok(())
    }
}
