use super::{hydrate_block_id, validate_block_id, write_block_id};
use crate::element::Element;
use crate::prelude_internal::*;

const MAX_LABEL: usize = 2000;
const MAX_HINT: usize = 2000;

/// An `input` block: a labelled form element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputBlock {
    pub block_id: Option<String>,
    pub label: Option<PlainText>,
    pub element: Option<Element>,
    pub hint: Option<PlainText>,
    pub optional: bool,
    pub dispatch_action: bool,
    pub extra: Extra,
}

impl InputBlock {
    pub fn new(label: impl Into<String>, element: impl Into<Element>) -> Self {
        Self {
            label: Some(PlainText::new(label)),
            element: Some(element.into()),
            ..Default::default()
        }
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    pub fn label(mut self, label: impl Into<PlainText>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn element(mut self, element: impl Into<Element>) -> Self {
        self.element = Some(element.into());
        self
    }

    pub fn hint(mut self, hint: impl Into<PlainText>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn dispatch_action(mut self, dispatch_action: bool) -> Self {
        self.dispatch_action = dispatch_action;
        self
    }
}

impl Node for InputBlock {
    fn kind(&self) -> Kind {
        Kind::Input
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        let inner = cx.enter(Kind::Input);
        validate_block_id(Kind::Input, self.block_id.as_deref())?;
        validate_text_field(
            Kind::Input,
            "label",
            self.label.as_ref(),
            true,
            Some(MAX_LABEL),
            inner,
        )?;

        let Some(element) = &self.element else {
            return Err(ValidationErrorKind::MissingField("element").at(Kind::Input));
        };
        if !element.kind().is_input_element() {
            return Err(ValidationErrorKind::KindNotAllowed {
                child: element.kind(),
                slot: "element",
            }
            .at(Kind::Input));
        }
        element.validate_in(inner)?;

        validate_text_field(
            Kind::Input,
            "hint",
            self.hint.as_ref(),
            false,
            Some(MAX_HINT),
            inner,
        )
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        write_block_id(out, self.block_id.as_deref());
        out.node_optional("label", self.label.as_ref())?;
        out.node_optional("element", self.element.as_ref())?;
        out.node_optional("hint", self.hint.as_ref())?;
        if self.optional {
            out.field("optional", true);
        }
        if self.dispatch_action {
            out.field("dispatch_action", true);
        }
        Ok(())
    }
}

impl Hydrate for InputBlock {
    const KIND: Kind = Kind::Input;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.label = data.use_node("label")?;
        self.element = data.use_node("element")?;
        self.hint = data.use_node("hint")?;
        self.optional = data.use_bool("optional")?.unwrap_or_default();
        self.dispatch_action = data.use_bool("dispatch_action")?.unwrap_or_default();
        self.block_id = hydrate_block_id(data)?;
        Ok(())
    }
}
