//! Views: app home tabs and modals.

use serde::Serialize;

use super::block_list::{BlockList, BlockRules, HasBlocks};
use crate::prelude_internal::*;

const MODAL_RULES: BlockRules = BlockRules::new(100, true);
const HOME_RULES: BlockRules = BlockRules::new(100, false);

const MAX_TITLE: usize = 24;

/// Identifiers carried by every view and echoed back in interaction payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFields {
    pub callback_id: Option<String>,
    pub external_id: Option<String>,
    pub private_metadata: Option<String>,
}

impl ViewFields {
    fn write(&self, out: &mut FieldWriter<'_>) {
        let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());
        out.field_optional("callback_id", non_empty(&self.callback_id));
        out.field_optional("external_id", non_empty(&self.external_id));
        out.field_optional("private_metadata", non_empty(&self.private_metadata));
    }

    fn hydrate(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.callback_id = data.use_str("callback_id")?;
        self.external_id = data.use_str("external_id")?;
        self.private_metadata = data.use_str("private_metadata")?;
        Ok(())
    }
}

/// By-value builders for [`ViewFields`].
pub trait HasViewFields: Sized {
    fn view_fields(&mut self) -> &mut ViewFields;

    fn callback_id(mut self, callback_id: impl Into<String>) -> Self {
        self.view_fields().callback_id = Some(callback_id.into());
        self
    }

    fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.view_fields().external_id = Some(external_id.into());
        self
    }

    fn private_metadata(mut self, private_metadata: impl Into<String>) -> Self {
        self.view_fields().private_metadata = Some(private_metadata.into());
        self
    }

    /// Store `data` as JSON in `private_metadata`.
    fn private_metadata_json<T: Serialize + ?Sized>(self, data: &T) -> Result<Self, Error> {
        let encoded = serde_json::to_string(data)?;
        Ok(self.private_metadata(encoded))
    }
}

/// A `modal` view.
#[derive(Debug, Clone, PartialEq)]
pub struct Modal {
    pub title: Option<PlainText>,
    pub submit: Option<PlainText>,
    pub close: Option<PlainText>,
    pub clear_on_close: bool,
    pub notify_on_close: bool,
    pub view: ViewFields,
    pub blocks: BlockList,
    pub extra: Extra,
}

impl Default for Modal {
    fn default() -> Self {
        Self {
            title: None,
            submit: None,
            close: None,
            clear_on_close: false,
            notify_on_close: false,
            view: ViewFields::default(),
            blocks: BlockList::new(MODAL_RULES),
            extra: Extra::default(),
        }
    }
}

impl Modal {
    pub fn new(title: impl Into<String>) -> Self {
        Self::default().title(PlainText::new(title))
    }

    pub fn title(mut self, title: impl Into<PlainText>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn submit(mut self, submit: impl Into<PlainText>) -> Self {
        self.submit = Some(submit.into());
        self
    }

    pub fn close(mut self, close: impl Into<PlainText>) -> Self {
        self.close = Some(close.into());
        self
    }

    pub fn clear_on_close(mut self, clear: bool) -> Self {
        self.clear_on_close = clear;
        self
    }

    pub fn notify_on_close(mut self, notify: bool) -> Self {
        self.notify_on_close = notify;
        self
    }
}

impl HasBlocks for Modal {
    fn block_list(&mut self) -> &mut BlockList {
        &mut self.blocks
    }
}

impl HasViewFields for Modal {
    fn view_fields(&mut self) -> &mut ViewFields {
        &mut self.view
    }
}

impl Node for Modal {
    fn kind(&self) -> Kind {
        Kind::Modal
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        let inner = cx.enter(Kind::Modal);
        self.blocks.validate(Kind::Modal, inner)?;
        validate_text_field(
            Kind::Modal,
            "title",
            self.title.as_ref(),
            true,
            Some(MAX_TITLE),
            inner,
        )?;
        if self.submit.is_none() && self.blocks.contains_kind(Kind::Input) {
            return Err(ValidationErrorKind::MissingField("submit").at(Kind::Modal));
        }
        validate_text_field(
            Kind::Modal,
            "submit",
            self.submit.as_ref(),
            false,
            Some(MAX_TITLE),
            inner,
        )?;
        validate_text_field(
            Kind::Modal,
            "close",
            self.close.as_ref(),
            false,
            Some(MAX_TITLE),
            inner,
        )
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        out.node_optional("title", self.title.as_ref())?;
        out.node_optional("submit", self.submit.as_ref())?;
        out.node_optional("close", self.close.as_ref())?;
        if self.clear_on_close {
            out.field("clear_on_close", true);
        }
        if self.notify_on_close {
            out.field("notify_on_close", true);
        }
        self.view.write(out);
        self.blocks.write(out)
    }
}

impl Hydrate for Modal {
    const KIND: Kind = Kind::Modal;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.title = data.use_node("title")?;
        self.submit = data.use_node("submit")?;
        self.close = data.use_node("close")?;
        self.clear_on_close = data.use_bool("clear_on_close")?.unwrap_or_default();
        self.notify_on_close = data.use_bool("notify_on_close")?.unwrap_or_default();
        self.view.hydrate(data)?;
        self.blocks.hydrate(data)
    }
}

/// A `home` tab view.
#[derive(Debug, Clone, PartialEq)]
pub struct AppHome {
    pub view: ViewFields,
    pub blocks: BlockList,
    pub extra: Extra,
}

impl Default for AppHome {
    fn default() -> Self {
        Self {
            view: ViewFields::default(),
            blocks: BlockList::new(HOME_RULES),
            extra: Extra::default(),
        }
    }
}

impl AppHome {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HasBlocks for AppHome {
    fn block_list(&mut self) -> &mut BlockList {
        &mut self.blocks
    }
}

impl HasViewFields for AppHome {
    fn view_fields(&mut self) -> &mut ViewFields {
        &mut self.view
    }
}

impl Node for AppHome {
    fn kind(&self) -> Kind {
        Kind::AppHome
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        self.blocks.validate(Kind::AppHome, cx.enter(Kind::AppHome))
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        self.view.write(out);
        self.blocks.write(out)
    }
}

impl Hydrate for AppHome {
    const KIND: Kind = Kind::AppHome;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.view.hydrate(data)?;
        self.blocks.hydrate(data)
    }
}
