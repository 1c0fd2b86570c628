//! Elements presenting a fixed list of options.

use super::{hydrate_action_id, validate_action_id, write_action_id};
use crate::composition::OptionItem;
use crate::prelude_internal::*;

/// A `checkboxes` group. Up to ten options, any number initially checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkboxes {
    pub action_id: Option<String>,
    pub options: OptionList,
    pub confirm: Companion<ConfirmSlot>,
    pub extra: Extra,
}

impl Default for Checkboxes {
    fn default() -> Self {
        Self {
            action_id: None,
            options: OptionList::new(OptionsConfig::new(1).max(10).max_initial(10)),
            confirm: Companion::default(),
            extra: Extra::default(),
        }
    }
}

impl Checkboxes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }
}

impl HasOptions for Checkboxes {
    fn option_list(&mut self) -> &mut OptionList {
        &mut self.options
    }
}

impl HasConfirm for Checkboxes {
    fn confirm_slot(&mut self) -> &mut Companion<ConfirmSlot> {
        &mut self.confirm
    }
}

impl Node for Checkboxes {
    fn kind(&self) -> Kind {
        Kind::Checkboxes
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        let inner = cx.enter(Kind::Checkboxes);
        validate_action_id(Kind::Checkboxes, self.action_id.as_deref())?;
        self.options.validate(Kind::Checkboxes, inner)?;
        self.confirm.validate(Kind::Checkboxes, inner)
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        write_action_id(out, self.action_id.as_deref());
        self.options.write_options(out)?;
        self.options.write_initial(out)?;
        self.confirm.write(out)
    }
}

impl Hydrate for Checkboxes {
    const KIND: Kind = Kind::Checkboxes;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.action_id = hydrate_action_id(data)?;
        self.options.hydrate_options(data)?;
        self.options.hydrate_initial(data)?;
        self.confirm.hydrate(data)
    }
}

/// A `radio_buttons` group. Up to ten options, at most one initially selected.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioButtons {
    pub action_id: Option<String>,
    pub options: OptionList,
    pub confirm: Companion<ConfirmSlot>,
    pub extra: Extra,
}

impl Default for RadioButtons {
    fn default() -> Self {
        Self {
            action_id: None,
            options: OptionList::new(OptionsConfig::new(1).max(10).max_initial(1)),
            confirm: Companion::default(),
            extra: Extra::default(),
        }
    }
}

impl RadioButtons {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }
}

impl HasOptions for RadioButtons {
    fn option_list(&mut self) -> &mut OptionList {
        &mut self.options
    }
}

impl HasConfirm for RadioButtons {
    fn confirm_slot(&mut self) -> &mut Companion<ConfirmSlot> {
        &mut self.confirm
    }
}

impl Node for RadioButtons {
    fn kind(&self) -> Kind {
        Kind::RadioButtons
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        let inner = cx.enter(Kind::RadioButtons);
        validate_action_id(Kind::RadioButtons, self.action_id.as_deref())?;
        self.options.validate(Kind::RadioButtons, inner)?;
        self.confirm.validate(Kind::RadioButtons, inner)
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        write_action_id(out, self.action_id.as_deref());
        self.options.write_options(out)?;
        self.options.write_initial(out)?;
        self.confirm.write(out)
    }
}

impl Hydrate for RadioButtons {
    const KIND: Kind = Kind::RadioButtons;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.action_id = hydrate_action_id(data)?;
        self.options.hydrate_options(data)?;
        self.options.hydrate_initial(data)?;
        self.confirm.hydrate(data)
    }
}

/// An `overflow` menu. Two to five options, none selected initially.
#[derive(Debug, Clone, PartialEq)]
pub struct OverflowMenu {
    pub action_id: Option<String>,
    pub options: OptionList,
    pub confirm: Companion<ConfirmSlot>,
    pub extra: Extra,
}

impl Default for OverflowMenu {
    fn default() -> Self {
        Self {
            action_id: None,
            options: OptionList::new(OptionsConfig::new(2).max(5).max_initial(0)),
            confirm: Companion::default(),
            extra: Extra::default(),
        }
    }
}

impl OverflowMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }

    /// Add an option that opens `url` when picked.
    pub fn url_option(
        self,
        text: impl Into<String>,
        value: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        self.add_option(OptionItem::new(text, value).url(url), false)
    }
}

impl HasOptions for OverflowMenu {
    fn option_list(&mut self) -> &mut OptionList {
        &mut self.options
    }
}

impl HasConfirm for OverflowMenu {
    fn confirm_slot(&mut self) -> &mut Companion<ConfirmSlot> {
        &mut self.confirm
    }
}

impl Node for OverflowMenu {
    fn kind(&self) -> Kind {
        Kind::OverflowMenu
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        let inner = cx.enter(Kind::OverflowMenu);
        validate_action_id(Kind::OverflowMenu, self.action_id.as_deref())?;
        self.options.validate(Kind::OverflowMenu, inner)?;
        self.confirm.validate(Kind::OverflowMenu, inner)
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        write_action_id(out, self.action_id.as_deref());
        self.options.write_options(out)?;
        self.confirm.write(out)
    }
}

impl Hydrate for OverflowMenu {
    const KIND: Kind = Kind::OverflowMenu;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.action_id = hydrate_action_id(data)?;
        self.options.hydrate_options(data)?;
        self.confirm.hydrate(data)
    }
}
