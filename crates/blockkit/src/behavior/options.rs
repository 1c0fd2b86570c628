use crate::composition::{OptionGroup, OptionItem};
use crate::prelude_internal::*;

/// Count limits for an option list. Checked at validation time only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionsConfig {
    pub min: usize,
    pub max: Option<usize>,
    pub max_initial: Option<usize>,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self::new(1)
    }
}

impl OptionsConfig {
    pub const fn new(min: usize) -> Self {
        Self {
            min,
            max: None,
            max_initial: None,
        }
    }

    pub const fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    pub const fn max_initial(mut self, max_initial: usize) -> Self {
        self.max_initial = Some(max_initial);
        self
    }
}

/// Ordered options plus the subset selected initially.
///
/// Initial options are stored separately from `options`; they are expected to
/// repeat entries of `options` but this is not enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionList {
    pub options: Vec<OptionItem>,
    pub initial: Vec<OptionItem>,
    config: OptionsConfig,
}

impl Default for OptionList {
    fn default() -> Self {
        Self::new(OptionsConfig::default())
    }
}

impl OptionList {
    pub fn new(config: OptionsConfig) -> Self {
        Self {
            options: Vec::new(),
            initial: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> OptionsConfig {
        self.config
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn add_option(&mut self, option: OptionItem, is_initial: bool) {
        if is_initial {
            self.initial.push(option.clone());
        }
        self.options.push(option);
    }

    pub fn add_initial(&mut self, option: OptionItem) {
        self.initial.push(option);
    }

    /// Check counts, then each option, then the initial selection.
    ///
    /// `cx` is the context of the owner's children.
    pub fn validate(&self, owner: Kind, cx: Context<'_>) -> Result<(), ValidationError> {
        let min = self.config.min.max(1);
        if self.options.len() < min {
            return Err(ValidationErrorKind::TooFew {
                what: "options",
                min,
            }
            .at(owner));
        }
        if let Some(max) = self.config.max
            && self.options.len() > max
        {
            return Err(ValidationErrorKind::TooMany {
                what: "options",
                max,
            }
            .at(owner));
        }
        for option in &self.options {
            option.validate_in(cx)?;
        }
        self.validate_initial(owner, cx)
    }

    pub fn validate_initial(&self, owner: Kind, cx: Context<'_>) -> Result<(), ValidationError> {
        if let Some(max) = self.config.max_initial
            && self.initial.len() > max
        {
            return Err(ValidationErrorKind::TooMany {
                what: "initial_options",
                max,
            }
            .at(owner));
        }
        for option in &self.initial {
            option.validate_in(cx)?;
        }
        Ok(())
    }

    pub fn write_options(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        out.nodes("options", &self.options)
    }

    /// Writes `initial_option` when at most one may be selected, otherwise
    /// `initial_options`. Nothing when the selection is empty.
    pub fn write_initial(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        match self.initial.as_slice() {
            [] => Ok(()),
            [first, ..] if self.config.max_initial == Some(1) => out.node("initial_option", first),
            all => out.nodes("initial_options", all),
        }
    }

    pub fn hydrate_options(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.options.extend(data.use_nodes::<OptionItem>("options")?);
        Ok(())
    }

    /// Accepts both `initial_option` and `initial_options`.
    pub fn hydrate_initial(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        if let Some(option) = data.use_node::<OptionItem>("initial_option")? {
            self.initial.push(option);
        }
        self.initial
            .extend(data.use_nodes::<OptionItem>("initial_options")?);
        Ok(())
    }
}

/// Options or option groups, exactly one of them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OptionGroups {
    pub list: OptionList,
    pub groups: Vec<OptionGroup>,
}

impl OptionGroups {
    pub fn new(config: OptionsConfig) -> Self {
        Self {
            list: OptionList::new(config),
            groups: Vec::new(),
        }
    }

    pub fn validate(&self, owner: Kind, cx: Context<'_>) -> Result<(), ValidationError> {
        if self.list.is_empty() == self.groups.is_empty() {
            return Err(ValidationErrorKind::Exclusive {
                first: "options",
                second: "option_groups",
            }
            .at(owner));
        }
        if self.groups.is_empty() {
            self.list.validate(owner, cx)
        } else {
            for group in &self.groups {
                group.validate_in(cx)?;
            }
            self.list.validate_initial(owner, cx)
        }
    }

    pub fn write(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        if self.groups.is_empty() {
            self.list.write_options(out)?;
        } else {
            out.nodes("option_groups", &self.groups)?;
        }
        self.list.write_initial(out)
    }

    pub fn hydrate(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.groups
            .extend(data.use_nodes::<OptionGroup>("option_groups")?);
        self.list.hydrate_options(data)?;
        self.list.hydrate_initial(data)
    }
}

/// By-value option builders for nodes that own an [`OptionList`].
pub trait HasOptions: Sized {
    fn option_list(&mut self) -> &mut OptionList;

    fn add_option(mut self, option: OptionItem, is_initial: bool) -> Self {
        self.option_list().add_option(option, is_initial);
        self
    }

    fn add_options(mut self, options: impl IntoIterator<Item = OptionItem>) -> Self {
        let list = self.option_list();
        for option in options {
            list.add_option(option, false);
        }
        self
    }

    fn option(self, text: impl Into<String>, value: impl Into<String>, is_initial: bool) -> Self {
        self.add_option(OptionItem::new(text, value), is_initial)
    }

    /// Add `(text, value)` pairs.
    fn options<T, V>(self, pairs: impl IntoIterator<Item = (T, V)>) -> Self
    where
        T: Into<String>,
        V: Into<String>,
    {
        self.add_options(pairs.into_iter().map(OptionItem::from))
    }

    /// Add to the initial selection without adding to the options.
    fn initial_option(mut self, text: impl Into<String>, value: impl Into<String>) -> Self {
        self.option_list()
            .add_initial(OptionItem::new(text, value));
        self
    }

    fn initial_options<T, V>(mut self, pairs: impl IntoIterator<Item = (T, V)>) -> Self
    where
        T: Into<String>,
        V: Into<String>,
    {
        let list = self.option_list();
        for pair in pairs {
            list.add_initial(OptionItem::from(pair));
        }
        self
    }
}

/// By-value group builders for nodes that own [`OptionGroups`].
pub trait HasOptionGroups: HasOptions {
    fn option_groups(&mut self) -> &mut OptionGroups;

    fn add_option_group(mut self, group: OptionGroup) -> Self {
        self.option_groups().groups.push(group);
        self
    }

    fn option_group<T, V>(
        self,
        label: impl Into<String>,
        options: impl IntoIterator<Item = (T, V)>,
    ) -> Self
    where
        T: Into<String>,
        V: Into<String>,
    {
        self.add_option_group(OptionGroup::new(label, options))
    }
}
