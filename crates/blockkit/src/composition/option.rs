use crate::prelude_internal::*;

/// An `option` object, one entry of a menu or a choice group.
///
/// `description` is only accepted under checkboxes and radio buttons, `url`
/// only under an overflow menu. Both are checked against the containing kind
/// when there is one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionItem {
    pub text: Option<PlainText>,
    pub value: Option<String>,
    pub description: Option<PlainText>,
    pub url: Option<String>,
    pub extra: Extra,
}

impl OptionItem {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: Some(PlainText::new(text)),
            value: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn text(mut self, text: impl Into<PlainText>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn description(mut self, description: impl Into<PlainText>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    fn url_is_set(&self) -> bool {
        self.url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

impl Node for OptionItem {
    fn kind(&self) -> Kind {
        Kind::Option
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        let inner = cx.enter(Kind::Option);
        validate_text_field(Kind::Option, "text", self.text.as_ref(), true, Some(75), inner)?;

        let value = self
            .value
            .as_deref()
            .ok_or(ValidationErrorKind::MissingField("value").at(Kind::Option))?;
        validate_string("value", value, 1, Some(75)).map_err(|err| err.at(Kind::Option))?;

        if self.description.is_some() {
            validate_text_field(
                Kind::Option,
                "description",
                self.description.as_ref(),
                false,
                Some(75),
                inner,
            )?;
            if let Some(parent) = cx.parent()
                && !matches!(parent, Kind::Checkboxes | Kind::RadioButtons)
            {
                return Err(ValidationErrorKind::FieldNotAllowed {
                    field: "description",
                    allowed: "checkboxes and radio buttons",
                }
                .at(Kind::Option));
            }
        }

        if let Some(url) = self.url.as_deref().filter(|url| !url.is_empty()) {
            validate_string("url", url, 1, Some(3000)).map_err(|err| err.at(Kind::Option))?;
            if let Some(parent) = cx.parent()
                && parent != Kind::OverflowMenu
            {
                return Err(ValidationErrorKind::FieldNotAllowed {
                    field: "url",
                    allowed: "overflow menus",
                }
                .at(Kind::Option));
            }
        }
        Ok(())
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        out.node_optional("text", self.text.as_ref())?;
        out.field_optional("value", self.value.as_deref());
        out.node_optional("description", self.description.as_ref())?;
        if self.url_is_set() {
            out.field_optional("url", self.url.as_deref());
        }
        Ok(())
    }
}

impl Hydrate for OptionItem {
    const KIND: Kind = Kind::Option;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.text = data.use_node("text")?;
        self.value = data.use_str("value")?;
        self.description = data.use_node("description")?;
        self.url = data.use_str("url")?;
        Ok(())
    }
}

impl<T: Into<String>, V: Into<String>> From<(T, V)> for OptionItem {
    fn from((text, value): (T, V)) -> Self {
        OptionItem::new(text, value)
    }
}

/// An `option_group` object: a labelled run of options in a select menu.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionGroup {
    pub label: Option<PlainText>,
    pub options: OptionList,
    pub extra: Extra,
}

impl Default for OptionGroup {
    fn default() -> Self {
        Self {
            label: None,
            options: OptionList::new(OptionsConfig::new(1).max(100)),
            extra: Extra::default(),
        }
    }
}

impl OptionGroup {
    pub fn new<T, V>(label: impl Into<String>, options: impl IntoIterator<Item = (T, V)>) -> Self
    where
        T: Into<String>,
        V: Into<String>,
    {
        Self::default().label(label).options(options)
    }

    /// Group labels never render emoji.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(PlainText::new(label).emoji(false));
        self
    }
}

impl HasOptions for OptionGroup {
    fn option_list(&mut self) -> &mut OptionList {
        &mut self.options
    }
}

impl Node for OptionGroup {
    fn kind(&self) -> Kind {
        Kind::OptionGroup
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        let inner = cx.enter(Kind::OptionGroup);
        validate_text_field(
            Kind::OptionGroup,
            "label",
            self.label.as_ref(),
            true,
            Some(75),
            inner,
        )?;
        self.options.validate(Kind::OptionGroup, inner)
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        out.node_optional("label", self.label.as_ref())?;
        self.options.write_options(out)
    }
}

impl Hydrate for OptionGroup {
    const KIND: Kind = Kind::OptionGroup;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.label = data.use_node("label")?;
        self.options.hydrate_options(data)
    }
}
