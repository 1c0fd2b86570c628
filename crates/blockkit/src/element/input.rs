use serde_json::Value;

use super::{hydrate_action_id, validate_action_id, write_action_id};
use crate::composition::{DispatchActionConfig, TriggerAction};
use crate::error::HydrationError;
use crate::hydrate::shape_of;
use crate::prelude_internal::*;

/// Upper bound for `min_length` of a text input.
pub const MAX_MIN_LENGTH: u64 = 3000;

/// A `plain_text_input` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextInput {
    pub action_id: Option<String>,
    pub initial_value: Option<String>,
    pub multiline: Option<bool>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub dispatch_action_config: Option<DispatchActionConfig>,
    pub focus_on_load: Option<bool>,
    pub placeholder: Companion<PlaceholderSlot>,
    pub extra: Extra,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }

    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    pub fn multiline(mut self, multiline: bool) -> Self {
        self.multiline = Some(multiline);
        self
    }

    pub fn min_length(mut self, length: u64) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn max_length(mut self, length: u64) -> Self {
        self.max_length = Some(length);
        self
    }

    pub fn focus_on_load(mut self, focus: bool) -> Self {
        self.focus_on_load = Some(focus);
        self
    }

    pub fn dispatch_action_config(mut self, config: DispatchActionConfig) -> Self {
        self.dispatch_action_config = Some(config);
        self
    }

    /// Add a trigger, creating the dispatch config if needed.
    pub fn trigger_actions_on(mut self, action: TriggerAction) -> Self {
        let config = self.dispatch_action_config.take().unwrap_or_default();
        self.dispatch_action_config = Some(config.trigger_actions_on(action));
        self
    }
}

impl HasPlaceholder for TextInput {
    fn placeholder_slot(&mut self) -> &mut Companion<PlaceholderSlot> {
        &mut self.placeholder
    }
}

impl Node for TextInput {
    fn kind(&self) -> Kind {
        Kind::TextInput
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        let inner = cx.enter(Kind::TextInput);
        validate_action_id(Kind::TextInput, self.action_id.as_deref())?;
        self.placeholder.validate(Kind::TextInput, inner)?;
        if let Some(min) = self.min_length {
            if min > MAX_MIN_LENGTH {
                return Err(ValidationErrorKind::InvalidValue {
                    field: "min_length",
                    reason: format!("must not exceed {MAX_MIN_LENGTH}"),
                }
                .at(Kind::TextInput));
            }
            if let Some(max) = self.max_length
                && max <= min
            {
                return Err(ValidationErrorKind::InvalidValue {
                    field: "max_length",
                    reason: "must be greater than min_length".to_string(),
                }
                .at(Kind::TextInput));
            }
        }
        if self.max_length == Some(0) {
            return Err(ValidationErrorKind::InvalidValue {
                field: "max_length",
                reason: "must be at least 1".to_string(),
            }
            .at(Kind::TextInput));
        }
        if let Some(config) = &self.dispatch_action_config {
            config.validate_in(inner)?;
        }
        Ok(())
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        write_action_id(out, self.action_id.as_deref());
        self.placeholder.write(out)?;
        out.field_optional(
            "initial_value",
            self.initial_value.as_deref().filter(|v| !v.is_empty()),
        );
        out.field_optional("multiline", self.multiline);
        out.field_optional("min_length", self.min_length);
        out.field_optional("max_length", self.max_length);
        out.node_optional("dispatch_action_config", self.dispatch_action_config.as_ref())?;
        out.field_optional("focus_on_load", self.focus_on_load);
        Ok(())
    }
}

impl Hydrate for TextInput {
    const KIND: Kind = Kind::TextInput;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.action_id = hydrate_action_id(data)?;
        self.initial_value = data.use_str("initial_value")?;
        self.multiline = data.use_bool("multiline")?;
        self.min_length = data.use_u64("min_length")?;
        self.max_length = data.use_u64("max_length")?;
        self.placeholder.hydrate(data)?;
        self.dispatch_action_config = data.use_node("dispatch_action_config")?;
        self.focus_on_load = data.use_bool("focus_on_load")?;
        Ok(())
    }
}

/// A `number_input` element.
///
/// Values are kept in their textual form and always written as strings.
/// Without `is_decimal_allowed` every value must be an integer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberInput {
    pub action_id: Option<String>,
    pub is_decimal_allowed: bool,
    pub initial_value: Option<String>,
    pub min_value: Option<String>,
    pub max_value: Option<String>,
    pub dispatch_action_config: Option<DispatchActionConfig>,
    pub focus_on_load: Option<bool>,
    pub placeholder: Companion<PlaceholderSlot>,
    pub extra: Extra,
}

impl NumberInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }

    pub fn decimal_allowed(mut self, allowed: bool) -> Self {
        self.is_decimal_allowed = allowed;
        self
    }

    pub fn initial_value(mut self, value: impl ToString) -> Self {
        self.initial_value = Some(value.to_string());
        self
    }

    pub fn min_value(mut self, value: impl ToString) -> Self {
        self.min_value = Some(value.to_string());
        self
    }

    pub fn max_value(mut self, value: impl ToString) -> Self {
        self.max_value = Some(value.to_string());
        self
    }

    pub fn focus_on_load(mut self, focus: bool) -> Self {
        self.focus_on_load = Some(focus);
        self
    }

    pub fn dispatch_action_config(mut self, config: DispatchActionConfig) -> Self {
        self.dispatch_action_config = Some(config);
        self
    }

    fn number(&self, field: &'static str, value: Option<&str>) -> Result<Option<f64>, ValidationError> {
        let Some(value) = value else {
            return Ok(None);
        };
        let invalid = |reason: &str| {
            ValidationErrorKind::InvalidValue {
                field,
                reason: format!("{value:?} {reason}"),
            }
            .at(Kind::NumberInput)
        };
        if !self.is_decimal_allowed && value.parse::<i64>().is_err() {
            return Err(invalid("is not an integer"));
        }
        match value.parse::<f64>() {
            Ok(number) if number.is_finite() => Ok(Some(number)),
            _ => Err(invalid("is not a number")),
        }
    }
}

impl HasPlaceholder for NumberInput {
    fn placeholder_slot(&mut self) -> &mut Companion<PlaceholderSlot> {
        &mut self.placeholder
    }
}

impl Node for NumberInput {
    fn kind(&self) -> Kind {
        Kind::NumberInput
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        let inner = cx.enter(Kind::NumberInput);
        validate_action_id(Kind::NumberInput, self.action_id.as_deref())?;
        self.placeholder.validate(Kind::NumberInput, inner)?;

        let initial = self.number("initial_value", self.initial_value.as_deref())?;
        let min = self.number("min_value", self.min_value.as_deref())?;
        let max = self.number("max_value", self.max_value.as_deref())?;
        if let (Some(min), Some(max)) = (min, max)
            && min > max
        {
            return Err(ValidationErrorKind::InvalidValue {
                field: "max_value",
                reason: "must be greater than or equal to min_value".to_string(),
            }
            .at(Kind::NumberInput));
        }
        if let Some(initial) = initial {
            if max.is_some_and(|max| initial > max) {
                return Err(ValidationErrorKind::InvalidValue {
                    field: "initial_value",
                    reason: "must be less than or equal to max_value".to_string(),
                }
                .at(Kind::NumberInput));
            }
            if min.is_some_and(|min| initial < min) {
                return Err(ValidationErrorKind::InvalidValue {
                    field: "initial_value",
                    reason: "must be greater than or equal to min_value".to_string(),
                }
                .at(Kind::NumberInput));
            }
        }

        if let Some(config) = &self.dispatch_action_config {
            config.validate_in(inner)?;
        }
        Ok(())
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        write_action_id(out, self.action_id.as_deref());
        out.field("is_decimal_allowed", self.is_decimal_allowed);
        self.placeholder.write(out)?;
        out.field_optional("initial_value", self.initial_value.as_deref());
        out.field_optional("min_value", self.min_value.as_deref());
        out.field_optional("max_value", self.max_value.as_deref());
        out.node_optional("dispatch_action_config", self.dispatch_action_config.as_ref())?;
        out.field_optional("focus_on_load", self.focus_on_load);
        Ok(())
    }
}

/// Numbers may arrive as JSON numbers or numeric strings.
fn use_number(data: &mut HydrationData, key: &str) -> Result<Option<String>, HydrationError> {
    match data.use_value(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(HydrationError::UnexpectedShape {
            field: key.to_string(),
            expected: "a number or numeric string",
            found: shape_of(&other),
        }),
    }
}

impl Hydrate for NumberInput {
    const KIND: Kind = Kind::NumberInput;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.action_id = hydrate_action_id(data)?;
        self.is_decimal_allowed = data.use_bool("is_decimal_allowed")?.unwrap_or_default();
        self.placeholder.hydrate(data)?;
        self.initial_value = use_number(data, "initial_value")?;
        self.min_value = use_number(data, "min_value")?;
        self.max_value = use_number(data, "max_value")?;
        self.dispatch_action_config = data.use_node("dispatch_action_config")?;
        self.focus_on_load = data.use_bool("focus_on_load")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_multiline_stays_multiline() {
        let input = TextInput::from_value(json!({
            "type": "plain_text_input",
            "action_id": "notes",
            "multiline": true
        }))
        .unwrap();
        assert_eq!(input.multiline, Some(true));
        assert_eq!(input.initial_value, None);
    }

    #[test]
    fn test_text_input_length_bounds() {
        assert!(TextInput::new().min_length(10).max_length(10).validate().is_err());
        assert!(TextInput::new().min_length(3001).validate().is_err());
        assert!(TextInput::new().min_length(1).max_length(500).validate().is_ok());
    }

    #[test]
    fn test_text_input_dispatch_config() {
        let json = TextInput::new()
            .trigger_actions_on(TriggerAction::OnEnterPressed)
            .trigger_actions_on(TriggerAction::OnCharacterEntered)
            .to_json()
            .unwrap();
        assert_eq!(
            json["dispatch_action_config"],
            json!({"trigger_actions_on": ["on_enter_pressed", "on_character_entered"]})
        );
    }

    #[test]
    fn test_number_input_bounds_are_inclusive() {
        let input = NumberInput::new().min_value(1).max_value(10);
        assert!(input.clone().initial_value(1).validate().is_ok());
        assert!(input.clone().initial_value(10).validate().is_ok());
        assert!(input.clone().initial_value(0).validate().is_err());
        assert!(input.initial_value(11).validate().is_err());
    }

    #[test]
    fn test_number_input_min_above_max() {
        let err = NumberInput::new()
            .min_value(5)
            .max_value(4)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err.kind,
            ValidationErrorKind::InvalidValue {
                field: "max_value",
                ..
            }
        ));
    }

    #[test]
    fn test_number_input_decimals() {
        assert!(NumberInput::new().initial_value(2.5).validate().is_err());
        assert!(
            NumberInput::new()
                .decimal_allowed(true)
                .initial_value(2.5)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_number_input_writes_strings() {
        let json = NumberInput::new()
            .action_id("qty")
            .initial_value(3)
            .min_value(1)
            .to_json()
            .unwrap();
        assert_eq!(
            json,
            json!({
                "type": "number_input",
                "action_id": "qty",
                "is_decimal_allowed": false,
                "initial_value": "3",
                "min_value": "1"
            })
        );
    }

    #[test]
    fn test_number_input_accepts_numeric_json() {
        let input = NumberInput::from_value(json!({
            "type": "number_input",
            "is_decimal_allowed": false,
            "initial_value": 4,
            "max_value": "8"
        }))
        .unwrap();
        assert_eq!(input.initial_value.as_deref(), Some("4"));
        assert_eq!(input.max_value.as_deref(), Some("8"));
    }
}
