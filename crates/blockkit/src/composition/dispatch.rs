use crate::prelude_internal::*;

/// Interaction that makes a text input dispatch a block action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerAction {
    OnEnterPressed,
    OnCharacterEntered,
}

impl TriggerAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            TriggerAction::OnEnterPressed => "on_enter_pressed",
            TriggerAction::OnCharacterEntered => "on_character_entered",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "on_enter_pressed" => Some(TriggerAction::OnEnterPressed),
            "on_character_entered" => Some(TriggerAction::OnCharacterEntered),
            _ => None,
        }
    }
}

/// A `dispatch_action_config` object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchActionConfig {
    pub trigger_actions_on: Vec<TriggerAction>,
    pub extra: Extra,
}

impl DispatchActionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger_actions_on(mut self, action: TriggerAction) -> Self {
        self.trigger_actions_on.push(action);
        self
    }

    pub fn on_enter_pressed(self) -> Self {
        self.trigger_actions_on(TriggerAction::OnEnterPressed)
    }

    pub fn on_character_entered(self) -> Self {
        self.trigger_actions_on(TriggerAction::OnCharacterEntered)
    }
}

impl Node for DispatchActionConfig {
    fn kind(&self) -> Kind {
        Kind::DispatchActionConfig
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, _cx: Context<'_>) -> Result<(), ValidationError> {
        if self.trigger_actions_on.is_empty() {
            return Err(ValidationErrorKind::TooFew {
                what: "trigger_actions_on",
                min: 1,
            }
            .at(Kind::DispatchActionConfig));
        }
        Ok(())
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        let actions: Vec<&str> = self
            .trigger_actions_on
            .iter()
            .map(|action| action.as_str())
            .collect();
        out.field("trigger_actions_on", actions);
        Ok(())
    }
}

impl Hydrate for DispatchActionConfig {
    const KIND: Kind = Kind::DispatchActionConfig;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.trigger_actions_on = data.use_enums("trigger_actions_on", TriggerAction::from_name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::HydrationError;

    #[test]
    fn test_requires_a_trigger() {
        assert!(DispatchActionConfig::new().validate().is_err());
        let json = DispatchActionConfig::new()
            .on_enter_pressed()
            .to_json()
            .unwrap();
        assert_eq!(json, json!({"trigger_actions_on": ["on_enter_pressed"]}));
    }

    #[test]
    fn test_unknown_trigger_fails_hydration() {
        let err = DispatchActionConfig::from_value(json!({"trigger_actions_on": ["on_blur"]}))
            .unwrap_err();
        assert_eq!(
            err,
            Error::Hydration(HydrationError::UnsupportedValue {
                field: "trigger_actions_on".to_string(),
                value: "on_blur".to_string(),
            })
        );
    }
}
