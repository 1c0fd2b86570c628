use chrono::{NaiveDate, NaiveTime};

use super::{hydrate_action_id, validate_action_id, write_action_id};
use crate::prelude_internal::*;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

fn check_format(
    owner: Kind,
    field: &'static str,
    value: Option<&str>,
    parse: impl Fn(&str) -> bool,
    expected: &str,
) -> Result<(), ValidationError> {
    match value {
        Some(value) if !parse(value) => Err(ValidationErrorKind::InvalidValue {
            field,
            reason: format!("{value:?} is not formatted as {expected}"),
        }
        .at(owner)),
        _ => Ok(()),
    }
}

/// A `datepicker` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatePicker {
    pub action_id: Option<String>,
    /// `YYYY-MM-DD`.
    pub initial_date: Option<String>,
    pub placeholder: Companion<PlaceholderSlot>,
    pub confirm: Companion<ConfirmSlot>,
    pub extra: Extra,
}

impl DatePicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }

    pub fn initial_date(mut self, date: NaiveDate) -> Self {
        self.initial_date = Some(date.format(DATE_FORMAT).to_string());
        self
    }
}

impl HasPlaceholder for DatePicker {
    fn placeholder_slot(&mut self) -> &mut Companion<PlaceholderSlot> {
        &mut self.placeholder
    }
}

impl HasConfirm for DatePicker {
    fn confirm_slot(&mut self) -> &mut Companion<ConfirmSlot> {
        &mut self.confirm
    }
}

impl Node for DatePicker {
    fn kind(&self) -> Kind {
        Kind::DatePicker
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        let inner = cx.enter(Kind::DatePicker);
        validate_action_id(Kind::DatePicker, self.action_id.as_deref())?;
        check_format(
            Kind::DatePicker,
            "initial_date",
            self.initial_date.as_deref(),
            |s| NaiveDate::parse_from_str(s, DATE_FORMAT).is_ok(),
            "YYYY-MM-DD",
        )?;
        self.placeholder.validate(Kind::DatePicker, inner)?;
        self.confirm.validate(Kind::DatePicker, inner)
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        write_action_id(out, self.action_id.as_deref());
        out.field_optional("initial_date", self.initial_date.as_deref());
        self.placeholder.write(out)?;
        self.confirm.write(out)
    }
}

impl Hydrate for DatePicker {
    const KIND: Kind = Kind::DatePicker;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.action_id = hydrate_action_id(data)?;
        self.initial_date = data.use_str("initial_date")?;
        self.placeholder.hydrate(data)?;
        self.confirm.hydrate(data)
    }
}

/// A `timepicker` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimePicker {
    pub action_id: Option<String>,
    /// `HH:MM`, 24-hour clock.
    pub initial_time: Option<String>,
    pub placeholder: Companion<PlaceholderSlot>,
    pub confirm: Companion<ConfirmSlot>,
    pub extra: Extra,
}

impl TimePicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }

    pub fn initial_time(mut self, time: NaiveTime) -> Self {
        self.initial_time = Some(time.format(TIME_FORMAT).to_string());
        self
    }
}

impl HasPlaceholder for TimePicker {
    fn placeholder_slot(&mut self) -> &mut Companion<PlaceholderSlot> {
        &mut self.placeholder
    }
}

impl HasConfirm for TimePicker {
    fn confirm_slot(&mut self) -> &mut Companion<ConfirmSlot> {
        &mut self.confirm
    }
}

impl Node for TimePicker {
    fn kind(&self) -> Kind {
        Kind::TimePicker
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        let inner = cx.enter(Kind::TimePicker);
        validate_action_id(Kind::TimePicker, self.action_id.as_deref())?;
        check_format(
            Kind::TimePicker,
            "initial_time",
            self.initial_time.as_deref(),
            |s| NaiveTime::parse_from_str(s, TIME_FORMAT).is_ok(),
            "HH:MM",
        )?;
        self.placeholder.validate(Kind::TimePicker, inner)?;
        self.confirm.validate(Kind::TimePicker, inner)
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        write_action_id(out, self.action_id.as_deref());
        out.field_optional("initial_time", self.initial_time.as_deref());
        self.placeholder.write(out)?;
        self.confirm.write(out)
    }
}

impl Hydrate for TimePicker {
    const KIND: Kind = Kind::TimePicker;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.action_id = hydrate_action_id(data)?;
        self.initial_time = data.use_str("initial_time")?;
        self.placeholder.hydrate(data)?;
        self.confirm.hydrate(data)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_initial_date_is_formatted() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let json = DatePicker::new()
            .action_id("due")
            .initial_date(date)
            .placeholder("Due date")
            .to_json()
            .unwrap();
        assert_eq!(json["initial_date"], json!("2024-03-07"));
        assert_eq!(json["placeholder"]["text"], json!("Due date"));
    }

    #[test]
    fn test_hydrated_bad_date_fails() {
        let err =
            DatePicker::from_value(json!({"type": "datepicker", "initial_date": "07/03/2024"}))
                .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError {
                node: Kind::DatePicker,
                kind: ValidationErrorKind::InvalidValue {
                    field: "initial_date",
                    ..
                },
            })
        ));
    }

    #[test]
    fn test_initial_time_round_trip() {
        let time = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
        let picker = TimePicker::new().initial_time(time);
        let json = picker.to_json().unwrap();
        assert_eq!(json["initial_time"], json!("09:05"));
        assert_eq!(TimePicker::from_value(json).unwrap(), picker);
    }

    #[test]
    fn test_bad_time_rejected() {
        let picker = TimePicker {
            initial_time: Some("25:00".to_string()),
            ..TimePicker::default()
        };
        assert!(picker.validate().is_err());
    }
}
