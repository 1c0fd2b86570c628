use super::{hydrate_block_id, validate_block_id, write_block_id};
use crate::prelude_internal::*;

/// Source assumed when none is given.
pub const DEFAULT_FILE_SOURCE: &str = "remote";

/// A `file` block, showing a remote file by its external id.
///
/// Only messages accept it.
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    pub block_id: Option<String>,
    pub external_id: Option<String>,
    pub source: String,
    pub extra: Extra,
}

impl Default for File {
    fn default() -> Self {
        Self {
            block_id: None,
            external_id: None,
            source: DEFAULT_FILE_SOURCE.to_string(),
            extra: Extra::default(),
        }
    }
}

impl File {
    pub fn new(external_id: impl Into<String>) -> Self {
        Self::default().external_id(external_id)
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}

impl Node for File {
    fn kind(&self) -> Kind {
        Kind::File
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, _cx: Context<'_>) -> Result<(), ValidationError> {
        validate_block_id(Kind::File, self.block_id.as_deref())?;
        if self.external_id.as_deref().is_none_or(str::is_empty) {
            return Err(ValidationErrorKind::MissingField("external_id").at(Kind::File));
        }
        if self.source.is_empty() {
            return Err(ValidationErrorKind::MissingField("source").at(Kind::File));
        }
        Ok(())
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        write_block_id(out, self.block_id.as_deref());
        out.field_optional("external_id", self.external_id.as_deref());
        out.field("source", self.source.as_str());
        Ok(())
    }
}

impl Hydrate for File {
    const KIND: Kind = Kind::File;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.block_id = hydrate_block_id(data)?;
        self.external_id = data.use_str("external_id")?;
        if let Some(source) = data.use_str("source")? {
            self.source = source;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_output_defaults_to_remote_source() {
        assert_eq!(
            File::new("ABCD1").block_id("report").to_json().unwrap(),
            json!({
                "type": "file",
                "block_id": "report",
                "external_id": "ABCD1",
                "source": "remote"
            })
        );
    }

    #[test]
    fn test_external_id_is_required() {
        assert_eq!(
            File::default().validate().unwrap_err(),
            ValidationErrorKind::MissingField("external_id").at(Kind::File)
        );
        assert_eq!(
            File::new("ABCD1").source("").validate().unwrap_err(),
            ValidationErrorKind::MissingField("source").at(Kind::File)
        );
    }

    #[test]
    fn test_round_trip_keeps_source() {
        let input = json!({"type": "file", "external_id": "ABCD1", "source": "remote"});
        let file = File::from_value(input.clone()).unwrap();
        assert_eq!(file.external_id.as_deref(), Some("ABCD1"));
        assert_eq!(file.to_json().unwrap(), input);

        let implied = File::from_value(json!({"type": "file", "external_id": "ABCD1"})).unwrap();
        assert_eq!(implied.source, DEFAULT_FILE_SOURCE);
    }
}
