use super::{hydrate_block_id, validate_block_id, write_block_id};
use crate::prelude_internal::*;

/// A `divider` block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Divider {
    pub block_id: Option<String>,
    pub extra: Extra,
}

impl Divider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }
}

impl Node for Divider {
    fn kind(&self) -> Kind {
        Kind::Divider
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, _cx: Context<'_>) -> Result<(), ValidationError> {
        validate_block_id(Kind::Divider, self.block_id.as_deref())
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        write_block_id(out, self.block_id.as_deref());
        Ok(())
    }
}

impl Hydrate for Divider {
    const KIND: Kind = Kind::Divider;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.block_id = hydrate_block_id(data)?;
        Ok(())
    }
}
