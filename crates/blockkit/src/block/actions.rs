use indexmap::IndexMap;

use super::{hydrate_block_id, validate_block_id, write_block_id};
use crate::element::Element;
use crate::prelude_internal::*;

const MAX_ELEMENTS: usize = 5;

/// An `actions` block: a row of up to five interactive elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Actions {
    pub block_id: Option<String>,
    pub elements: Vec<Element>,
    pub extra: Extra,
}

impl Actions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    pub fn element(mut self, element: impl Into<Element>) -> Self {
        self.elements.push(element.into());
        self
    }

    pub fn push(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }
}

/// Ids that occur more than once, in order of first occurrence.
fn duplicated_action_ids(elements: &[Element]) -> Vec<String> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for id in elements.iter().filter_map(Element::action_id) {
        *counts.entry(id).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(id, _)| id.to_string())
        .collect()
}

impl Node for Actions {
    fn kind(&self) -> Kind {
        Kind::Actions
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        let inner = cx.enter(Kind::Actions);
        validate_block_id(Kind::Actions, self.block_id.as_deref())?;
        if self.elements.is_empty() {
            return Err(ValidationErrorKind::TooFew {
                what: "elements",
                min: 1,
            }
            .at(Kind::Actions));
        }
        if self.elements.len() > MAX_ELEMENTS {
            return Err(ValidationErrorKind::TooMany {
                what: "elements",
                max: MAX_ELEMENTS,
            }
            .at(Kind::Actions));
        }
        for element in &self.elements {
            if !element.kind().is_action_element() {
                return Err(ValidationErrorKind::KindNotAllowed {
                    child: element.kind(),
                    slot: "elements",
                }
                .at(Kind::Actions));
            }
            element.validate_in(inner)?;
        }

        let duplicated = duplicated_action_ids(&self.elements);
        if !duplicated.is_empty() {
            return Err(ValidationErrorKind::Duplicated {
                field: "action_id",
                ids: duplicated,
            }
            .at(Kind::Actions));
        }
        Ok(())
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        write_block_id(out, self.block_id.as_deref());
        out.nodes("elements", &self.elements)
    }
}

impl Hydrate for Actions {
    const KIND: Kind = Kind::Actions;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.elements = data.use_nodes("elements")?;
        self.block_id = hydrate_block_id(data)?;
        Ok(())
    }
}
