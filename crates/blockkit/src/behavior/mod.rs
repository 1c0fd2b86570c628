mod companion;
mod options;

pub use companion::{
    Companion, ConfirmSlot, FilterSlot, HasConfirm, HasPlaceholder, PlaceholderSlot, SlotPolicy,
};
pub use options::{HasOptionGroups, HasOptions, OptionGroups, OptionList, OptionsConfig};
