mod confirm;
mod dispatch;
mod filter;
mod option;
pub mod text;

pub use confirm::Confirm;
pub use dispatch::{DispatchActionConfig, TriggerAction};
pub use filter::{ConversationType, Filter};
pub use option::{OptionGroup, OptionItem};
pub use text::{MrkdwnText, PlainText, Text, TextContent};
