use crate::block::{Actions, ContextBlock, Divider, File, Header, InputBlock, Section};
use crate::composition::{
    Confirm, DispatchActionConfig, Filter, MrkdwnText, OptionGroup, OptionItem, PlainText,
};
use crate::element::{
    Button, ChannelsSelect, Checkboxes, ConversationsSelect, DatePicker, ExternalSelect, Image,
    MultiChannelsSelect, MultiConversationsSelect, MultiExternalSelect, MultiStaticSelect,
    MultiUsersSelect, NumberInput, OverflowMenu, RadioButtons, StaticSelect, TextInput,
    TimePicker, UsersSelect,
};
use crate::surface::{AppHome, Message, Modal, WorkflowStep};
use crate::union::node_union;

node_union! {
    /// A node of any registered kind.
    ///
    /// Parsing requires a `type` discriminator, since no kind is implied.
    pub enum AnyNode as "node" {
        AppHome(AppHome),
        Message(Message),
        Modal(Modal),
        WorkflowStep(WorkflowStep),
        Actions(Actions),
        Context(ContextBlock),
        Divider(Divider),
        File(File),
        Header(Header),
        Image(Image),
        Input(InputBlock),
        Section(Section),
        Button(Button),
        Checkboxes(Checkboxes),
        DatePicker(DatePicker),
        NumberInput(NumberInput),
        OverflowMenu(OverflowMenu),
        RadioButtons(RadioButtons),
        TextInput(TextInput),
        TimePicker(TimePicker),
        ChannelsSelect(ChannelsSelect),
        ConversationsSelect(ConversationsSelect),
        ExternalSelect(ExternalSelect),
        MultiChannelsSelect(MultiChannelsSelect),
        MultiConversationsSelect(MultiConversationsSelect),
        MultiExternalSelect(MultiExternalSelect),
        MultiStaticSelect(MultiStaticSelect),
        MultiUsersSelect(MultiUsersSelect),
        StaticSelect(StaticSelect),
        UsersSelect(UsersSelect),
        Confirm(Confirm),
        DispatchActionConfig(DispatchActionConfig),
        Filter(Filter),
        MrkdwnText(MrkdwnText),
        Option(OptionItem),
        OptionGroup(OptionGroup),
        PlainText(PlainText),
    }
}
