use blockkit::prelude::*;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn survey_modal() -> Modal {
    Modal::new("Team survey")
        .submit("Send")
        .close("Cancel")
        .callback_id("survey")
        .private_metadata("round=3")
        .header("How was the week?")
        .block(
            Section::new()
                .mrkdwn("*Pick a mood*")
                .accessory(
                    StaticSelect::new()
                        .action_id("mood")
                        .placeholder("Mood")
                        .options([("Great", "great"), ("Fine", "fine"), ("Meh", "meh")]),
                ),
        )
        .block(
            InputBlock::new(
                "Highlights",
                TextInput::new()
                    .action_id("highlights")
                    .multiline(true)
                    .max_length(500),
            )
            .hint("Anything worth sharing"),
        )
        .block(
            InputBlock::new(
                "Follow-up date",
                DatePicker::new()
                    .action_id("follow_up")
                    .initial_date(NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()),
            )
            .optional(true),
        )
        .block(
            InputBlock::new(
                "Topics",
                Checkboxes::new()
                    .action_id("topics")
                    .option("Hiring", "hiring", true)
                    .option("Roadmap", "roadmap", false),
            ),
        )
        .divider()
        .context("Answers are anonymous")
}

fn release_message() -> Message {
    Message::new()
        .in_channel()
        .text("Release 1.4 is out")
        .block(
            Section::new()
                .mrkdwn("*Release 1.4*")
                .fields(["*Owner*\nplatform", "*Status*\nshipped"]),
        )
        .block(
            Actions::new()
                .block_id("release_actions")
                .element(
                    Button::new("Approve")
                        .action_id("approve")
                        .value("1.4")
                        .primary()
                        .confirm("Sure?", "Approve the release?"),
                )
                .element(
                    OverflowMenu::new()
                        .action_id("more")
                        .option("Rollback", "rollback", false)
                        .url_option("Changelog", "changelog", "https://example.com/changes"),
                )
                .element(
                    ConversationsSelect::new()
                        .action_id("notify")
                        .placeholder("Notify")
                        .filter(Filter::new().exclude_bot_users(true)),
                ),
        )
        .block(
            Image::new("https://example.com/chart.png", "Adoption chart")
                .title("Adoption")
                .block_id("chart"),
        )
}

fn assert_round_trip<T: Node + Parse>(node: &T) -> Value {
    let first = node.to_json().unwrap();
    let parsed = T::from_value(first.clone()).unwrap();
    let second = parsed.to_json().unwrap();
    assert_eq!(first, second);
    first
}

#[test]
fn test_modal_round_trip() {
    let json = assert_round_trip(&survey_modal());
    assert_eq!(json["type"], json!("modal"));
    assert_eq!(json["blocks"].as_array().unwrap().len(), 7);
    assert_eq!(
        json["blocks"][3]["element"]["initial_date"],
        json!("2024-05-17")
    );
    assert_eq!(
        json["blocks"][4]["element"]["initial_options"][0]["value"],
        json!("hiring")
    );
}

#[test]
fn test_message_round_trip() {
    let json = assert_round_trip(&release_message());
    assert!(json.get("type").is_none());
    assert_eq!(json["response_type"], json!("in_channel"));
    assert_eq!(
        json["blocks"][1]["elements"][1]["options"][1]["url"],
        json!("https://example.com/changes")
    );
    assert_eq!(json["blocks"][2]["block_id"], json!("chart"));
}

#[test]
fn test_round_trip_through_strings() {
    let message = release_message();
    let text = message.to_json_string(true).unwrap();
    let back = Message::from_json_str(&text).unwrap();
    assert_eq!(back.to_json().unwrap(), message.to_json().unwrap());
}

#[test]
fn test_surface_union_round_trip() {
    let json = survey_modal().to_json().unwrap();
    let surface = Surface::from_value(json.clone()).unwrap();
    assert_eq!(surface.kind(), Kind::Modal);
    assert_eq!(surface.to_json().unwrap(), json);
}

#[test]
fn test_confirm_scenario() {
    let input = json!({
        "type": "confirm",
        "title": {"type": "plain_text", "text": "Sure?"},
        "text": {"type": "mrkdwn", "text": "Proceed?"},
        "confirm": {"type": "plain_text", "text": "OK"},
        "deny": {"type": "plain_text", "text": "Cancel"}
    });
    let confirm = Confirm::from_value(input.clone()).unwrap();
    assert!(confirm.validate().is_ok());
    assert_eq!(confirm.to_json().unwrap(), input);
}

#[test]
fn test_extras_survive_round_trip() {
    let input = json!({
        "type": "section",
        "block_id": "intro",
        "unfurl": {"mode": "compact"},
        "text": {"type": "mrkdwn", "text": "Hi", "x_rendered": false},
        "accessory": {
            "type": "button",
            "text": {"type": "plain_text", "text": "Open"},
            "action_id": "open",
            "accessibility_label": "Open the dashboard"
        },
        "priority": 3
    });
    let section = Section::from_value(input.clone()).unwrap();
    let output = section.to_json().unwrap();
    assert_eq!(output, input);
    assert_eq!(section.extra().len(), 2);
}

#[test]
fn test_builder_extras_are_written() {
    let json = Divider::new()
        .with_extra("note", json!({"internal": true}))
        .with_extra_node("badge", PlainText::new("New"))
        .to_json()
        .unwrap();
    assert_eq!(
        json,
        json!({
            "type": "divider",
            "note": {"internal": true},
            "badge": {"type": "plain_text", "text": "New"}
        })
    );
}

#[test]
fn test_config_applies_to_nested_text() {
    let config = Config::new().default_emoji(Some(true));
    let json = Header::new("Launch")
        .serialize_with(&config)
        .map(Value::Object)
        .unwrap();
    assert_eq!(json["text"]["emoji"], json!(true));
}

#[test]
fn test_overflow_option_keeps_url_and_description() {
    let option = OptionItem::from_value(json!({
        "text": {"type": "plain_text", "text": "Docs"},
        "value": "docs",
        "description": {"type": "plain_text", "text": "Read the docs"},
        "url": "https://example.com/docs"
    }))
    .unwrap();
    assert_eq!(option.url.as_deref(), Some("https://example.com/docs"));
    assert_eq!(
        option.description,
        Some(PlainText::new("Read the docs"))
    );
}

#[test]
fn test_text_input_keeps_multiline_flag() {
    let input = TextInput::from_value(json!({
        "type": "plain_text_input",
        "action_id": "notes",
        "multiline": true,
        "initial_value": "draft"
    }))
    .unwrap();
    assert_eq!(input.multiline, Some(true));
    assert_eq!(input.initial_value.as_deref(), Some("draft"));
}

#[test]
fn test_multi_menus_and_file_blocks_round_trip() {
    let message = Message::new()
        .text("Weekly export")
        .block(File::new("EXPORT-42").block_id("export"))
        .block(
            Section::new().mrkdwn("*Reviewers*").accessory(
                MultiUsersSelect::new()
                    .action_id("reviewers")
                    .placeholder("Pick reviewers")
                    .initial_users(["U1", "U2"]),
            ),
        );
    let json = assert_round_trip(&message);
    assert_eq!(
        json["blocks"][0],
        json!({"type": "file", "block_id": "export", "external_id": "EXPORT-42", "source": "remote"})
    );
    assert_eq!(json["blocks"][1]["accessory"]["type"], json!("multi_users_select"));

    let modal = Modal::new("Routing")
        .block(InputBlock::new(
            "Channels",
            MultiChannelsSelect::new()
                .action_id("channels")
                .placeholder("Channels")
                .max_selected_items(2),
        ))
        .block(InputBlock::new(
            "Conversations",
            MultiConversationsSelect::new()
                .action_id("conversations")
                .placeholder("Conversations")
                .filter(Filter::new().include(ConversationType::Private)),
        ))
        .block(InputBlock::new(
            "Tickets",
            MultiExternalSelect::new()
                .action_id("tickets")
                .placeholder("Tickets")
                .initial_options([("BUG-1", "1")]),
        ));
    let json = assert_round_trip(&modal);
    assert_eq!(
        json["blocks"][2]["element"]["type"],
        json!("multi_external_select")
    );
}

#[test]
fn test_file_blocks_are_limited_to_messages() {
    let err = Modal::new("Files")
        .block(File::new("EXPORT-42"))
        .validate()
        .unwrap_err();
    assert_eq!(
        err.kind,
        ValidationErrorKind::KindNotAllowed {
            child: Kind::File,
            slot: "blocks"
        }
    );
}
