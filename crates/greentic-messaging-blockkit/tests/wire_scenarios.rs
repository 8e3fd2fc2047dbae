use greentic_messaging_blockkit::{
    ActionsBlock, BlockElement, BlockKitError, ButtonElement, ChannelsSelectElement, Confirmation,
    ContextBlock, ConversationsSelectElement, DatePickerElement, DividerBlock, Document,
    ExternalSelectElement, ImageBlock, ImageElement, MarkdownText, OptionGroup, OverflowElement,
    PlainText, SectionAccessory, SectionBlock, SelectOption, StaticSelectElement, UserElement,
    UsersSelectElement,
};
use serde_json::{Value, json};

fn encode<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).expect("encode")
}

fn confirm() -> Confirmation {
    Confirmation::new(
        MarkdownText::new("Really *archive*?", true),
        "Archive",
        "Do it",
        "Cancel",
    )
}

#[test]
fn plain_text_properties() {
    for (text, emoji) in [("", false), ("hi :smile:", true), ("  spaced  ", false)] {
        let value = encode(&PlainText::new(text, emoji));
        assert_eq!(value["type"], "plaintext");
        assert_eq!(value["text"], text);
        assert_eq!(value["emoji"], emoji);
    }
}

#[test]
fn markup_parse_follows_flag() {
    assert_eq!(encode(&MarkdownText::new("_x_", true))["parse"], "full");
    assert_eq!(encode(&MarkdownText::new("_x_", false))["parse"], "none");
}

#[test]
fn section_with_text_scenario() {
    assert_eq!(
        encode(&SectionBlock::with_text("Hello")),
        json!({"type": "section", "text": {"type": "plaintext", "text": "Hello", "emoji": true}})
    );
}

#[test]
fn divider_scenario() {
    assert_eq!(
        encode(&DividerBlock::new(Some("div1".into()))),
        json!({"type": "divider", "block_id": "div1"})
    );
}

#[test]
fn button_scenario() {
    let button = ButtonElement::new("Click", "act1", "val1");
    insta::assert_json_snapshot!(button, @r#"
    {
      "type": "button",
      "text": {
        "type": "plaintext",
        "text": "Click",
        "emoji": true
      },
      "action_id": "act1",
      "value": "val1"
    }
    "#);
}

#[test]
fn six_element_actions_block_is_rejected() {
    let elements = (0..6)
        .map(|idx| ButtonElement::new("Go", format!("go{idx}"), "go").into())
        .collect();
    assert_eq!(
        ActionsBlock::new(elements, None).unwrap_err(),
        BlockKitError::CardinalityExceeded {
            container: "actions block",
            limit: 5,
            actual: 6,
        }
    );
}

#[test]
fn markdown_element_scenario() {
    let element = BlockElement::from(MarkdownText::new("*bold*", false));
    assert_eq!(
        encode(&element),
        json!({"type": "mrkdwn", "text": "*bold*", "parse": "none"})
    );
}

#[test]
fn omit_empty_law() {
    let cases = [
        (encode(&DividerBlock::new(None)), vec!["block_id"]),
        (
            encode(&DatePickerElement::new("due", "v")),
            vec!["initial_date", "placeholder", "confirm"],
        ),
        (
            encode(&StaticSelectElement::new()),
            vec![
                "action_id",
                "placeholder",
                "confirm",
                "initial_option",
                "options",
                "option_groups",
            ],
        ),
        (
            encode(&ConversationsSelectElement::new()),
            vec![
                "action_id",
                "placeholder",
                "confirm",
                "initial_option",
                "min_query_length",
            ],
        ),
        (
            encode(&ExternalSelectElement::new()),
            vec!["initial_option", "min_query_length"],
        ),
        (encode(&ChannelsSelectElement::new()), vec!["initial_channel"]),
        (encode(&UsersSelectElement::new()), vec!["initial_user"]),
        (
            encode(&SelectOption::new("plain")),
            vec!["value", "url", "description"],
        ),
    ];
    for (value, absent) in cases {
        let object = value.as_object().expect("object");
        for key in absent {
            assert!(!object.contains_key(key), "{key} should be omitted from {value}");
            assert!(object.values().all(|field| !field.is_null()));
        }
    }
}

#[test]
fn section_embeddable_kinds_build_sections() {
    let accessories: Vec<SectionAccessory> = vec![
        ButtonElement::new("Open", "open", "1").into(),
        OverflowElement::new("more", vec![SelectOption::new("Edit")])
            .expect("one option")
            .into(),
        StaticSelectElement::new().into(),
        ExternalSelectElement::new().into(),
        ConversationsSelectElement::prompt("c", "Conversation").into(),
        ChannelsSelectElement::new().into(),
        UsersSelectElement::new().into(),
        ImageElement::new("https://img/logo.png", "logo").into(),
        DatePickerElement::new("due", "d").into(),
    ];
    for accessory in accessories {
        let kind = accessory.element_type();
        let section = SectionBlock::with_accessory("Pick one", accessory, None);
        assert_eq!(encode(&section)["accessory"]["type"], kind.as_str());
    }
}

#[test]
fn every_variant_round_trips() {
    let elements: Vec<BlockElement> = vec![
        ButtonElement::new("Docs", "docs", "open")
            .with_url("https://docs.example.com")
            .into(),
        DatePickerElement::new("due", "due")
            .with_initial_date("2024-01-31")
            .with_placeholder("Pick a date")
            .with_confirm(confirm())
            .into(),
        OverflowElement::new(
            "more",
            vec![
                SelectOption::new("Edit").with_value("edit"),
                SelectOption::new("Help")
                    .with_url("https://help.example.com")
                    .with_description("Opens the help centre"),
            ],
        )
        .expect("two options")
        .into(),
        ImageElement::new("https://img/logo.png", "logo").into(),
        PlainText::new("plain", false).into(),
        MarkdownText::new("*marked*", true).into(),
        UserElement::new("U123").into(),
        StaticSelectElement::new()
            .with_action_id("colour")
            .with_placeholder("Colour")
            .with_confirm(confirm())
            .with_initial_option(SelectOption::new("Red").with_value("red"))
            .with_options(vec![SelectOption::new("Red").with_value("red")])
            .and_then(|select| {
                let cool =
                    OptionGroup::new("Cool", vec![SelectOption::new("Blue").with_value("blue")])?;
                select.with_option_groups(vec![cool])
            })
            .expect("small lists")
            .into(),
        ExternalSelectElement::new()
            .with_action_id("search")
            .with_initial_option(SelectOption::new("First").with_value("1"))
            .with_min_query_length(3)
            .into(),
        UsersSelectElement::new().with_initial_user("U1").into(),
        ConversationsSelectElement::prompt("convo", "Conversation")
            .with_initial_option(SelectOption::new("General").with_value("C1"))
            .with_min_query_length(2)
            .into(),
        ChannelsSelectElement::new().with_initial_channel("C2").into(),
    ];

    for element in &elements {
        let decoded = BlockElement::from_value(encode(element)).expect("element decodes");
        assert_eq!(&decoded, element);
    }

    let doc = Document::new()
        .with_block(SectionBlock::with_text("Hello"))
        .with_block(DividerBlock::new(Some("div".into())))
        .with_block(SectionBlock::with_accessory(
            MarkdownText::new("*Status*", false),
            DatePickerElement::new("due", "due"),
            Some("status".into()),
        ))
        .with_block(
            ActionsBlock::new(elements[..5].to_vec(), Some("actions".into())).expect("five"),
        )
        .with_block(ImageBlock::new(
            "https://img/cat.png",
            "cat",
            PlainText::new("Bubsy", false),
            None,
        ))
        .with_block(
            ContextBlock::new(elements[2..].to_vec(), Some("context".into())).expect("ten"),
        );

    let value = doc.to_value().expect("encode");
    assert_eq!(Document::from_value(value).expect("decode"), doc);
}
