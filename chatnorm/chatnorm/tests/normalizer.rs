
use chatnorm::{
    MediaMessage, MessageDarwinV3, MessageV3, MessageV4, Normalizer,
    core::{MediaParseError, MediaParser},
};
use test_helpers::*;

struct PatParser;

impl MediaParser for PatParser {
    fn type_code(&self) -> i64 {
        922_746_929
    }

    fn parse(&self, content: &str) -> Result<MediaMessage, MediaParseError> {
        Ok(MediaMessage::System {
            text: format!("[pat] {content}"),
        })
    }
}

#[test]
fn batch_preserves_input_order() {
    let rows: Vec<MessageV3> = (0..200)
        .map(|i| {
            let mut row = v3_row("alice", 1, &format!("m{i}"));
            row.sequence = i;
            row
        })
        .collect();

    let messages = Normalizer::new().normalize_batch(rows);

    assert_eq!(messages.len(), 200);
    for (i, msg) in messages.iter().enumerate() {
        assert_eq!(msg.sequence, i as i64);
        assert_eq!(msg.content, format!("m{i}"));
    }
}

#[test]
fn builder_registers_custom_parser() {
    let normalizer = Normalizer::builder()
        .with_default_parsers()
        .with_parser(Box::new(PatParser))
        .build();

    let msg = normalizer.normalize(v3_row("alice", 922_746_929, "bob"));
    assert_eq!(
        msg.media,
        Some(MediaMessage::System {
            text: "[pat] bob".to_string()
        })
    );
    assert!(normalizer.resolver().supports(3));
}

#[test]
fn empty_builder_resolves_nothing() {
    let normalizer = Normalizer::builder().build();
    let msg = normalizer.normalize(v3_row("alice", 3, r#"<msg><img md5="a"/></msg>"#));
    assert!(msg.media.is_none());
}

#[test]
fn v3_row_from_json_columns() {
    let json = r#"{
        "Sequence": 1700000000001,
        "CreateTime": 1700000000,
        "TalkerId": 3,
        "StrTalker": "7001@chatroom",
        "IsSender": 0,
        "Type": 1,
        "SubType": 0,
        "StrContent": "hi",
        "BytesExtra": [26, 7, 8, 1, 18, 3, 98, 111, 98]
    }"#;
    let row: MessageV3 = serde_json::from_str(json).unwrap();
    let msg = Normalizer::new().normalize(row);

    assert_eq!(msg.chat_room_sender, "bob");
    assert_eq!(msg.talker_id, 3);
    assert!(msg.compress_content.is_none());
}

#[test]
fn v4_and_darwin_rows_from_json() {
    let v4: MessageV4 = serde_json::from_str(
        r#"{"sort_seq": 5, "local_type": 1, "talker": "alice", "create_time": 1700000000, "message_content": "hey"}"#,
    )
    .unwrap();
    assert_eq!(Normalizer::new().normalize(v4).content, "hey");

    let darwin: MessageDarwinV3 = serde_json::from_str(
        r#"{"msgCreateTime": 1700000000, "msgContent": "yo", "messageType": 1, "mesDes": 0, "talker": "alice"}"#,
    )
    .unwrap();
    let msg = Normalizer::new().normalize(darwin);
    assert_eq!(msg.content, "yo");
    assert!(msg.is_sender);
}

#[test]
fn json_blob_matches_helper_encoding() {
    assert_eq!(
        bytes_extra(&[(1, "bob")]),
        vec![26, 7, 8, 1, 18, 3, 98, 111, 98]
    );
}
