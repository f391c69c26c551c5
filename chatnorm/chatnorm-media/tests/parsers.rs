use chatnorm_core::{
    AppMessage, ContactCard, Emoji, Image, Location, MediaMessage, MediaParseError, Video, Voice,
    type_code,
};
use chatnorm_media::MediaResolver;

fn resolve(type_code: i64, content: &str) -> Result<MediaMessage, MediaParseError> {
    MediaResolver::with_default_parsers().resolve(type_code, content)
}

#[test]
fn image_reads_md5_and_length() {
    let xml = r#"<?xml version="1.0"?>
<msg>
    <img aeskey="k" cdnthumburl="t" length="2048" md5="9e107d9d" hevc_mid_size="0" />
    <platform_signature></platform_signature>
</msg>"#;
    assert_eq!(
        resolve(type_code::IMAGE, xml).unwrap(),
        MediaMessage::Image(Image {
            md5: "9e107d9d".to_string(),
            length: 2048,
        })
    );
}

#[test]
fn image_without_img_element_fails() {
    let err = resolve(type_code::IMAGE, "<msg><other/></msg>").unwrap_err();
    assert!(matches!(
        err,
        MediaParseError::MissingElement { type_code: 3, .. }
    ));
}

#[test]
fn garbled_numbers_default_to_zero() {
    let xml = r#"<msg><img md5="abc" length=""/></msg>"#;
    assert_eq!(
        resolve(type_code::IMAGE, xml).unwrap(),
        MediaMessage::Image(Image {
            md5: "abc".to_string(),
            length: 0,
        })
    );
}

#[test]
fn content_without_markup_is_malformed() {
    let err = resolve(type_code::IMAGE, "[图片]").unwrap_err();
    assert!(matches!(err, MediaParseError::Malformed { .. }));
}

#[test]
fn truncated_markup_is_malformed() {
    let err = resolve(type_code::VIDEO, r#"<msg><videomsg md5="a""#).unwrap_err();
    assert!(matches!(err, MediaParseError::Malformed { .. }));
}

#[test]
fn sender_prefix_before_markup_is_skipped() {
    let content = "wxid_bob:\n<msg><voicemsg voicelength=\"2930\" clientmsgid=\"c1\"/></msg>";
    assert_eq!(
        resolve(type_code::VOICE, content).unwrap(),
        MediaMessage::Voice(Voice {
            duration_ms: 2930,
            client_msg_id: "c1".to_string(),
        })
    );
}

#[test]
fn video_leaves_path_unresolved() {
    let xml = r#"<msg><videomsg length="1000" playlength="12" md5="v5" cdnvideourl="u"/></msg>"#;
    assert_eq!(
        resolve(type_code::VIDEO, xml).unwrap(),
        MediaMessage::Video(Video {
            md5: "v5".to_string(),
            play_length: 12,
            path: None,
        })
    );
}

#[test]
fn emoji_unescapes_cdn_url() {
    let xml = r#"<msg><emoji md5="e1" cdnurl="http://cdn.example/a?m=1&amp;f=2"/></msg>"#;
    assert_eq!(
        resolve(type_code::EMOJI, xml).unwrap(),
        MediaMessage::Emoji(Emoji {
            md5: "e1".to_string(),
            cdn_url: "http://cdn.example/a?m=1&f=2".to_string(),
        })
    );
}

#[test]
fn contact_card_reads_root_attributes() {
    let xml = r#"<msg bigheadimgurl="" username="wxid_carol" nickname="Carol" sex="2"/>"#;
    assert_eq!(
        resolve(type_code::CONTACT_CARD, xml).unwrap(),
        MediaMessage::ContactCard(ContactCard {
            username: "wxid_carol".to_string(),
            nickname: "Carol".to_string(),
        })
    );
}

#[test]
fn contact_card_requires_username() {
    let err = resolve(type_code::CONTACT_CARD, r#"<msg nickname="Carol"/>"#).unwrap_err();
    assert!(matches!(err, MediaParseError::MissingElement { .. }));
}

#[test]
fn location_reads_coordinates() {
    let xml = r#"<msg><location x="39.9042" y="116.4074" scale="16" label="Dongcheng" poiname="Palace Museum"/></msg>"#;
    assert_eq!(
        resolve(type_code::LOCATION, xml).unwrap(),
        MediaMessage::Location(Location {
            latitude: 39.9042,
            longitude: 116.4074,
            label: "Dongcheng".to_string(),
            poi_name: "Palace Museum".to_string(),
        })
    );
}

#[test]
fn app_link() {
    let xml = r#"<msg>
    <appmsg appid="" sdkver="0">
        <title>Release notes</title>
        <des><![CDATA[What changed in 2.0]]></des>
        <type>5</type>
        <url>https://example.com/notes?a=1&amp;b=2</url>
        <appattach><totallen>0</totallen></appattach>
    </appmsg>
    <fromusername>wxid_alice</fromusername>
</msg>"#;
    assert_eq!(
        resolve(type_code::APP, xml).unwrap(),
        MediaMessage::App(AppMessage {
            app_type: 5,
            title: "Release notes".to_string(),
            description: "What changed in 2.0".to_string(),
            url: "https://example.com/notes?a=1&b=2".to_string(),
            ..Default::default()
        })
    );
}

#[test]
fn app_file_reads_attachment() {
    let xml = r#"<msg><appmsg><title>report.pdf</title><type>6</type>
<appattach><totallen>1024</totallen><fileext>pdf</fileext></appattach>
<md5>f00d</md5></appmsg></msg>"#;
    let MediaMessage::App(app) = resolve(type_code::APP, xml).unwrap() else {
        panic!("expected app message");
    };
    assert_eq!(app.app_type, 6);
    assert_eq!(app.file_ext, "pdf");
    assert_eq!(app.md5, "f00d");
}

#[test]
fn app_quote_summarizes_referenced_message() {
    let xml = r#"<msg><appmsg><title>sounds good</title><type>57</type>
<refermsg><type>1</type><displayname>Bob</displayname><content>lunch at noon?</content></refermsg>
</appmsg></msg>"#;
    let MediaMessage::App(app) = resolve(type_code::APP, xml).unwrap() else {
        panic!("expected app message");
    };
    assert_eq!(app.refer.as_deref(), Some("Bob: lunch at noon?"));

    let image_quote = r#"<msg><appmsg><title>nice</title><type>57</type>
<refermsg><type>3</type><displayname>Bob</displayname><content>&lt;msg&gt;&lt;img/&gt;&lt;/msg&gt;</content></refermsg>
</appmsg></msg>"#;
    let MediaMessage::App(app) = resolve(type_code::APP, image_quote).unwrap() else {
        panic!("expected app message");
    };
    assert_eq!(app.refer.as_deref(), Some("Bob: [媒体]"));
}

#[test]
fn app_without_appmsg_fails() {
    assert!(resolve(type_code::APP, "<msg><fromusername>x</fromusername></msg>").is_err());
}

#[test]
fn voip_summary() {
    let xml = r#"<voipmsg type="VoIPBubbleMsg"><VoIPBubbleMsg><msg><![CDATA[通话时长 00:42]]></msg><room_type>1</room_type></VoIPBubbleMsg></voipmsg>"#;
    assert_eq!(
        resolve(type_code::VOIP, xml).unwrap(),
        MediaMessage::VoipCall {
            summary: "通话时长 00:42".to_string()
        }
    );
}

#[test]
fn system_notice_is_plain_text() {
    assert_eq!(
        resolve(type_code::SYSTEM, " You joined the group chat ").unwrap(),
        MediaMessage::System {
            text: "You joined the group chat".to_string()
        }
    );
    assert!(resolve(type_code::SYSTEM, "   ").is_err());
}

#[test]
fn revoke_reads_replacement_text() {
    let xml = r#"<sysmsg type="revokemsg"><revokemsg><session>wxid_bob</session><msgid>1</msgid><replacemsg><![CDATA["Bob" recalled a message]]></replacemsg></revokemsg></sysmsg>"#;
    assert_eq!(
        resolve(type_code::REVOKE, xml).unwrap(),
        MediaMessage::Revoke {
            text: "\"Bob\" recalled a message".to_string()
        }
    );
}
