use chatnorm_lz4::{DecompressError, decompress, decompress_bytes};
use lz4_flex::block::compress;

const APP_XML: &str = "<msg><appmsg appid=\"\"><title>Weekly report</title><type>5</type>\
<url>https://example.com/r</url></appmsg></msg>";

#[test]
fn decompresses_block_to_text() {
    let compressed = compress(APP_XML.as_bytes());
    assert_eq!(decompress(&compressed).unwrap(), APP_XML);
}

#[test]
fn grows_budget_for_highly_compressible_input() {
    let text = "a".repeat(1_000);
    let compressed = compress(text.as_bytes());
    assert!(compressed.len() * 4 < text.len());
    assert_eq!(decompress(&compressed).unwrap(), text);
}

#[test]
fn trims_trailing_nul_padding() {
    let mut raw = b"<msg/>".to_vec();
    raw.extend_from_slice(&[0, 0, 0]);
    let compressed = compress(&raw);
    assert_eq!(decompress(&compressed).unwrap(), "<msg/>");
    assert_eq!(decompress_bytes(&compressed).unwrap(), raw);
}

#[test]
fn empty_input_fails() {
    assert!(matches!(decompress(&[]), Err(DecompressError::Empty)));
}

#[test]
fn truncated_block_fails() {
    // Token announces five literals but only two follow.
    let truncated = [0x50, b'a', b'b'];
    assert!(matches!(
        decompress(&truncated),
        Err(DecompressError::Malformed(_))
    ));
}

#[test]
fn garbage_input_fails() {
    // Token claims 15+ literals followed by a length byte that runs past the input.
    let garbage = [0xF0, 0xFF, 0xFF, 0xFF];
    assert!(decompress(&garbage).is_err());
}

#[test]
fn invalid_utf8_fails() {
    let compressed = compress(&[0xC3, 0x28, 0x41]);
    assert!(matches!(
        decompress(&compressed),
        Err(DecompressError::InvalidUtf8(_))
    ));
}
