use barcode_svg::barcode::{encode_code128, encode_code39, SymbologyKind};
use barcode_svg::helper::{error_svg_string, generate, SVG_CONTENT_TYPE};
use barcode_svg::layout::Layout;
use barcode_svg::tables::{code39_pattern, CODE39_SENTINEL};

fn bar_count(svg: &str) -> usize {
    svg.matches("fill=\"#000000\"/>").count()
}

#[test]
fn numeric_code128_with_label() {
    let pattern = encode_code128("123456789");
    assert_eq!(pattern.len(), 123);
    let layout = Layout::compute(&pattern, 2, 100, true).unwrap();
    assert_eq!(layout.module_width(), 3);

    let response = generate("123456789", "CODE128", 2, 100, true);
    assert_eq!(response.status, 200);
    assert_eq!(response.content_type, SVG_CONTENT_TYPE);
    assert!(response.document.contains(">123456789</text>"));
    assert_eq!(bar_count(&response.document), pattern.as_str().matches('1').count());
}

#[test]
fn code39_hello() {
    let mut expected = String::from(CODE39_SENTINEL);
    for c in "HELLO".chars() {
        expected.push('0');
        expected.push_str(code39_pattern(c).unwrap());
    }
    expected.push_str(CODE39_SENTINEL);

    let pattern = SymbologyKind::from_name("CODE39").encode("HELLO");
    assert_eq!(pattern.as_str(), expected);
    assert_eq!(pattern.len(), 89);

    let response = generate("HELLO", "CODE39", 2, 100, true);
    assert_eq!(response.status, 200);
    assert_eq!(bar_count(&response.document), expected.matches('1').count());
}

#[test]
fn empty_value_without_label() {
    let response = generate("", "CODE128", 2, 100, false);
    assert_eq!(response.status, 200);
    assert!(!response.document.contains("<text"));
    assert!(response.document.contains("height=\"120\" viewBox="));
}

#[test]
fn unknown_format_falls_back_to_code128() {
    let fallback = generate("x", "QRCODE", 2, 100, true);
    let code128 = generate("x", "CODE128", 2, 100, true);
    assert_eq!(fallback.status, 200);
    assert_eq!(fallback, code128);
}

#[test]
fn rendering_failure_yields_error_document() {
    let response = generate("<x>", "CODE128", 2, 0, true);
    assert_eq!(response.status, 400);
    assert_eq!(response.content_type, SVG_CONTENT_TYPE);
    assert!(response.document.contains("width=\"450\" height=\"100\""));
    assert!(response.document.contains("fill=\"#FF0000\">Error: "));
    assert!(!response.document.contains("<x>"));
    assert_eq!(bar_count(&response.document), 0);
}

#[test]
fn error_message_is_escaped() {
    let document = error_svg_string("\"quoted\" & <tagged>").into_string();
    assert!(document.contains("Error: &quot;quoted&quot; &amp; &lt;tagged&gt;</text>"));
}

#[test]
fn identical_requests_give_identical_documents() {
    let first = generate("Same & same", "CODE39", 2, 100, true);
    let second = generate("Same & same", "CODE39", 2, 100, true);
    assert_eq!(first.document, second.document);
}

#[test]
fn code39_unsupported_only_is_two_sentinels() {
    let pattern = encode_code39("###");
    assert_eq!(pattern.len(), 24);
    assert_eq!(pattern.as_str(), format!("{0}{0}", CODE39_SENTINEL));
}
