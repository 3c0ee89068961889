use super::*;
use wire::ReplyRef;

fn message(user: &str, text: Option<&str>) -> ChatMessage {
    ChatMessage {
        user: user.to_owned(),
        text: text.map(ToOwned::to_owned),
        time: None,
        image: None,
        reply_to: None,
    }
}

// =============================================================
// escape_html
// =============================================================

#[test]
fn escape_html_covers_all_five_dangerous_characters() {
    assert_eq!(escape_html("&"), "&amp;");
    assert_eq!(escape_html("<"), "&lt;");
    assert_eq!(escape_html(">"), "&gt;");
    assert_eq!(escape_html("\""), "&quot;");
    assert_eq!(escape_html("'"), "&#039;");
}

#[test]
fn escape_html_neutralizes_a_script_payload() {
    let escaped = escape_html("<script>alert('x')</script>");
    assert_eq!(escaped, "&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;");
    assert!(!escaped.contains('<'));
    assert!(!escaped.contains('>'));
}

#[test]
fn escape_html_passes_plain_text_through() {
    assert_eq!(escape_html("hello, world"), "hello, world");
}

// =============================================================
// format_ampm
// =============================================================

#[test]
fn midnight_hours_render_as_twelve_am() {
    assert_eq!(format_ampm(0, 5), "12:05 AM");
}

#[test]
fn afternoon_hours_drop_the_twelve_offset() {
    assert_eq!(format_ampm(13, 0), "1:00 PM");
}

#[test]
fn noon_is_twelve_pm() {
    assert_eq!(format_ampm(12, 0), "12:00 PM");
}

#[test]
fn minutes_are_zero_padded() {
    assert_eq!(format_ampm(9, 7), "9:07 AM");
    assert_eq!(format_ampm(23, 59), "11:59 PM");
}

// =============================================================
// message_html
// =============================================================

#[test]
fn body_and_sender_are_escaped_in_bubble_markup() {
    let html = message_html(&message("<evil>", Some("a < b & c")), "1:00 PM");
    assert!(html.contains("<strong>&lt;evil&gt;</strong>"));
    assert!(html.contains("a &lt; b &amp; c"));
    assert!(!html.contains("<evil>"));
}

#[test]
fn reply_context_is_escaped_and_precedes_the_body() {
    let mut msg = message("alice", Some("sure"));
    msg.reply_to = Some(ReplyRef { user: "<bob>".to_owned(), text: "\"quoted\"".to_owned() });

    let html = message_html(&msg, "1:00 PM");
    let context_at = html.find("reply-context").expect("reply context present");
    let body_at = html.find("<strong>alice</strong>").expect("body present");
    assert!(context_at < body_at);
    assert!(html.contains("&lt;bob&gt;"));
    assert!(html.contains("&quot;quoted&quot;"));
}

#[test]
fn image_src_is_attribute_escaped() {
    let mut msg = message("alice", None);
    msg.image = Some("data:image/png;base64,AA\"onerror=\"x".to_owned());

    let html = message_html(&msg, "1:00 PM");
    assert!(html.contains("src=\"data:image/png;base64,AA&quot;onerror=&quot;x\""));
}

#[test]
fn timestamp_label_lands_in_the_timestamp_div() {
    let html = message_html(&message("alice", Some("hi")), "12:05 AM");
    assert!(html.contains("<div class=\"timestamp\">12:05 AM</div>"));
}

#[test]
fn text_only_message_has_no_image_tag() {
    let html = message_html(&message("alice", Some("hi")), "1:00 PM");
    assert!(!html.contains("<img"));
}
