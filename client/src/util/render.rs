//! Pure rendering helpers for message bubbles.
//!
//! All user-supplied strings pass through [`escape_html`] before they are
//! interpolated into markup. This is a security contract, not cosmetics:
//! message bodies, reply previews and usernames arrive from other clients.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wire::ChatMessage;

/// Escape text for safe insertion into HTML.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Format a wall-clock reading on a 12-hour dial, e.g. `1:05 PM`.
#[must_use]
pub fn format_ampm(hours: u32, minutes: u32) -> String {
    let suffix = if hours >= 12 { "PM" } else { "AM" };
    let display = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{display}:{minutes:02} {suffix}")
}

/// Render the inner markup of one message bubble: optional reply context,
/// sender label, body, optional inline image, timestamp.
#[must_use]
pub fn message_html(message: &ChatMessage, time_label: &str) -> String {
    let mut html = String::new();

    if let Some(reply) = &message.reply_to {
        html.push_str("<div class=\"reply-context\"><em>Replying to <strong>");
        html.push_str(&escape_html(&reply.user));
        html.push_str("</strong>: ");
        html.push_str(&escape_html(&reply.text));
        html.push_str("</em></div>");
    }

    html.push_str("<strong>");
    html.push_str(&escape_html(&message.user));
    html.push_str("</strong>: ");
    if let Some(text) = &message.text {
        html.push_str(&escape_html(text));
    }

    if let Some(image) = &message.image {
        html.push_str("<br><img class=\"bubble-image\" src=\"");
        html.push_str(&escape_html(image));
        html.push_str("\" alt=\"\">");
    }

    html.push_str("<div class=\"timestamp\">");
    html.push_str(&escape_html(time_label));
    html.push_str("</div>");

    html
}

/// 12-hour label for a message's `time` field in the viewer's local zone,
/// falling back to the render-time clock when absent or unparseable.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn local_time_label(time: Option<&str>) -> String {
    let parsed = time.map(|t| js_sys::Date::new(&wasm_bindgen::JsValue::from_str(t)));
    let date = match parsed {
        Some(d) if !d.get_time().is_nan() => d,
        _ => js_sys::Date::new_0(),
    };
    format_ampm(date.get_hours(), date.get_minutes())
}

#[cfg(not(feature = "hydrate"))]
#[must_use]
pub fn local_time_label(_time: Option<&str>) -> String {
    String::new()
}
