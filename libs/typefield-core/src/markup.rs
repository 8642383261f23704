//! Host markup for the comparison area.

use crate::types::TypeAnswerNode;

/// Markup separating the typed side from the expected side.
pub const DELIMITER_HTML: &str = r#"<br><span id="typearrow">⇩</span><br>"#;

/// Render nodes as the inner HTML of the host's comparison area.
///
/// Each fragment becomes a `<span>` carrying its class name.
pub fn render_html(nodes: &[TypeAnswerNode]) -> String {
    let mut html = String::new();
    for node in nodes {
        match node {
            TypeAnswerNode::Fragment(fragment) => {
                html.push_str(r#"<span class=""#);
                html.push_str(fragment.class.as_class());
                html.push_str(r#"">"#);
                push_escaped(&mut html, &fragment.text);
                html.push_str("</span>");
            }
            TypeAnswerNode::Delimiter => html.push_str(DELIMITER_HTML),
        }
    }
    html
}

fn push_escaped(html: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => html.push_str("&amp;"),
            '<' => html.push_str("&lt;"),
            '>' => html.push_str("&gt;"),
            '"' => html.push_str("&quot;"),
            _ => html.push(ch),
        }
    }
}
