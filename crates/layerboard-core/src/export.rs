//! JSON and HTML export.

use crate::element::{Element, ElementKind};
use kurbo::Size;
use serde::Serialize;

#[derive(Serialize)]
struct CanvasInfo {
    width: f64,
    height: f64,
}

#[derive(Serialize)]
struct JsonExport<'a> {
    canvas: CanvasInfo,
    elements: Vec<&'a Element>,
}

/// Pretty-printed `{ canvas, elements }` document.
pub fn export_json<'a>(
    elements: impl IntoIterator<Item = &'a Element>,
    canvas: Size,
) -> Result<String, serde_json::Error> {
    let export = JsonExport {
        canvas: CanvasInfo {
            width: canvas.width,
            height: canvas.height,
        },
        elements: elements.into_iter().collect(),
    };
    serde_json::to_string_pretty(&export)
}

/// Standalone HTML page reproducing the canvas with positioned `div`s.
pub fn export_html<'a>(elements: impl IntoIterator<Item = &'a Element>, canvas: Size) -> String {
    let mut body = String::new();
    for element in elements {
        body.push_str(&element_html(element));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8" />
  <title>Exported Design</title>
</head>
<body>
  <div style="position: relative; width: {}px; height: {}px; border: 1px solid #ccc;">
{}  </div>
</body>
</html>
"#,
        canvas.width, canvas.height, body
    )
}

fn element_html(el: &Element) -> String {
    let mut style = format!(
        "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px; transform: rotate({}deg); z-index: {};",
        el.x, el.y, el.width, el.height, el.rotation, el.z_index
    );
    match el.kind() {
        ElementKind::Rectangle => {
            let background = non_empty_or(&el.styles.background_color, "#ccc");
            style.push_str(&format!(
                " background: {}; border-radius: {}px;",
                escape_html(background),
                el.styles.border_radius
            ));
            format!("    <div style=\"{}\"></div>\n", style)
        }
        ElementKind::Text => {
            let color = non_empty_or(&el.styles.color, "#000");
            style.push_str(&format!(
                " color: {}; font-size: {}px; font-family: Arial, sans-serif;",
                escape_html(color),
                el.styles.font_size
            ));
            format!(
                "    <div style=\"{}\">{}</div>\n",
                style,
                escape_html(&el.text)
            )
        }
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Element> {
        let rect = Element::new(1, ElementKind::Rectangle, 0, 3);
        let mut text = Element::new(2, ElementKind::Text, 1, 2);
        text.text = "<b>Hi & bye</b>".to_string();
        text.rotation = 45.0;
        vec![rect, text]
    }

    #[test]
    fn test_json_export_shape() {
        let elements = sample();
        let json = export_json(&elements, Size::new(1200.0, 800.0)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["canvas"]["width"], 1200.0);
        assert_eq!(value["canvas"]["height"], 800.0);
        assert_eq!(value["elements"].as_array().unwrap().len(), 2);
        assert_eq!(value["elements"][1]["text"], "<b>Hi & bye</b>");
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_html_export_positions_and_escapes() {
        let elements = sample();
        let html = export_html(&elements, Size::new(1200.0, 800.0));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("width: 1200px; height: 800px;"));
        assert!(html.contains("left: 400px; top: 200px;"));
        assert!(html.contains("background: gray; border-radius: 0px;"));
        assert!(html.contains("color: black; font-size: 16px;"));
        assert!(html.contains("transform: rotate(45deg); z-index: 2;"));
        assert!(html.contains("font-family: Arial, sans-serif;"));
        assert!(html.contains("&lt;b&gt;Hi &amp; bye&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_empty_background_falls_back() {
        let mut rect = Element::new(1, ElementKind::Rectangle, 0, 1);
        rect.styles.background_color.clear();
        let html = export_html([&rect], Size::new(100.0, 100.0));
        assert!(html.contains("background: #ccc;"));
    }
}
