//! Generic renderer for analyses the dashboard shows without a schema.

use serde_json::Value;

use crate::sections::{card, escape_html};

/// `None`, `null` and empty strings, arrays or objects render nothing.
pub fn render(title: &str, bag: Option<&Value>) -> Option<String> {
    let bag = bag?;
    if is_blank(bag) {
        return None;
    }
    let text = match bag {
        Value::String(text) => text.clone(),
        other => serde_json::to_string_pretty(other).ok()?,
    };
    let class = title.to_ascii_lowercase().replace(' ', "-");
    Some(card(
        &format!("bag {class}"),
        title,
        &format!("<pre>{}</pre>", escape_html(&text)),
    ))
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_bags_render_nothing() {
        assert_eq!(render("FAQs", None), None);
        for blank in [json!(null), json!({}), json!([]), json!("  ")] {
            assert_eq!(render("FAQs", Some(&blank)), None, "{blank}");
        }
    }

    #[test]
    fn populated_bag_is_pretty_and_escaped() {
        let bag = json!({ "question": "<b>why</b>?" });
        let html = render("People Also Ask", Some(&bag)).unwrap();
        assert!(html.contains(r#"class="card bag people-also-ask""#));
        assert!(html.contains("&lt;b&gt;why&lt;/b&gt;?"));
        assert!(html.contains("\n"));
    }
}
