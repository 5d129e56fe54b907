use crate::model::MetaPreview;
use crate::sections::{bands::Band, card, escape_html, pill};

const TITLE_RANGE: &str = "50-60";
const DESCRIPTION_RANGE: &str = "150-160";

pub fn render(meta: Option<&MetaPreview>) -> Option<String> {
    let meta = meta?;
    let google = &meta.google;
    let social = &meta.social;
    let counts = &meta.character_counts;

    let mut body = String::new();
    body.push_str(&format!(
        r#"<div class="serp-preview"><div class="serp-url">{}</div><div class="serp-title">{}</div><div class="serp-description">{}</div></div>"#,
        escape_html(&google.url_display),
        escape_html(&google.title),
        escape_html(&google.description),
    ));

    body.push_str(&format!(
        r#"<dl class="social-preview"><dt>Open Graph title</dt><dd>{}</dd><dt>Open Graph description</dt><dd>{}</dd><dt>Twitter title</dt><dd>{}</dd><dt>Twitter description</dt><dd>{}</dd></dl>"#,
        escape_html(&social.og_title),
        escape_html(&social.og_description),
        escape_html(&social.twitter_title),
        escape_html(&social.twitter_description),
    ));

    body.push_str(r#"<div class="char-counts">"#);
    body.push_str(&count_row(
        "Title",
        &counts.title_length.to_string(),
        counts.title_optimal,
        TITLE_RANGE,
    ));
    body.push_str(&count_row(
        "Description",
        &counts.description_length.to_string(),
        counts.description_optimal,
        DESCRIPTION_RANGE,
    ));
    body.push_str("</div>");

    Some(card("meta-preview", "Search & Social Preview", &body))
}

fn count_row(label: &str, length: &str, optimal: bool, range: &str) -> String {
    let flag = if optimal {
        pill("Optimal", Band::Green)
    } else {
        pill(&format!("Aim for {range}"), Band::Orange)
    };
    format!(
        r#"<div class="count-row"><span>{label} length</span><span>{length} chars</span>{flag}</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CharacterCounts, GooglePreview, Metric};

    #[test]
    fn absent_preview_renders_nothing() {
        assert_eq!(render(None), None);
    }

    #[test]
    fn google_preview_is_escaped() {
        let meta = MetaPreview {
            google: GooglePreview {
                url_display: "example.com › blog".to_owned(),
                title: "Fish & <Chips>".to_owned(),
                description: "Tasty".to_owned(),
            },
            ..MetaPreview::default()
        };
        let html = render(Some(&meta)).unwrap();
        assert!(html.contains("Fish &amp; &lt;Chips&gt;"));
        assert!(html.contains("example.com › blog"));
    }

    #[test]
    fn character_counts_flag_optimal_lengths() {
        let meta = MetaPreview {
            character_counts: CharacterCounts {
                title_length: Metric::new(55.0),
                title_optimal: true,
                description_optimal: false,
                ..CharacterCounts::default()
            },
            ..MetaPreview::default()
        };
        let html = render(Some(&meta)).unwrap();
        assert!(html.contains(
            r#"<span>Title length</span><span>55 chars</span><span class="pill band-green">Optimal</span>"#
        ));
        assert!(html.contains(
            r#"<span>Description length</span><span>0 chars</span><span class="pill band-orange">Aim for 150-160</span>"#
        ));
    }
}
