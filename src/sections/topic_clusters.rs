use std::fmt::Write as _;

use crate::model::TopicClusters;
use crate::sections::{card, escape_html, tags};

pub fn render(clusters: Option<&TopicClusters>) -> Option<String> {
    let clusters = clusters?;
    let pillar = clusters.pillar_topic.trim();
    if pillar.is_empty() && clusters.cluster_topics.is_empty() {
        return None;
    }

    let mut body = String::new();
    if !pillar.is_empty() {
        let _ = write!(
            body,
            r#"<div class="pillar"><span class="label">Pillar topic</span><strong>{}</strong>{}</div>"#,
            escape_html(pillar),
            tags(&clusters.pillar_keywords)
        );
    }

    if !clusters.cluster_topics.is_empty() {
        body.push_str(r#"<ul class="clusters">"#);
        for topic in &clusters.cluster_topics {
            let _ = write!(
                body,
                "<li><strong>{}</strong>",
                escape_html(&topic.topic)
            );
            if !topic.relationship.trim().is_empty() {
                let _ = write!(
                    body,
                    r#" <span class="relationship">{}</span>"#,
                    escape_html(&topic.relationship)
                );
            }
            body.push_str(&tags(&topic.keywords));
            body.push_str("</li>");
        }
        body.push_str("</ul>");
    }

    Some(card("topic-clusters", "Topic Clusters", &body))
}
