//! Traffic insights: predicted traffic, keyword coverage and SERP snippet
//! readiness. Each part is optional; the card disappears only when all three
//! analyses are missing.

use std::fmt::Write as _;

use crate::model::{KeywordGap, Metric, SerpOptimization, TrafficPrediction};
use crate::sections::{bands, bands::Band, bullet_list, card, escape_html, pill, progress_bar, tags};

pub fn render(
    traffic: Option<&TrafficPrediction>,
    gap: Option<&KeywordGap>,
    serp: Option<&SerpOptimization>,
) -> Option<String> {
    if traffic.is_none() && gap.is_none() && serp.is_none() {
        return None;
    }

    let mut body = String::new();
    if let Some(traffic) = traffic {
        body.push_str(&prediction(traffic));
    }
    if let Some(gap) = gap {
        body.push_str(&keyword_gap(gap));
    }
    if let Some(serp) = serp {
        body.push_str(&snippets(serp));
    }
    Some(card("traffic", "Traffic Insights", &body))
}

fn prediction(traffic: &TrafficPrediction) -> String {
    let range = &traffic.estimated_monthly_traffic;
    let tier = &traffic.traffic_tier;
    let factors = &traffic.factors;

    let mut out = format!(
        r#"<div class="traffic-head"><h4>Estimated monthly traffic</h4>{}</div>"#,
        pill(&format!("{} Traffic", tier.label()), bands::traffic_tier(tier)),
    );
    let _ = write!(
        out,
        r#"<div class="traffic-range"><div><span class="label">Low</span><span class="value">{}</span></div><div><span class="label">Expected</span><span class="value">{}</span></div><div><span class="label">High</span><span class="value">{}</span></div></div>"#,
        range.low, range.mid, range.high
    );

    out.push_str(r#"<dl class="factors">"#);
    for (label, value) in [
        ("Keywords", factors.keyword_count),
        ("Quality", factors.quality_score),
        ("Readability", factors.readability_score),
        ("Content length", factors.content_length),
    ] {
        let _ = write!(out, "<dt>{label}</dt><dd>{value}</dd>");
    }
    out.push_str("</dl>");

    if let Some(list) = bullet_list("recommendations", &traffic.recommendations) {
        out.push_str(&list);
    }
    out
}

fn keyword_gap(gap: &KeywordGap) -> String {
    let coverage: Metric = gap.coverage_score;
    let mut out = format!(
        r#"<h4>Keyword coverage</h4><div class="coverage"><span class="score {}">{}%</span><span>{} of {} covered, {} missing</span></div>"#,
        bands::seo_overall(coverage).class(),
        coverage.percent(),
        gap.covered,
        gap.total_expected,
        gap.missing,
    );
    out.push_str(&progress_bar(coverage.value(), bands::seo_overall(coverage)));
    if !gap.missing_keywords.is_empty() {
        out.push_str("<p>Missing keywords</p>");
        out.push_str(&tags(&gap.missing_keywords));
    }
    out
}

fn snippets(serp: &SerpOptimization) -> String {
    let mut out = String::from(r#"<h4>SERP features</h4><ul class="snippets">"#);
    if let Some(featured) = &serp.featured_snippet {
        let _ = write!(
            out,
            "<li>Featured snippet {}</li>",
            readiness(featured.optimized)
        );
    }
    if let Some(list) = &serp.list_snippet {
        let _ = write!(
            out,
            "<li>List snippet {} <span>{} items</span>",
            readiness(list.optimized),
            list.count
        );
        if !list.recommendation.trim().is_empty() {
            let _ = write!(out, "<p>{}</p>", escape_html(&list.recommendation));
        }
        out.push_str("</li>");
    }
    out.push_str("</ul>");
    out
}

fn readiness(optimized: bool) -> String {
    if optimized {
        pill("Optimized", Band::Green)
    } else {
        pill("Not optimized", Band::Orange)
    }
}
