use std::fmt::Write as _;

use crate::model::{SeoBreakdown, SeoScore};
use crate::sections::{bands, bullet_list, card, escape_html, pill, progress_bar};

pub fn render(seo: Option<&SeoScore>) -> Option<String> {
    let seo = seo?;
    let overall = seo.overall_score;
    let grade = if seo.grade.trim().is_empty() {
        "-"
    } else {
        seo.grade.trim()
    };

    let mut body = format!(
        r#"<div class="score-head"><span class="score {}">{}</span><span class="score-max">/ 100</span>{}</div>"#,
        bands::seo_overall(overall).class(),
        overall.percent(),
        pill(grade, bands::seo_grade(grade)),
    );

    body.push_str(r#"<div class="breakdown">"#);
    for (label, points) in seo.breakdown.categories() {
        let percent = points.value() / SeoBreakdown::CATEGORY_MAX * 100.0;
        let _ = write!(
            body,
            r#"<div class="breakdown-row"><span>{}</span><span>{}/{}</span>{}</div>"#,
            escape_html(label),
            points,
            SeoBreakdown::CATEGORY_MAX,
            progress_bar(percent, bands::seo_overall(percent.into())),
        );
    }
    body.push_str("</div>");

    if let Some(list) = bullet_list("recommendations", &seo.recommendations) {
        body.push_str("<h4>Recommendations</h4>");
        body.push_str(&list);
    }

    Some(card("seo-score", "SEO Score", &body))
}
