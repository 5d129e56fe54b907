use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A numeric leaf as the backend sends it: integer, float, numeric string,
/// `null` or missing. Anything that is not a finite number reads as `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Metric(f64);

impl Metric {
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value)
        } else {
            Self(0.0)
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Rounded and clamped into `0..=100`.
    pub fn percent(self) -> u8 {
        self.0.round().clamp(0.0, 100.0) as u8
    }
}

impl From<f64> for Metric {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{:.1}", self.0)
        }
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Metric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
            Other(serde::de::IgnoredAny),
        }

        let value = match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Number(n)) => n,
            Some(Raw::Text(text)) => text.trim().parse::<f64>().unwrap_or(0.0),
            Some(Raw::Other(_)) | None => 0.0,
        };
        Ok(Self::new(value))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: String,
    #[serde(default)]
    pub share_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub optimized_title: Option<String>,
    #[serde(default)]
    pub optimized_description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub performance_score: Metric,
    #[serde(default)]
    pub views: Metric,
    #[serde(default)]
    pub llm_queries: Metric,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,

    #[serde(default)]
    pub seo_score: Option<SeoScore>,
    #[serde(default)]
    pub freshness: Option<Freshness>,
    #[serde(default)]
    pub meta_preview: Option<MetaPreview>,
    #[serde(default)]
    pub traffic_prediction: Option<TrafficPrediction>,
    #[serde(default)]
    pub keyword_gap: Option<KeywordGap>,
    #[serde(default)]
    pub serp_optimization: Option<SerpOptimization>,
    #[serde(default)]
    pub topic_clusters: Option<TopicClusters>,

    #[serde(flatten)]
    pub bags: AnalysisBags,
}

impl ContentRecord {
    pub fn display_title(&self) -> &str {
        self.optimized_title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(&self.title)
    }

    /// The id used in public share links.
    pub fn public_id(&self) -> &str {
        self.share_id
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(&self.id)
    }
}

/// Self-describing optional analyses, each shown by the generic bag renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisBags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_tags: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_posts: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_authority: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_intent: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faqs: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_queries: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lsi_keywords: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_snippets: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_linking: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backlink_anchors: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_box_content: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_enrichment: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub people_also_ask: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeoScore {
    #[serde(default)]
    pub overall_score: Metric,
    #[serde(default)]
    pub breakdown: SeoBreakdown,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Five fixed categories, each worth up to 20 points.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeoBreakdown {
    #[serde(default)]
    pub title: Metric,
    #[serde(default)]
    pub description: Metric,
    #[serde(default)]
    pub keywords: Metric,
    #[serde(default)]
    pub content_quality: Metric,
    #[serde(default)]
    pub technical: Metric,
}

impl SeoBreakdown {
    pub const CATEGORY_MAX: f64 = 20.0;

    pub fn categories(&self) -> [(&'static str, Metric); 5] {
        [
            ("Title", self.title),
            ("Description", self.description),
            ("Keywords", self.keywords),
            ("Content Quality", self.content_quality),
            ("Technical", self.technical),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FreshnessStatus {
    VeryFresh,
    Fresh,
    Recent,
    Moderate,
    Aging,
    Outdated,
    Other(String),
}

impl Default for FreshnessStatus {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl FreshnessStatus {
    pub fn label(&self) -> &str {
        match self {
            Self::VeryFresh => "Very Fresh",
            Self::Fresh => "Fresh",
            Self::Recent => "Recent",
            Self::Moderate => "Moderate",
            Self::Aging => "Aging",
            Self::Outdated => "Outdated",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for FreshnessStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Very Fresh" => Self::VeryFresh,
            "Fresh" => Self::Fresh,
            "Recent" => Self::Recent,
            "Moderate" => Self::Moderate,
            "Aging" => Self::Aging,
            "Outdated" => Self::Outdated,
            _ => Self::Other(raw),
        }
    }
}

impl From<FreshnessStatus> for String {
    fn from(status: FreshnessStatus) -> Self {
        status.label().to_owned()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Freshness {
    #[serde(default)]
    pub freshness_score: Metric,
    #[serde(default)]
    pub status: FreshnessStatus,
    #[serde(default)]
    pub days_old: Metric,
    #[serde(default)]
    pub needs_update: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetaPreview {
    #[serde(default)]
    pub google: GooglePreview,
    #[serde(default)]
    pub social: SocialPreview,
    #[serde(default)]
    pub character_counts: CharacterCounts,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GooglePreview {
    #[serde(default)]
    pub url_display: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialPreview {
    #[serde(default)]
    pub og_title: String,
    #[serde(default)]
    pub og_description: String,
    #[serde(default)]
    pub twitter_title: String,
    #[serde(default)]
    pub twitter_description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterCounts {
    #[serde(default)]
    pub title_length: Metric,
    #[serde(default)]
    pub title_optimal: bool,
    #[serde(default)]
    pub description_length: Metric,
    #[serde(default)]
    pub description_optimal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TrafficTier {
    High,
    Medium,
    Low(String),
}

impl Default for TrafficTier {
    fn default() -> Self {
        Self::Low("Low".to_owned())
    }
}

impl TrafficTier {
    pub fn label(&self) -> &str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low(raw) if raw.trim().is_empty() => "Low",
            Self::Low(raw) => raw,
        }
    }
}

impl From<String> for TrafficTier {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "High" => Self::High,
            "Medium" => Self::Medium,
            _ => Self::Low(raw),
        }
    }
}

impl From<TrafficTier> for String {
    fn from(tier: TrafficTier) -> Self {
        tier.label().to_owned()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrafficPrediction {
    #[serde(default)]
    pub estimated_monthly_traffic: TrafficRange,
    #[serde(default)]
    pub traffic_tier: TrafficTier,
    #[serde(default)]
    pub factors: TrafficFactors,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrafficRange {
    #[serde(default)]
    pub low: Metric,
    #[serde(default)]
    pub mid: Metric,
    #[serde(default)]
    pub high: Metric,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrafficFactors {
    #[serde(default)]
    pub keyword_count: Metric,
    #[serde(default)]
    pub quality_score: Metric,
    #[serde(default)]
    pub readability_score: Metric,
    #[serde(default)]
    pub content_length: Metric,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordGap {
    #[serde(default)]
    pub coverage_score: Metric,
    #[serde(default)]
    pub covered: Metric,
    #[serde(default)]
    pub missing: Metric,
    #[serde(default)]
    pub total_expected: Metric,
    #[serde(default)]
    pub missing_keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SerpOptimization {
    #[serde(default)]
    pub featured_snippet: Option<FeaturedSnippet>,
    #[serde(default)]
    pub list_snippet: Option<ListSnippet>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeaturedSnippet {
    #[serde(default)]
    pub optimized: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListSnippet {
    #[serde(default)]
    pub optimized: bool,
    #[serde(default)]
    pub count: Metric,
    #[serde(default)]
    pub recommendation: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicClusters {
    #[serde(default)]
    pub pillar_topic: String,
    #[serde(default)]
    pub pillar_keywords: Vec<String>,
    #[serde(default)]
    pub cluster_topics: Vec<ClusterTopic>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusterTopic {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub relationship: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QueryType {
    #[default]
    Standard,
    Voice,
}

impl From<String> for QueryType {
    fn from(raw: String) -> Self {
        if raw.eq_ignore_ascii_case("voice") {
            Self::Voice
        } else {
            Self::Standard
        }
    }
}

impl QueryType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Voice => "voice",
        }
    }
}

impl From<QueryType> for String {
    fn from(kind: QueryType) -> Self {
        kind.as_str().to_owned()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Query {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub query_type: QueryType,
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub relevance_score: Metric,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    #[serde(default)]
    pub total_content: Metric,
    #[serde(default)]
    pub total_queries: Metric,
    #[serde(default)]
    pub avg_performance_score: Metric,
    #[serde(default)]
    pub avg_readability_score: Metric,
    #[serde(default)]
    pub top_performing: Vec<TopPerforming>,
    #[serde(default)]
    pub recent_queries: Vec<RecentQuery>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopPerforming {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub performance_score: Metric,
    #[serde(default)]
    pub views: Metric,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentQuery {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub relevance_score: Metric,
}

/// Body of `POST /content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "input_type", rename_all = "snake_case")]
pub enum CreateContent {
    Url { url: String },
    Manual { title: String, content: String },
}

/// The part of a created record the dashboard relies on.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedContent {
    pub id: String,
}
