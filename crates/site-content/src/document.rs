//! Content document schema definitions using serde.
//!
//! `AboutContent` is the complete, fixed-shape document the rendering
//! layer consumes. Every section also has an override mirror type in
//! which each field is optional; locale files deserialize into those,
//! so a translator may supply any subset of the document.

use serde::{Deserialize, Serialize};

/// Complete content document for the about-company page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutContent {
    /// Hero section.
    pub hero: HeroSection,
    /// Goals section.
    pub goals: GoalsSection,
    /// Mission and vision section.
    pub mission: MissionSection,
    /// AI capabilities section.
    pub ai: AiSection,
    /// Trust and compliance section.
    pub trust: TrustSection,
    /// Closing call-to-action section.
    pub cta: CtaSection,
}

/// Hero section content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSection {
    /// Small badge text above the title.
    pub badge_text: String,
    /// Main page title.
    pub title: String,
    /// Supporting subtitle.
    pub subtitle: String,
    /// Primary call-to-action label.
    pub primary_cta: String,
    /// Secondary call-to-action label.
    pub secondary_cta: String,
    /// Company metrics rendered in fixed card slots.
    pub metrics: Vec<Metric>,
}

/// A single labelled metric (e.g. "Founded" / "2015").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Metric label.
    pub label: String,
    /// Metric value.
    pub value: String,
}

/// Goals section content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalsSection {
    /// Section title.
    pub title: String,
    /// Section description.
    pub description: String,
    /// Individual goal cards.
    pub items: Vec<Goal>,
}

/// A single goal card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Goal title.
    pub title: String,
    /// Goal description.
    pub description: String,
}

/// Mission and vision section content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionSection {
    /// Section title.
    pub title: String,
    /// Mission statement.
    pub description: String,
    /// Vision heading.
    pub vision_title: String,
    /// Vision statement.
    pub vision_description: String,
}

/// AI capabilities section content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiSection {
    /// Section title.
    pub title: String,
    /// Section description.
    pub description: String,
    /// Capability highlights rendered as a bullet list.
    pub highlights: Vec<String>,
}

/// Trust and compliance section content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustSection {
    /// Section title.
    pub title: String,
    /// Section description.
    pub description: String,
    /// Trust points rendered as a bullet list.
    pub points: Vec<String>,
}

/// Closing call-to-action section content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CtaSection {
    /// Call-to-action title.
    pub title: String,
    /// Call-to-action description.
    pub description: String,
    /// Button label.
    pub button_label: String,
}

/// Partial override for the about-company document.
///
/// Missing sections and fields fall back to the baseline during merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutOverride {
    /// Hero section override.
    pub hero: Option<HeroOverride>,
    /// Goals section override.
    pub goals: Option<GoalsOverride>,
    /// Mission section override.
    pub mission: Option<MissionOverride>,
    /// AI section override.
    pub ai: Option<AiOverride>,
    /// Trust section override.
    pub trust: Option<TrustOverride>,
    /// Call-to-action section override.
    pub cta: Option<CtaOverride>,
}

/// Partial override for the hero section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroOverride {
    pub badge_text: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub primary_cta: Option<String>,
    pub secondary_cta: Option<String>,
    pub metrics: Option<Vec<MetricOverride>>,
}

/// Partial override for a single metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricOverride {
    pub label: Option<String>,
    pub value: Option<String>,
}

/// Partial override for the goals section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalsOverride {
    pub title: Option<String>,
    pub description: Option<String>,
    pub items: Option<Vec<GoalOverride>>,
}

/// Partial override for a single goal card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalOverride {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Partial override for the mission section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionOverride {
    pub title: Option<String>,
    pub description: Option<String>,
    pub vision_title: Option<String>,
    pub vision_description: Option<String>,
}

/// Partial override for the AI section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiOverride {
    pub title: Option<String>,
    pub description: Option<String>,
    pub highlights: Option<Vec<String>>,
}

/// Partial override for the trust section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustOverride {
    pub title: Option<String>,
    pub description: Option<String>,
    pub points: Option<Vec<String>>,
}

/// Partial override for the call-to-action section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaOverride {
    pub title: Option<String>,
    pub description: Option<String>,
    pub button_label: Option<String>,
}
