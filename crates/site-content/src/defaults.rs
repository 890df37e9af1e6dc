//! Baseline English content for the about-company page.
//!
//! This document is the fallback of last resort: every field a locale
//! override may fail to supply is taken from here, so it must stay fully
//! populated.

use crate::document::{
    AboutContent, AiSection, CtaSection, Goal, GoalsSection, HeroSection, Metric, MissionSection,
    TrustSection,
};

/// Build the complete English baseline document.
pub fn english_baseline() -> AboutContent {
    AboutContent {
        hero: HeroSection {
            badge_text: "About the company".to_string(),
            title: "Engineering the backbone of direct selling".to_string(),
            subtitle: "A decade of building compensation engines, genealogy trees and \
                       commerce tooling for network marketing businesses worldwide."
                .to_string(),
            primary_cta: "Request a demo".to_string(),
            secondary_cta: "Talk to our team".to_string(),
            metrics: vec![
                Metric {
                    label: "Founded".to_string(),
                    value: "2015".to_string(),
                },
                Metric {
                    label: "Markets".to_string(),
                    value: "100+".to_string(),
                },
                Metric {
                    label: "Client companies".to_string(),
                    value: "900+".to_string(),
                },
                Metric {
                    label: "Team members".to_string(),
                    value: "150+".to_string(),
                },
            ],
        },
        goals: GoalsSection {
            title: "What we are building toward".to_string(),
            description: "Three commitments shape every release we ship.".to_string(),
            items: vec![
                Goal {
                    title: "Reliable payouts".to_string(),
                    description: "Commission runs that close on time, every cycle, \
                                  regardless of plan complexity."
                        .to_string(),
                },
                Goal {
                    title: "Global reach".to_string(),
                    description: "Localized storefronts, currencies and tax handling for \
                                  every market our clients operate in."
                        .to_string(),
                },
                Goal {
                    title: "Honest tooling".to_string(),
                    description: "Transparent reporting that lets distributors verify \
                                  every figure on their dashboard."
                        .to_string(),
                },
            ],
        },
        mission: MissionSection {
            title: "Our mission".to_string(),
            description: "Give direct-selling companies software they can bet the \
                          business on."
                .to_string(),
            vision_title: "Our vision".to_string(),
            vision_description: "A direct-selling industry where technology is never the \
                                 limiting factor."
                .to_string(),
        },
        ai: AiSection {
            title: "AI across the platform".to_string(),
            description: "Practical machine assistance where it earns its keep."
                .to_string(),
            highlights: vec![
                "Churn prediction for distributor networks".to_string(),
                "Automated translation workflows for catalog content".to_string(),
                "Anomaly detection on commission runs".to_string(),
            ],
        },
        trust: TrustSection {
            title: "Why companies stay with us".to_string(),
            description: "Compliance and security are table stakes, not add-ons."
                .to_string(),
            points: vec![
                "Independent security audits every year".to_string(),
                "Data residency options in every major region".to_string(),
                "Dedicated migration engineers for every onboarding".to_string(),
            ],
        },
        cta: CtaSection {
            title: "Ready to architect your next phase?".to_string(),
            description: "Tell us where your business is headed and we will map the \
                          platform to get you there."
                .to_string(),
            button_label: "Start the conversation".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_has_no_blank_fields() {
        let baseline = english_baseline();
        let value = serde_json::to_value(&baseline).unwrap();
        assert_no_blank_strings(&value, "");
    }

    fn assert_no_blank_strings(value: &serde_json::Value, path: &str) {
        match value {
            serde_json::Value::String(s) => {
                assert!(!s.trim().is_empty(), "blank field at {path}");
            }
            serde_json::Value::Array(items) => {
                assert!(!items.is_empty(), "empty list at {path}");
                for (i, item) in items.iter().enumerate() {
                    assert_no_blank_strings(item, &format!("{path}[{i}]"));
                }
            }
            serde_json::Value::Object(map) => {
                for (key, item) in map {
                    assert_no_blank_strings(item, &format!("{path}.{key}"));
                }
            }
            _ => {}
        }
    }
}
