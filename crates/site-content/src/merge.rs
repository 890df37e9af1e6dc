//! Document merging: overlay a partial locale override onto the baseline.
//!
//! Scalars follow override-precedence: an override value wins only when it
//! is present and non-blank. Lists follow length-gated reconciliation: an
//! override list is accepted only when its element count matches the
//! baseline list's count, and accepted lists are merged elementwise.
//! Lists back fixed UI card slots, so a mismatched list is discarded
//! whole in favour of the baseline.

use crate::document::{
    AboutContent, AboutOverride, AiOverride, AiSection, CtaOverride, CtaSection, Goal,
    GoalOverride, GoalsOverride, GoalsSection, HeroOverride, HeroSection, Metric, MetricOverride,
    MissionOverride, MissionSection, TrustOverride, TrustSection,
};
use tracing::debug;

/// Merge a locale override onto the baseline document.
///
/// The result is always complete: every field defined in the baseline is
/// populated, from the override where it supplies a usable value and from
/// the baseline otherwise.
pub fn merge_document(baseline: &AboutContent, overlay: &AboutOverride) -> AboutContent {
    AboutContent {
        hero: merge_hero(&baseline.hero, overlay.hero.as_ref()),
        goals: merge_goals(&baseline.goals, overlay.goals.as_ref()),
        mission: merge_mission(&baseline.mission, overlay.mission.as_ref()),
        ai: merge_ai(&baseline.ai, overlay.ai.as_ref()),
        trust: merge_trust(&baseline.trust, overlay.trust.as_ref()),
        cta: merge_cta(&baseline.cta, overlay.cta.as_ref()),
    }
}

/// Pick the override scalar when present and non-blank, else the baseline.
fn merge_scalar(baseline: &str, overlay: Option<&String>) -> String {
    match overlay {
        Some(value) if !value.trim().is_empty() => value.clone(),
        _ => baseline.to_string(),
    }
}

/// Length-gated elementwise merge for record lists.
///
/// `merge_item` combines one baseline element with its override at the
/// same position. A missing or length-mismatched override list yields the
/// baseline list unchanged.
fn merge_list<B, O, F>(baseline: &[B], overlay: Option<&Vec<O>>, merge_item: F) -> Vec<B>
where
    B: Clone,
    F: Fn(&B, &O) -> B,
{
    match overlay {
        Some(items) if items.len() == baseline.len() => baseline
            .iter()
            .zip(items.iter())
            .map(|(base, over)| merge_item(base, over))
            .collect(),
        Some(items) => {
            debug!(
                baseline_len = baseline.len(),
                override_len = items.len(),
                "discarding length-mismatched override list"
            );
            baseline.to_vec()
        }
        None => baseline.to_vec(),
    }
}

/// Length-gated elementwise merge for plain string lists.
fn merge_string_list(baseline: &[String], overlay: Option<&Vec<String>>) -> Vec<String> {
    match overlay {
        Some(items) if items.len() == baseline.len() => baseline
            .iter()
            .zip(items.iter())
            .map(|(base, over)| merge_scalar(base, Some(over)))
            .collect(),
        Some(items) => {
            debug!(
                baseline_len = baseline.len(),
                override_len = items.len(),
                "discarding length-mismatched override list"
            );
            baseline.to_vec()
        }
        None => baseline.to_vec(),
    }
}

fn merge_hero(baseline: &HeroSection, overlay: Option<&HeroOverride>) -> HeroSection {
    let Some(overlay) = overlay else {
        return baseline.clone();
    };
    HeroSection {
        badge_text: merge_scalar(&baseline.badge_text, overlay.badge_text.as_ref()),
        title: merge_scalar(&baseline.title, overlay.title.as_ref()),
        subtitle: merge_scalar(&baseline.subtitle, overlay.subtitle.as_ref()),
        primary_cta: merge_scalar(&baseline.primary_cta, overlay.primary_cta.as_ref()),
        secondary_cta: merge_scalar(&baseline.secondary_cta, overlay.secondary_cta.as_ref()),
        metrics: merge_list(&baseline.metrics, overlay.metrics.as_ref(), merge_metric),
    }
}

fn merge_metric(baseline: &Metric, overlay: &MetricOverride) -> Metric {
    Metric {
        label: merge_scalar(&baseline.label, overlay.label.as_ref()),
        value: merge_scalar(&baseline.value, overlay.value.as_ref()),
    }
}

fn merge_goals(baseline: &GoalsSection, overlay: Option<&GoalsOverride>) -> GoalsSection {
    let Some(overlay) = overlay else {
        return baseline.clone();
    };
    GoalsSection {
        title: merge_scalar(&baseline.title, overlay.title.as_ref()),
        description: merge_scalar(&baseline.description, overlay.description.as_ref()),
        items: merge_list(&baseline.items, overlay.items.as_ref(), merge_goal),
    }
}

fn merge_goal(baseline: &Goal, overlay: &GoalOverride) -> Goal {
    Goal {
        title: merge_scalar(&baseline.title, overlay.title.as_ref()),
        description: merge_scalar(&baseline.description, overlay.description.as_ref()),
    }
}

fn merge_mission(
    baseline: &MissionSection,
    overlay: Option<&MissionOverride>,
) -> MissionSection {
    let Some(overlay) = overlay else {
        return baseline.clone();
    };
    MissionSection {
        title: merge_scalar(&baseline.title, overlay.title.as_ref()),
        description: merge_scalar(&baseline.description, overlay.description.as_ref()),
        vision_title: merge_scalar(&baseline.vision_title, overlay.vision_title.as_ref()),
        vision_description: merge_scalar(
            &baseline.vision_description,
            overlay.vision_description.as_ref(),
        ),
    }
}

fn merge_ai(baseline: &AiSection, overlay: Option<&AiOverride>) -> AiSection {
    let Some(overlay) = overlay else {
        return baseline.clone();
    };
    AiSection {
        title: merge_scalar(&baseline.title, overlay.title.as_ref()),
        description: merge_scalar(&baseline.description, overlay.description.as_ref()),
        highlights: merge_string_list(&baseline.highlights, overlay.highlights.as_ref()),
    }
}

fn merge_trust(
    baseline: &TrustSection,
    overlay: Option<&TrustOverride>,
) -> TrustSection {
    let Some(overlay) = overlay else {
        return baseline.clone();
    };
    TrustSection {
        title: merge_scalar(&baseline.title, overlay.title.as_ref()),
        description: merge_scalar(&baseline.description, overlay.description.as_ref()),
        points: merge_string_list(&baseline.points, overlay.points.as_ref()),
    }
}

fn merge_cta(baseline: &CtaSection, overlay: Option<&CtaOverride>) -> CtaSection {
    let Some(overlay) = overlay else {
        return baseline.clone();
    };
    CtaSection {
        title: merge_scalar(&baseline.title, overlay.title.as_ref()),
        description: merge_scalar(&baseline.description, overlay.description.as_ref()),
        button_label: merge_scalar(&baseline.button_label, overlay.button_label.as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::english_baseline;

    #[test]
    fn empty_override_returns_baseline() {
        let baseline = english_baseline();
        let merged = merge_document(&baseline, &AboutOverride::default());
        assert_eq!(merged, baseline);
    }

    #[test]
    fn scalar_override_takes_precedence() {
        let baseline = english_baseline();
        let overlay = AboutOverride {
            cta: Some(CtaOverride {
                title: Some("¿Listo para crecer?".to_string()),
                ..CtaOverride::default()
            }),
            ..AboutOverride::default()
        };
        let merged = merge_document(&baseline, &overlay);
        assert_eq!(merged.cta.title, "¿Listo para crecer?");
        assert_eq!(merged.cta.description, baseline.cta.description);
    }

    #[test]
    fn blank_scalar_override_falls_back() {
        let baseline = english_baseline();
        let overlay = AboutOverride {
            cta: Some(CtaOverride {
                title: Some("   ".to_string()),
                button_label: Some(String::new()),
                ..CtaOverride::default()
            }),
            ..AboutOverride::default()
        };
        let merged = merge_document(&baseline, &overlay);
        assert_eq!(merged.cta.title, baseline.cta.title);
        assert_eq!(merged.cta.button_label, baseline.cta.button_label);
    }

    #[test]
    fn matching_length_list_merges_elementwise() {
        let baseline = english_baseline();
        let translated: Vec<MetricOverride> = baseline
            .hero
            .metrics
            .iter()
            .enumerate()
            .map(|(i, _)| MetricOverride {
                label: Some(format!("Etiqueta {i}")),
                value: None,
            })
            .collect();
        let overlay = AboutOverride {
            hero: Some(HeroOverride {
                metrics: Some(translated),
                ..HeroOverride::default()
            }),
            ..AboutOverride::default()
        };
        let merged = merge_document(&baseline, &overlay);
        assert_eq!(merged.hero.metrics.len(), baseline.hero.metrics.len());
        for (i, metric) in merged.hero.metrics.iter().enumerate() {
            assert_eq!(metric.label, format!("Etiqueta {i}"));
            assert_eq!(metric.value, baseline.hero.metrics[i].value);
        }
    }

    #[test]
    fn mismatched_length_list_is_discarded() {
        let baseline = english_baseline();
        let overlay = AboutOverride {
            hero: Some(HeroOverride {
                metrics: Some(vec![MetricOverride {
                    label: Some("Fundada".to_string()),
                    value: Some("2015".to_string()),
                }]),
                ..HeroOverride::default()
            }),
            ..AboutOverride::default()
        };
        let merged = merge_document(&baseline, &overlay);
        assert_eq!(merged.hero.metrics, baseline.hero.metrics);
    }

    #[test]
    fn empty_list_override_is_discarded() {
        let baseline = english_baseline();
        let overlay = AboutOverride {
            hero: Some(HeroOverride {
                metrics: Some(Vec::new()),
                ..HeroOverride::default()
            }),
            ..AboutOverride::default()
        };
        let merged = merge_document(&baseline, &overlay);
        assert_eq!(merged.hero.metrics, baseline.hero.metrics);
    }

    #[test]
    fn string_list_follows_length_gate() {
        let baseline = english_baseline();
        let n = baseline.ai.highlights.len();

        let wrong_len = AboutOverride {
            ai: Some(AiOverride {
                highlights: Some(vec!["solo uno".to_string()]),
                ..Default::default()
            }),
            ..AboutOverride::default()
        };
        let merged = merge_document(&baseline, &wrong_len);
        assert_eq!(merged.ai.highlights, baseline.ai.highlights);

        let mut translated = vec!["traducido".to_string(); n];
        // A blank element falls back to the baseline element at that slot.
        translated[0] = String::new();
        let right_len = AboutOverride {
            ai: Some(AiOverride {
                highlights: Some(translated),
                ..Default::default()
            }),
            ..AboutOverride::default()
        };
        let merged = merge_document(&baseline, &right_len);
        assert_eq!(merged.ai.highlights[0], baseline.ai.highlights[0]);
        assert!(merged.ai.highlights[1..].iter().all(|h| h == "traducido"));
    }

    #[test]
    fn merge_is_pure_and_repeatable() {
        let baseline = english_baseline();
        let overlay = AboutOverride {
            cta: Some(CtaOverride {
                title: Some("Bereit für die nächste Phase?".to_string()),
                ..CtaOverride::default()
            }),
            ..AboutOverride::default()
        };
        let first = merge_document(&baseline, &overlay);
        let second = merge_document(&baseline, &overlay);
        assert_eq!(first, second);
    }
}
