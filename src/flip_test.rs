use super::*;

use crate::consts::{DEFAULT_FLIP_DURATION_MS, DEFAULT_FLIP_STAGGER_MS};

fn default_plan(text: &str) -> FlipPlan {
    build_plan(text, DEFAULT_FLIP_DURATION_MS, DEFAULT_FLIP_STAGGER_MS)
}

// =============================================================
// Layer
// =============================================================

#[test]
fn layer_classes() {
    assert_eq!(Layer::Top.class(), "top-char");
    assert_eq!(Layer::Bottom.class(), "bottom-char");
}

// =============================================================
// build_plan
// =============================================================

#[test]
fn plan_preserves_length_and_order() {
    let plan = default_plan("Work");
    assert_eq!(plan.len(), 4);
    let chars: Vec<char> = plan.glyphs.iter().map(|g| g.ch).collect();
    assert_eq!(chars, vec!['W', 'o', 'r', 'k']);
}

#[test]
fn empty_text_is_an_empty_plan() {
    let plan = default_plan("");
    assert!(plan.is_empty());
    assert_eq!(plan.len(), 0);
}

#[test]
fn spaces_become_spacers() {
    let plan = default_plan("a b");
    assert!(!plan.glyphs[0].spacer);
    assert!(plan.glyphs[1].spacer);
    assert!(!plan.glyphs[2].spacer);
}

#[test]
fn only_plain_spaces_are_spacers() {
    let plan = default_plan("a\tb");
    assert!(!plan.glyphs[1].spacer);
}

#[test]
fn characters_are_unicode_scalar_values() {
    let plan = default_plan("héllo");
    assert_eq!(plan.len(), 5);
    assert_eq!(plan.glyphs[1].ch, 'é');
}

// =============================================================
// Timing
// =============================================================

#[test]
fn stagger_delays_step_by_the_configured_millis() {
    assert_eq!(stagger_delay_secs(0, 25), 0.0);
    assert_eq!(stagger_delay_secs(1, 25), 0.025);
    assert_eq!(stagger_delay_secs(3, 25), 0.075);
    assert_eq!(stagger_delay_secs(7, 25), 0.175);
    assert_eq!(stagger_delay_secs(2, 40), 0.08);
}

#[test]
fn transition_values_render_cleanly() {
    assert_eq!(transition_value(0, 250, 25), "transform 0.25s ease-in-out 0s");
    assert_eq!(transition_value(3, 250, 25), "transform 0.25s ease-in-out 0.075s");
    assert_eq!(transition_value(1, 600, 100), "transform 0.6s ease-in-out 0.1s");
}

#[test]
fn zero_stagger_leaves_every_delay_at_zero() {
    let plan = build_plan("abc", 250, 0);
    for glyph in &plan.glyphs {
        assert_eq!(glyph.transition, "transform 0.25s ease-in-out 0s");
    }
}

// =============================================================
// "Hi there" scenario
// =============================================================

#[test]
fn hi_there_has_eight_glyphs_with_cascading_delays() {
    let plan = default_plan("Hi there");
    assert_eq!(plan.len(), 8);

    let chars: Vec<char> = plan.glyphs.iter().map(|g| g.ch).collect();
    assert_eq!(chars, vec!['H', 'i', ' ', 't', 'h', 'e', 'r', 'e']);

    let expected = [0.0, 0.025, 0.05, 0.075, 0.1, 0.125, 0.15, 0.175];
    for (i, delay) in expected.iter().enumerate() {
        assert_eq!(stagger_delay_secs(i, DEFAULT_FLIP_STAGGER_MS), *delay);
        assert_eq!(
            plan.glyphs[i].transition,
            format!("transform 0.25s ease-in-out {delay}s")
        );
    }

    let spacers: Vec<usize> = plan
        .glyphs
        .iter()
        .enumerate()
        .filter(|(_, g)| g.spacer)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(spacers, vec![2]);
}
