use super::*;

// =============================================================
// RevealPhase
// =============================================================

#[test]
fn phase_starts_unobserved() {
    assert_eq!(RevealPhase::default(), RevealPhase::Unobserved);
}

#[test]
fn phase_walks_forward_only() {
    let mut phase = RevealPhase::default();
    assert!(phase.observe());
    assert_eq!(phase, RevealPhase::Observing);
    assert!(phase.reveal());
    assert_eq!(phase, RevealPhase::Visible);
}

#[test]
fn observe_is_only_valid_from_unobserved() {
    let mut phase = RevealPhase::Observing;
    assert!(!phase.observe());
    assert_eq!(phase, RevealPhase::Observing);

    let mut phase = RevealPhase::Visible;
    assert!(!phase.observe());
    assert_eq!(phase, RevealPhase::Visible);
}

#[test]
fn reveal_requires_observing() {
    let mut phase = RevealPhase::Unobserved;
    assert!(!phase.reveal());
    assert_eq!(phase, RevealPhase::Unobserved);
}

#[test]
fn visible_is_terminal() {
    let mut phase = RevealPhase::Visible;
    assert!(!phase.reveal());
    assert!(!phase.observe());
    assert_eq!(phase, RevealPhase::Visible);
}

// =============================================================
// RevealRoster
// =============================================================

#[test]
fn enroll_assigns_sequential_indices() {
    let mut roster = RevealRoster::new();
    assert_eq!(roster.enroll(), 0);
    assert_eq!(roster.enroll(), 1);
    assert_eq!(roster.enroll(), 2);
    assert_eq!(roster.len(), 3);
    assert!(!roster.is_empty());
}

#[test]
fn enrolled_elements_start_observing() {
    let mut roster = RevealRoster::new();
    let index = roster.enroll();
    assert_eq!(roster.phase(index), Some(RevealPhase::Observing));
    assert_eq!(roster.observing_count(), 1);
    assert_eq!(roster.visible_count(), 0);
}

#[test]
fn reveal_fires_exactly_once_per_index() {
    let mut roster = RevealRoster::new();
    let index = roster.enroll();
    assert!(roster.reveal(index));
    assert!(!roster.reveal(index));
    assert!(!roster.reveal(index));
    assert_eq!(roster.phase(index), Some(RevealPhase::Visible));
    assert_eq!(roster.visible_count(), 1);
    assert_eq!(roster.observing_count(), 0);
}

#[test]
fn reveal_out_of_range_is_rejected() {
    let mut roster = RevealRoster::new();
    assert!(!roster.reveal(0));
    roster.enroll();
    assert!(!roster.reveal(5));
}

#[test]
fn elements_reveal_independently() {
    let mut roster = RevealRoster::new();
    let a = roster.enroll();
    let b = roster.enroll();
    let c = roster.enroll();

    assert!(roster.reveal(b));
    assert_eq!(roster.phase(a), Some(RevealPhase::Observing));
    assert_eq!(roster.phase(b), Some(RevealPhase::Visible));
    assert_eq!(roster.phase(c), Some(RevealPhase::Observing));
    assert_eq!(roster.observing_count(), 2);
    assert_eq!(roster.visible_count(), 1);
}

#[test]
fn phase_out_of_range_is_none() {
    let roster = RevealRoster::new();
    assert_eq!(roster.phase(0), None);
}

// =============================================================
// Style plans
// =============================================================

#[test]
fn pre_arm_styles_hide_and_arm_the_transition() {
    let styles = pre_arm_styles(&Config::default());
    assert_eq!(styles[0], ("opacity", "0".to_owned()));
    assert_eq!(styles[1], ("transform", "translateY(20px)".to_owned()));
    assert_eq!(
        styles[2],
        (
            "transition",
            "opacity 0.6s ease-out, transform 0.6s ease-out".to_owned()
        )
    );
}

#[test]
fn pre_arm_styles_follow_config() {
    let config = Config {
        reveal_offset_px: 8,
        reveal_duration_ms: 1500,
        ..Config::default()
    };
    let styles = pre_arm_styles(&config);
    assert_eq!(styles[1].1, "translateY(8px)");
    assert_eq!(styles[2].1, "opacity 1.5s ease-out, transform 1.5s ease-out");
}

#[test]
fn visible_rule_flips_both_properties() {
    assert_eq!(
        visible_rule(),
        ".visible { opacity: 1 !important; transform: translateY(0) !important; }"
    );
}
