//! Shared selectors, class names, and default tunables.
//!
//! Every name the page markup is expected to provide lives here, next to the
//! numeric defaults that [`crate::config::Config`] falls back on. Keeping the
//! DOM contract in one place makes it auditable against the site's HTML.

// ── Selection contracts ─────────────────────────────────────────

/// In-page anchors: links whose raw `href` attribute starts with `#`.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Elements that fade in the first time they approach the viewport.
pub const REVEAL_SELECTOR: &str =
    ".card, .section-title, .project-card, .timeline-item, .vision-box, .tag";

/// Mobile menu trigger.
pub const HAMBURGER_SELECTOR: &str = ".hamburger";

/// Navigation panel opened by the hamburger.
pub const NAV_PANEL_SELECTOR: &str = ".nav-links";

/// Links rebuilt into the two-layer letter-flip structure.
pub const REVEAL_LINK_SELECTOR: &str = ".reveal-link";

/// Third-party 3D viewer custom element.
pub const EMBED_SELECTOR: &str = "spline-viewer";

/// Branding node inside the embed's shadow root.
pub const LOGO_SELECTOR: &str = "#logo";

/// Optional JSON config island embedded in the page.
pub const CONFIG_ISLAND_ID: &str = "sheen-config";

// ── Emitted class and attribute names ───────────────────────────

/// Class added to a revealable element on its first qualifying intersection.
pub const VISIBLE_CLASS: &str = "visible";

/// Class on every span in the top flip layer.
pub const TOP_CHAR_CLASS: &str = "top-char";

/// Class on every span in the bottom flip layer.
pub const BOTTOM_CHAR_CLASS: &str = "bottom-char";

/// Attribute storing a revealable element's roster index.
pub const REVEAL_SEQ_ATTR: &str = "data-sheen-reveal";

/// Marker attribute on the guard style injected into the embed's shadow root.
pub const LOGO_GUARD_ATTR: &str = "data-sheen-guard";

/// Selector matching an already-injected guard style.
pub const LOGO_GUARD_SELECTOR: &str = "style[data-sheen-guard]";

/// Guard rule keeping the branding node hidden if the embed re-inserts it.
pub const LOGO_GUARD_CSS: &str =
    "#logo { display: none !important; opacity: 0 !important; visibility: hidden !important; }";

/// Fixed width given to space characters in both flip layers.
pub const SPACE_WIDTH_EM: &str = "0.3em";

// ── Default tunables ────────────────────────────────────────────

/// Fraction of a revealable element that must be visible to qualify.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// How far the observation region is pulled up from the viewport bottom.
pub const DEFAULT_REVEAL_BOTTOM_MARGIN_PX: u32 = 50;

/// Downward offset applied to hidden revealable elements.
pub const DEFAULT_REVEAL_OFFSET_PX: u32 = 20;

/// Duration of the reveal fade/slide transition.
pub const DEFAULT_REVEAL_DURATION_MS: u32 = 600;

/// Duration of each flip span's transform transition.
pub const DEFAULT_FLIP_DURATION_MS: u32 = 250;

/// Per-character delay step in the flip stagger.
pub const DEFAULT_FLIP_STAGGER_MS: u32 = 25;

/// Interval between logo sweeps.
pub const DEFAULT_SWEEP_PERIOD_MS: u32 = 100;

/// Total window after which logo sweeping stops for good.
pub const DEFAULT_SWEEP_WINDOW_MS: u32 = 5000;
