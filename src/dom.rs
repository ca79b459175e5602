//! DOM wiring: installs every page effect against a live document.
//!
//! This module is the only place that touches [`web_sys`]. The pure modules
//! decide what should happen ([`crate::scroll`], [`crate::reveal`],
//! [`crate::nav`], [`crate::flip`], [`crate::suppress`]); this one owns the
//! closures, the intersection observer, and the timers that apply those
//! decisions to the page.
//!
//! Fallible DOM calls propagate `Result<_, JsValue>` with `?` inside each
//! installer. [`enhance_page`] isolates the installers from each other, so
//! a failure in one effect leaves the rest running. Listener closures are
//! leaked deliberately (`forget`); they live as long as the page does.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList, ScrollBehavior, ScrollIntoViewOptions,
};

use crate::config::Config;
use crate::consts::{
    ANCHOR_SELECTOR, CONFIG_ISLAND_ID, EMBED_SELECTOR, HAMBURGER_SELECTOR, LOGO_GUARD_ATTR,
    LOGO_GUARD_CSS, LOGO_GUARD_SELECTOR, LOGO_SELECTOR, NAV_PANEL_SELECTOR, REVEAL_LINK_SELECTOR,
    REVEAL_SELECTOR, REVEAL_SEQ_ATTR, SPACE_WIDTH_EM, VISIBLE_CLASS,
};
use crate::nav::MenuState;
use crate::reveal::RevealRoster;
use crate::suppress::SweepOutcome;
use crate::{flip, nav, reveal, scroll};

// =============================================================
// Bootstrap
// =============================================================

/// Run the full enhancement pass once the document is ready.
///
/// If the DOM is still parsing, installation is deferred to
/// `DOMContentLoaded`; otherwise it runs immediately.
///
/// # Errors
///
/// Returns `Err` only if the deferred listener cannot be attached.
pub fn run_at_page_load(document: &Document) -> Result<(), JsValue> {
    if document.ready_state() == DocumentReadyState::Loading {
        let doc = document.clone();
        let once = Closure::<dyn FnMut()>::new(move || enhance_now(&doc));
        document
            .add_event_listener_with_callback("DOMContentLoaded", once.as_ref().unchecked_ref())?;
        once.forget();
    } else {
        enhance_now(document);
    }
    Ok(())
}

/// Read the page's config island, if any, and install every effect.
pub fn enhance_now(document: &Document) {
    let config = load_config(document);
    enhance_page(document, &config);
}

/// Install all five effects with the given config.
///
/// Installers are isolated: one failing is logged and does not stop the
/// rest.
pub fn enhance_page(document: &Document, config: &Config) {
    if let Err(err) = install_smooth_scroll(document) {
        log::warn!("smooth scroll install failed: {err:?}");
    }
    if let Err(err) = install_reveal_observer(document, config) {
        log::warn!("reveal observer install failed: {err:?}");
    }
    if let Err(err) = install_nav_toggle(document) {
        log::warn!("nav toggle install failed: {err:?}");
    }
    if let Err(err) = install_letter_flips(document, config) {
        log::warn!("letter flip install failed: {err:?}");
    }
    if let Err(err) = install_logo_suppressor(document, config) {
        log::warn!("logo suppressor install failed: {err:?}");
    }
}

fn load_config(document: &Document) -> Config {
    let Some(island) = document.get_element_by_id(CONFIG_ISLAND_ID) else {
        return Config::default();
    };
    let Some(text) = island.text_content() else {
        return Config::default();
    };
    match Config::from_json(&text) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("invalid {CONFIG_ISLAND_ID} island, using defaults: {err}");
            Config::default()
        }
    }
}

// =============================================================
// Smooth scroll
// =============================================================

fn install_smooth_scroll(document: &Document) -> Result<(), JsValue> {
    let anchors = document.query_selector_all(ANCHOR_SELECTOR)?;
    for anchor in elements_of(&anchors) {
        bind_anchor(document, &anchor)?;
    }
    Ok(())
}

/// Click on an in-page anchor: cancel navigation, then smooth-scroll to the
/// target if it exists. The href is re-read at click time so markup edits
/// after install still work.
fn bind_anchor(document: &Document, anchor: &Element) -> Result<(), JsValue> {
    let doc = document.clone();
    let link = anchor.clone();
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let Some(id) = scroll::fragment_id(&href) else {
            log::debug!("anchor {href:?} names no fragment, nothing to scroll to");
            return;
        };
        let Some(target) = doc.get_element_by_id(id) else {
            log::debug!("no element with id {id:?}, skipping smooth scroll");
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    });
    anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

// =============================================================
// Reveal observer
// =============================================================

fn install_reveal_observer(document: &Document, config: &Config) -> Result<(), JsValue> {
    let watched = document.query_selector_all(REVEAL_SELECTOR)?;
    if watched.length() == 0 {
        log::debug!("no revealable elements on this page");
        return Ok(());
    }

    // The visible state lives in a head stylesheet, so flipping the class
    // is all the callback has to do.
    inject_stylesheet(document, &reveal::visible_rule())?;

    let roster = Rc::new(RefCell::new(RevealRoster::new()));

    let callback_roster = Rc::clone(&roster);
    let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Some(seq) = target.get_attribute(REVEAL_SEQ_ATTR) else {
                    continue;
                };
                let Ok(index) = seq.parse::<usize>() else {
                    continue;
                };
                if callback_roster.borrow_mut().reveal(index) {
                    if let Err(err) = target.class_list().add_1(VISIBLE_CLASS) {
                        log::debug!("could not mark element {index} visible: {err:?}");
                    }
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    options.set_root_margin(&config.root_margin());
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    on_intersect.forget();

    for element in elements_of(&watched) {
        let Ok(element) = element.dyn_into::<HtmlElement>() else {
            continue;
        };
        let index = roster.borrow_mut().enroll();
        element.set_attribute(REVEAL_SEQ_ATTR, &index.to_string())?;
        for (property, value) in reveal::pre_arm_styles(config) {
            set_style(&element, property, &value);
        }
        observer.observe(&element);
    }
    log::debug!("observing {} revealable elements", roster.borrow().len());
    Ok(())
}

// =============================================================
// Nav toggle
// =============================================================

fn install_nav_toggle(document: &Document) -> Result<(), JsValue> {
    let Some(trigger) = document.query_selector(HAMBURGER_SELECTOR)? else {
        log::debug!("no {HAMBURGER_SELECTOR} trigger on this page");
        return Ok(());
    };
    let Some(panel) = document.query_selector(NAV_PANEL_SELECTOR)? else {
        log::debug!("{HAMBURGER_SELECTOR} present but {NAV_PANEL_SELECTOR} missing");
        return Ok(());
    };
    let Ok(panel) = panel.dyn_into::<HtmlElement>() else {
        return Ok(());
    };

    let state = Cell::new(MenuState::default());
    let on_click = Closure::<dyn FnMut()>::new(move || {
        let next = state.get().toggled();
        state.set(next);
        set_style(&panel, "display", next.display());
        if next.is_open() {
            for (property, value) in nav::OVERLAY_LAYOUT {
                set_style(&panel, property, value);
            }
        }
    });
    trigger.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

// =============================================================
// Letter flip
// =============================================================

fn install_letter_flips(document: &Document, config: &Config) -> Result<(), JsValue> {
    let links = document.query_selector_all(REVEAL_LINK_SELECTOR)?;
    for link in elements_of(&links) {
        rebuild_reveal_link(document, &link, config)?;
    }
    Ok(())
}

/// Replace a link's flat text with the two stacked glyph layers.
fn rebuild_reveal_link(document: &Document, link: &Element, config: &Config) -> Result<(), JsValue> {
    let text = link.text_content().unwrap_or_default();
    let plan = flip::build_plan(&text, config.flip_duration_ms, config.flip_stagger_ms);

    link.set_text_content(Some(""));
    link.append_child(&build_flip_layer(document, &plan, flip::Layer::Top)?)?;
    link.append_child(&build_flip_layer(document, &plan, flip::Layer::Bottom)?)?;
    Ok(())
}

fn build_flip_layer(
    document: &Document,
    plan: &flip::FlipPlan,
    layer: flip::Layer,
) -> Result<HtmlElement, JsValue> {
    let wrapper = create_html(document, "div")?;
    if layer == flip::Layer::Bottom {
        // The bottom layer sits exactly over the top one.
        set_style(&wrapper, "position", "absolute");
        set_style(&wrapper, "top", "0");
        set_style(&wrapper, "left", "0");
        set_style(&wrapper, "width", "100%");
        set_style(&wrapper, "height", "100%");
    }

    for glyph in &plan.glyphs {
        let span = create_html(document, "span")?;
        span.set_text_content(Some(&glyph.ch.to_string()));
        span.set_class_name(layer.class());
        set_style(&span, "display", "inline-block");
        set_style(&span, "transition", &glyph.transition);
        if glyph.spacer {
            set_style(&span, "width", SPACE_WIDTH_EM);
        }
        wrapper.append_child(&span)?;
    }
    Ok(wrapper)
}

// =============================================================
// Logo suppressor
// =============================================================

fn install_logo_suppressor(document: &Document, config: &Config) -> Result<(), JsValue> {
    let Some(viewer) = document.query_selector(EMBED_SELECTOR)? else {
        log::debug!("no {EMBED_SELECTOR} embed on this page");
        return Ok(());
    };
    let budget = config.sweep_budget();

    // Once right away: the shadow root may already be attached.
    report_sweep(sweep_embed(document, &viewer));

    // Again when the embed reports it finished loading.
    let doc = document.clone();
    let target = viewer.clone();
    let on_load = Closure::<dyn FnMut()>::new(move || report_sweep(sweep_embed(&doc, &target)));
    viewer.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
    on_load.forget();

    // And on a fixed period until the window closes. The handle keeps the
    // interval alive; the deadline takes it out and cancels it.
    let doc = document.clone();
    let target = viewer.clone();
    let ticker = Rc::new(RefCell::new(None::<Interval>));
    *ticker.borrow_mut() = Some(Interval::new(budget.period_ms(), move || {
        report_sweep(sweep_embed(&doc, &target));
    }));

    let deadline = Rc::clone(&ticker);
    Timeout::new(budget.window_ms(), move || {
        if let Some(interval) = deadline.borrow_mut().take() {
            interval.cancel();
        }
        log::debug!("logo sweep window closed");
    })
    .forget();
    Ok(())
}

/// One pass against the embed's shadow root: drop the branding node if it
/// is there and make sure the guard style is in place.
fn sweep_embed(document: &Document, viewer: &Element) -> Result<SweepOutcome, JsValue> {
    let Some(shadow) = viewer.shadow_root() else {
        return Ok(SweepOutcome::NoShadowRoot);
    };

    let mut outcome = SweepOutcome::Clean;
    if let Some(logo) = shadow.query_selector(LOGO_SELECTOR)? {
        logo.remove();
        outcome = SweepOutcome::LogoRemoved;
    }

    // The embed may wipe its shadow DOM between sweeps, so the guard is
    // re-checked every time but never duplicated.
    if shadow.query_selector(LOGO_GUARD_SELECTOR)?.is_none() {
        let guard = document.create_element("style")?;
        guard.set_attribute(LOGO_GUARD_ATTR, "")?;
        guard.set_text_content(Some(LOGO_GUARD_CSS));
        shadow.append_child(&guard)?;
    }
    Ok(outcome)
}

fn report_sweep(result: Result<SweepOutcome, JsValue>) {
    match result {
        Ok(SweepOutcome::LogoRemoved) => log::debug!("embed branding node removed"),
        Ok(_) => {}
        Err(err) => log::debug!("logo sweep failed: {err:?}"),
    }
}

// =============================================================
// Helpers
// =============================================================

/// Materialize the element nodes of a query result.
fn elements_of(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Create an element of an HTML tag known to the document.
fn create_html(document: &Document, tag: &str) -> Result<HtmlElement, JsValue> {
    Ok(document.create_element(tag)?.unchecked_into())
}

/// Append a `<style>` with the given rules to `<head>`.
fn inject_stylesheet(document: &Document, css: &str) -> Result<(), JsValue> {
    let style = document.create_element("style")?;
    style.set_text_content(Some(css));
    document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?
        .append_child(&style)?;
    Ok(())
}

/// Set one inline style property, logging failures instead of propagating.
/// Style writes are presentation-only and never abort the effect that
/// attempted them.
fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        log::debug!("could not set {property}: {err:?}");
    }
}
