//! Browser binding for the landing page.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlAnchorElement, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, PopStateEvent,
    ScrollBehavior, ScrollToOptions, Window,
};

use super::{
    Counter, PDF_VIEWER, REVEAL_SELECTOR, ScrollChrome, friendly_path, opens_pdf_directly,
    parse_stat, section_active, section_for_path,
};
use crate::config::{self, LandingConfig};
use crate::dom;
use crate::error::PortfolioResult;

const LANDING_CSS: &str = r#"
.nav-links a.active {
    color: var(--accent-primary) !important;
}
.project-card.visible,
.timeline-item.visible,
.skills-group.visible {
    opacity: 1 !important;
    transform: translateY(0) !important;
}
"#;

const NAV_SHADOW: &str = "0 4px 20px rgba(0, 0, 0, 0.3)";

fn report(result: PortfolioResult<()>) {
    if let Err(err) = result {
        log::warn!("landing: {err}");
    }
}

fn open_tab(url: &str) {
    if let Some(w) = web_sys::window() {
        w.open_with_url_and_target(url, "_blank").ok();
    }
}

// --- Section navigation -----------------------------------------------------

fn smooth_scroll(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn nav_height(doc: &Document) -> f64 {
    dom::query::<HtmlElement>(doc, ".nav")
        .map(|nav| f64::from(nav.offset_height()))
        .unwrap_or(0.0)
}

/// Scroll so the section starts right under the navbar. Unknown anchors are
/// ignored.
fn scroll_to_section(doc: &Document, hash: &str) -> PortfolioResult<()> {
    let Ok(target) = dom::query::<Element>(doc, hash) else {
        return Ok(());
    };
    let window = dom::window()?;
    let top = target.get_bounding_client_rect().top() + window.scroll_y()? - nav_height(doc);
    smooth_scroll(&window, top);
    Ok(())
}

/// `{ section: hash | null }`, the history state read back on popstate.
fn section_state(hash: Option<&str>) -> PortfolioResult<JsValue> {
    let state = Object::new();
    let value = hash.map(JsValue::from_str).unwrap_or(JsValue::NULL);
    Reflect::set(&state, &JsValue::from_str("section"), &value)?;
    Ok(state.into())
}

fn push_url(hash: Option<&str>, url: &str) -> PortfolioResult<()> {
    dom::window()?
        .history()?
        .push_state_with_url(&section_state(hash)?, "", Some(url))?;
    Ok(())
}

fn go_home() -> PortfolioResult<()> {
    smooth_scroll(&dom::window()?, 0.0);
    push_url(None, "/")
}

fn follow_anchor(doc: &Document, hash: &str) -> PortfolioResult<()> {
    if dom::query::<Element>(doc, hash).is_err() {
        return Ok(());
    }
    scroll_to_section(doc, hash)?;
    push_url(Some(hash), friendly_path(hash).unwrap_or(hash))
}

fn install_nav_toggle(doc: &Document) -> PortfolioResult<()> {
    let (Ok(toggle), Ok(links)) = (
        dom::query::<Element>(doc, ".nav-toggle"),
        dom::query::<Element>(doc, ".nav-links"),
    ) else {
        return Ok(());
    };

    let (t, l) = (toggle.clone(), links.clone());
    dom::listen(&toggle, "click", move |_| {
        l.class_list().toggle("active").ok();
        t.class_list().toggle("active").ok();
    })?;

    // picking a destination closes the mobile menu
    for link in dom::query_all(doc, ".nav-links a") {
        let (t, l) = (toggle.clone(), links.clone());
        dom::listen(&link, "click", move |_| {
            l.class_list().remove_1("active").ok();
            t.class_list().remove_1("active").ok();
        })?;
    }
    Ok(())
}

fn install_section_links(doc: &Document) -> PortfolioResult<()> {
    if let Ok(logo) = dom::query::<Element>(doc, ".nav-logo") {
        dom::listen(&logo, "click", |e| {
            e.prevent_default();
            report(go_home());
        })?;
    }
    for anchor in dom::query_all(doc, r##"a[href^="#"]"##) {
        let Some(hash) = anchor.get_attribute("href") else {
            continue;
        };
        let doc = doc.clone();
        dom::listen(&anchor, "click", move |e| {
            e.prevent_default();
            report(follow_anchor(&doc, &hash));
        })?;
    }
    Ok(())
}

/// Deep links: `/#about` is rewritten to `/sobre`, `/sobre` scrolls to
/// `#about`.
fn handle_initial_url(doc: &Document, delay_ms: i32) -> PortfolioResult<()> {
    let window = dom::window()?;
    let location = window.location();
    let hash = location.hash()?;
    let section = if !hash.is_empty() {
        if let Some(path) = friendly_path(&hash) {
            window
                .history()?
                .replace_state_with_url(&section_state(Some(&hash))?, "", Some(path))?;
        }
        hash
    } else if let Some(hash) = section_for_path(&location.pathname()?) {
        hash.to_string()
    } else {
        return Ok(());
    };
    let doc = doc.clone();
    dom::set_timeout(delay_ms, move || report(scroll_to_section(&doc, &section)))?;
    Ok(())
}

fn on_popstate(doc: &Document, event: &Event) -> PortfolioResult<()> {
    let section = event
        .dyn_ref::<PopStateEvent>()
        .map(PopStateEvent::state)
        .filter(JsValue::is_object)
        .and_then(|state| Reflect::get(&state, &JsValue::from_str("section")).ok())
        .and_then(|value| value.as_string());
    if let Some(hash) = section {
        return scroll_to_section(doc, &hash);
    }

    let window = dom::window()?;
    let path = window.location().pathname()?;
    if let Some(hash) = section_for_path(&path) {
        scroll_to_section(doc, hash)?;
    } else if path == "/" {
        smooth_scroll(&window, 0.0);
    }
    Ok(())
}

// --- Scroll-driven chrome ---------------------------------------------------

fn install_scroll_chrome(doc: &Document, window: &Window, cfg: LandingConfig) -> PortfolioResult<()> {
    let nav = dom::query::<HtmlElement>(doc, ".nav").ok();
    let indicator = dom::query::<HtmlElement>(doc, ".hero-scroll").ok();
    let sections: Vec<(HtmlElement, Element)> = dom::query_all(doc, "section[id]")
        .into_iter()
        .filter_map(|section| section.dyn_into::<HtmlElement>().ok())
        .filter_map(|section| {
            let selector = format!(r##".nav-links a[href="#{}"]"##, section.id());
            let link = doc.query_selector(&selector).ok().flatten()?;
            Some((section, link))
        })
        .collect();

    let win = window.clone();
    dom::listen(window, "scroll", move |_| {
        let y = win.scroll_y().unwrap_or(0.0);
        let chrome = ScrollChrome::at(y, &cfg);
        if let Some(nav) = &nav {
            let shadow = if chrome.nav_shadow { NAV_SHADOW } else { "none" };
            nav.style().set_property("box-shadow", shadow).ok();
        }
        if let Some(indicator) = &indicator {
            let (opacity, events) = if chrome.indicator_visible { ("1", "auto") } else { ("0", "none") };
            dom::set_styles(indicator, &[("opacity", opacity), ("pointer-events", events)]);
        }
        for (section, link) in &sections {
            let top = f64::from(section.offset_top());
            let height = f64::from(section.offset_height());
            let active = section_active(y, top, height, cfg.section_offset);
            link.class_list().toggle_with_force("active", active).ok();
        }
    })?;
    Ok(())
}

// --- Reveal and stats -------------------------------------------------------

fn observer(
    threshold: f64,
    mut on_entry: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
) -> PortfolioResult<IntersectionObserver> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                on_entry(&entry, &observer);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    Ok(observer)
}

fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

fn install_reveal(doc: &Document, window: &Window, cfg: &LandingConfig) -> PortfolioResult<()> {
    let targets: Vec<HtmlElement> = dom::query_all(doc, REVEAL_SELECTOR)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();
    if prefers_reduced_motion(window) {
        for el in &targets {
            dom::set_styles(el, &[("opacity", "1"), ("transform", "none"), ("transition", "none")]);
        }
        return Ok(());
    }

    let observer = observer(cfg.reveal_threshold, |entry, _| {
        if entry.is_intersecting() {
            entry.target().class_list().add_1("visible").ok();
        }
    })?;
    for el in &targets {
        dom::set_styles(
            el,
            &[
                ("opacity", "0"),
                ("transform", "translateY(20px)"),
                ("transition", "opacity 0.6s ease, transform 0.6s ease"),
            ],
        );
        observer.observe(el);
    }
    Ok(())
}

fn animate_counter(el: Element, mut counter: Counter) {
    dom::frame_loop(move |_| {
        let (label, more) = counter.step();
        el.set_text_content(Some(&label));
        more
    });
}

/// Count the hero stats up once, the first time they are half visible.
fn install_stats(doc: &Document, cfg: &LandingConfig) -> PortfolioResult<()> {
    let Ok(stats) = dom::query::<Element>(doc, ".hero-stats") else {
        return Ok(());
    };
    let duration = cfg.counter_duration_ms;
    let observer = observer(cfg.stats_threshold, move |entry, observer| {
        if !entry.is_intersecting() {
            return;
        }
        let target = entry.target();
        for stat in dom::query_all_in(&target, ".stat-number") {
            let Some(value) = stat.text_content().as_deref().and_then(parse_stat) else {
                continue;
            };
            let classes = stat.class_list();
            if classes.contains("animated") {
                continue;
            }
            classes.add_1("animated").ok();
            animate_counter(stat, Counter::new(value, duration));
        }
        observer.unobserve(&target);
    })?;
    observer.observe(&stats);
    Ok(())
}

// --- Cards and links --------------------------------------------------------

fn install_project_cards(doc: &Document) -> PortfolioResult<()> {
    for card in dom::query_all(doc, ".project-card") {
        let Ok(card) = card.dyn_into::<HtmlElement>() else {
            continue;
        };

        // spotlight position for the hover gradient
        let hovered = card.clone();
        dom::listen(&card, "mouseenter", move |e| {
            let Some(e) = e.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = hovered.get_bounding_client_rect();
            let x = f64::from(e.client_x()) - rect.left();
            let y = f64::from(e.client_y()) - rect.top();
            let style = hovered.style();
            style.set_property("--mouse-x", &format!("{x}px")).ok();
            style.set_property("--mouse-y", &format!("{y}px")).ok();
        })?;

        if let Some(href) = card.get_attribute("data-href") {
            dom::listen(&card, "click", move |e| {
                let on_link = e
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .and_then(|t| t.closest("a").ok().flatten())
                    .is_some();
                if !on_link {
                    open_tab(&href);
                }
            })?;
        }
    }
    Ok(())
}

fn pdf_url(href: &str) -> PortfolioResult<String> {
    let location = dom::window()?.location();
    if opens_pdf_directly(&location.hostname()?, &location.protocol()?) {
        return Ok(href.to_string());
    }
    let viewer = web_sys::Url::new(PDF_VIEWER)?;
    let params = viewer.search_params();
    params.set("url", href);
    params.set("embedded", "true");
    Ok(viewer.href())
}

/// PDFs open in a tab instead of downloading.
fn install_pdf_links(doc: &Document) -> PortfolioResult<()> {
    for link in dom::query_all(doc, r#"a[href$=".pdf"]"#) {
        let Ok(anchor) = link.dyn_into::<HtmlAnchorElement>() else {
            continue;
        };
        let target = anchor.clone();
        dom::listen(&anchor, "click", move |e| {
            e.prevent_default();
            match pdf_url(&target.href()) {
                Ok(url) => open_tab(&url),
                Err(err) => log::warn!("pdf link: {err}"),
            }
        })?;
    }
    Ok(())
}

fn hide_work_badge(doc: &Document) {
    if let Ok(tagline) = dom::query::<HtmlElement>(doc, ".nav-tagline") {
        tagline.style().set_property("display", "none").ok();
    }
}

fn append_style(doc: &Document) -> PortfolioResult<()> {
    let style = doc.create_element("style")?;
    style.set_id("landing-style");
    style.set_text_content(Some(LANDING_CSS));
    if let Some(head) = doc.head() {
        head.append_child(&style)?;
    }
    Ok(())
}

/// Boot the landing page chrome. Runs alongside [`crate::start_effects`].
#[wasm_bindgen]
pub fn start_landing() -> Result<(), JsValue> {
    let document = dom::document()?;
    let window = dom::window()?;
    let cfg = config::current().landing;

    append_style(&document)?;
    if !cfg.available_for_work {
        hide_work_badge(&document);
    }
    install_nav_toggle(&document)?;
    install_section_links(&document)?;
    install_reveal(&document, &window, &cfg)?;
    install_stats(&document, &cfg)?;
    install_project_cards(&document)?;
    install_pdf_links(&document)?;

    let doc = document.clone();
    dom::listen(&window, "popstate", move |e| report(on_popstate(&doc, &e)))?;
    handle_initial_url(&document, cfg.initial_scroll_delay_ms)?;
    install_scroll_chrome(&document, &window, cfg)?;

    log::info!("landing page ready");
    Ok(())
}
