//! Browser binding for the desktop: builds window nodes from
//! `#window-template` and mirrors [`WindowManager`] records onto them.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use js_sys::{Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlTemplateElement, HtmlVideoElement, MouseEvent,
    TouchEvent,
};

use super::background::VideoRotation;
use super::{OpenOutcome, Viewport, WindowContent, WindowManager, WindowRecord, catalog};
use crate::config::{self, BackgroundConfig, BackgroundMode};
use crate::dom;
use crate::error::{PortfolioError, PortfolioResult};
use crate::lang::Lang;

struct DesktopView {
    manager: WindowManager,
    lang: Lang,
    document: Document,
    container: Element,
    template: HtmlTemplateElement,
    elements: HashMap<String, HtmlElement>,
}

thread_local! {
    static DESKTOP: RefCell<Option<DesktopView>> = const { RefCell::new(None) };
}

fn with_view<R>(f: impl FnOnce(&mut DesktopView) -> PortfolioResult<R>) -> PortfolioResult<R> {
    DESKTOP.with(|d| match d.borrow_mut().as_mut() {
        Some(view) => f(view),
        None => Err(PortfolioError::Dom("desktop not started".to_string())),
    })
}

fn report(result: PortfolioResult<()>) {
    if let Err(err) = result {
        log::warn!("desktop: {err}");
    }
}

fn current_viewport() -> Viewport {
    let (width, height) = dom::viewport_size();
    Viewport::new(width, height)
}

fn px(value: f64) -> String {
    format!("{value}px")
}

fn apply(el: &HtmlElement, record: &WindowRecord) -> PortfolioResult<()> {
    let style = el.style();
    let g = record.geometry;
    style.set_property("left", &px(g.x))?;
    style.set_property("top", &px(g.y))?;
    style.set_property("width", &px(g.width))?;
    style.set_property("height", &px(g.height))?;
    style.set_property("z-index", &record.z_index.to_string())?;
    let classes = el.class_list();
    classes.toggle_with_force("minimized", record.minimized)?;
    classes.toggle_with_force("maximized", record.maximized)?;
    classes.toggle_with_force("focused", record.focused)?;
    Ok(())
}

fn target_has_class(event: &Event, class: &str) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .is_some_and(|el| el.class_list().contains(class))
}

impl DesktopView {
    fn sync(&self) -> PortfolioResult<()> {
        for record in self.manager.windows() {
            if let Some(el) = self.elements.get(&record.id) {
                apply(el, record)?;
            }
        }
        self.update_dock()
    }

    fn update_dock(&self) -> PortfolioResult<()> {
        for item in dom::query_all(&self.document, ".dock-item[data-window]") {
            if let Some(id) = item.get_attribute("data-window") {
                item.class_list().toggle_with_force("active", self.manager.is_open(&id))?;
            }
        }
        Ok(())
    }

    /// Clone the template for `content` and append it to the container.
    fn build(&mut self, content: &WindowContent) -> PortfolioResult<HtmlElement> {
        let fragment = self
            .template
            .content()
            .clone_node_with_deep(true)?
            .dyn_into::<web_sys::DocumentFragment>()
            .map_err(|_| PortfolioError::Dom("template content".to_string()))?;
        let el = fragment
            .query_selector(".window")?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| PortfolioError::MissingElement("#window-template .window".to_string()))?;

        el.set_attribute("data-id", content.id)?;
        if let Some(title) = el.query_selector(".window-title")? {
            title.set_text_content(Some(content.title));
        }
        if let Some(body) = el.query_selector(".window-content")? {
            body.set_inner_html(content.html);
        }
        let handle = self.document.create_element("div")?;
        handle.set_class_name("resize-handle");
        el.append_child(&handle)?;

        self.container.append_child(&el)?;
        self.elements.insert(content.id.to_string(), el.clone());
        Ok(el)
    }

    fn pointer_moved(&mut self, pointer: (f64, f64)) -> PortfolioResult<()> {
        let moved = if self.manager.is_dragging() {
            self.manager.drag_to(pointer)
        } else if self.manager.is_resizing() {
            self.manager.resize_to(pointer)
        } else {
            None
        };
        match moved.and_then(|record| self.elements.get(&record.id).map(|el| (el, record))) {
            Some((el, record)) => apply(el, record),
            None => Ok(()),
        }
    }
}

// --- Window operations ------------------------------------------------------

pub fn open_window(id: &str) -> PortfolioResult<()> {
    let viewport = current_viewport();
    let created = with_view(|view| {
        let outcome = view.manager.open(id, view.lang, viewport)?;
        let created = match outcome {
            OpenOutcome::Created => {
                let content = catalog::lookup(id, view.lang)
                    .ok_or_else(|| PortfolioError::UnknownWindow(id.to_string()))?;
                Some(view.build(content)?)
            }
            OpenOutcome::Reopened => {
                if let Some(el) = view.elements.get(id) {
                    el.style().remove_property("animation")?;
                }
                None
            }
            OpenOutcome::Focused => None,
        };
        view.sync()?;
        Ok(created)
    })?;
    if let Some(el) = created {
        wire_window(id, &el)?;
    }
    Ok(())
}

fn close_window(id: &str) -> PortfolioResult<()> {
    let delay = with_view(|view| {
        if !view.manager.close(id) {
            return Ok(None);
        }
        if let Some(el) = view.elements.get(id) {
            el.style().set_property("animation", "windowOpen 0.15s ease-out reverse")?;
        }
        view.update_dock()?;
        Ok(Some(view.manager.config().close_animation_ms))
    })?;
    if let Some(ms) = delay {
        let id = id.to_string();
        dom::set_timeout(ms, move || report(finish_close(&id)))?;
    }
    Ok(())
}

fn finish_close(id: &str) -> PortfolioResult<()> {
    with_view(|view| {
        if view.manager.finish_close(id) {
            if let Some(el) = view.elements.remove(id) {
                el.remove();
            }
        }
        view.sync()
    })
}

fn update(id: &str, op: impl FnOnce(&mut WindowManager, &str, Viewport) -> bool) -> PortfolioResult<()> {
    let viewport = current_viewport();
    with_view(|view| {
        if op(&mut view.manager, id, viewport) {
            view.sync()?;
        }
        Ok(())
    })
}

fn dock_click(id: &str) -> PortfolioResult<()> {
    let viewport = current_viewport();
    // new and closing windows go through `open_window`, which owns the element
    let needs_open = with_view(|view| Ok(view.manager.get(id).is_none_or(|w| w.closing)))?;
    if needs_open {
        return open_window(id);
    }
    with_view(|view| {
        let lang = view.lang;
        view.manager.dock_activate(id, lang, viewport)?;
        view.sync()
    })
}

// --- Listeners --------------------------------------------------------------

fn on(
    root: &Element,
    selector: &str,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> PortfolioResult<()> {
    if let Some(target) = root.query_selector(selector)? {
        dom::listen(&target, event, handler)?;
    }
    Ok(())
}

fn wire_window(id: &str, el: &HtmlElement) -> PortfolioResult<()> {
    let owned = || id.to_string();

    let wid = owned();
    on(el, ".window-btn.close", "click", move |_| report(close_window(&wid)))?;
    let wid = owned();
    on(el, ".window-btn.minimize", "click", move |_| {
        report(update(&wid, |m, id, _| m.minimize(id)))
    })?;
    let wid = owned();
    on(el, ".window-btn.maximize", "click", move |_| {
        report(update(&wid, |m, id, vp| m.toggle_maximize(id, vp)))
    })?;
    let wid = owned();
    on(el, ".window-header", "dblclick", move |e| {
        if !target_has_class(&e, "window-btn") {
            report(update(&wid, |m, id, vp| m.toggle_maximize(id, vp)));
        }
    })?;

    let wid = owned();
    dom::listen(el, "mousedown", move |_| report(update(&wid, |m, id, _| m.focus(id))))?;

    let wid = owned();
    on(el, ".window-header", "mousedown", move |e| {
        if target_has_class(&e, "window-btn") {
            return;
        }
        if let Some(me) = e.dyn_ref::<MouseEvent>() {
            let pointer = (f64::from(me.client_x()), f64::from(me.client_y()));
            if report_begin(with_view(|v| Ok(v.manager.begin_drag(&wid, pointer)))) {
                e.prevent_default();
            }
        }
    })?;

    let wid = owned();
    on(el, ".window-header", "touchstart", move |e| {
        if target_has_class(&e, "window-btn") {
            return;
        }
        if let Some(pointer) = e.dyn_ref::<TouchEvent>().and_then(first_touch) {
            report_begin(with_view(|v| Ok(v.manager.begin_drag(&wid, pointer))));
        }
    })?;

    let wid = owned();
    on(el, ".resize-handle", "mousedown", move |e| {
        if let Some(me) = e.dyn_ref::<MouseEvent>() {
            let pointer = (f64::from(me.client_x()), f64::from(me.client_y()));
            if report_begin(with_view(|v| Ok(v.manager.begin_resize(&wid, pointer)))) {
                e.prevent_default();
            }
        }
    })?;

    if id == "opensource" {
        for card in dom::query_all_in(el, ".opensource-card") {
            let Some(project) = card.get_attribute("data-project") else {
                continue;
            };
            dom::listen(&card, "click", move |_| report(open_window(&project)))?;
        }
    }
    Ok(())
}

fn report_begin(result: PortfolioResult<bool>) -> bool {
    result.unwrap_or_else(|err| {
        log::warn!("desktop: {err}");
        false
    })
}

fn first_touch(event: &TouchEvent) -> Option<(f64, f64)> {
    let touch = event.touches().get(0)?;
    Some((f64::from(touch.client_x()), f64::from(touch.client_y())))
}

/// Document-level move / release listeners shared by every drag and resize.
fn install_pointer_tracking(document: &Document) -> PortfolioResult<()> {
    dom::listen(document, "mousemove", |e| {
        if let Some(me) = e.dyn_ref::<MouseEvent>() {
            let pointer = (f64::from(me.client_x()), f64::from(me.client_y()));
            report(with_view(|v| v.pointer_moved(pointer)));
        }
    })?;
    dom::listen(document, "mouseup", |_| {
        report(with_view(|v| {
            v.manager.end_drag();
            v.manager.end_resize();
            Ok(())
        }))
    })?;
    dom::listen(document, "touchmove", |e| {
        if let Some(pointer) = e.dyn_ref::<TouchEvent>().and_then(first_touch) {
            report(with_view(|v| v.pointer_moved(pointer)));
        }
    })?;
    dom::listen(document, "touchend", |_| {
        report(with_view(|v| {
            v.manager.end_drag();
            Ok(())
        }))
    })?;
    Ok(())
}

fn install_launchers(document: &Document) -> PortfolioResult<()> {
    for icon in dom::query_all(document, ".desktop-icon") {
        let target = icon.get_attribute("data-window");
        let selected = icon.clone();
        let doc = document.clone();
        dom::listen(&icon, "click", move |_| {
            for other in dom::query_all(&doc, ".desktop-icon") {
                other.class_list().remove_1("selected").ok();
            }
            selected.class_list().add_1("selected").ok();
            if let Some(id) = target.as_deref() {
                report(open_window(id));
            }
        })?;
        if let Some(id) = icon.get_attribute("data-window") {
            dom::listen(&icon, "dblclick", move |_| report(open_window(&id)))?;
        }
    }

    for item in dom::query_all(document, ".dock-item") {
        let window_id = item.get_attribute("data-window");
        let link = item.get_attribute("data-link");
        dom::listen(&item, "click", move |_| {
            if let Some(url) = link.as_deref() {
                if let Ok(w) = dom::window() {
                    w.open_with_url_and_target(url, "_blank").ok();
                }
            } else if let Some(id) = window_id.as_deref() {
                report(dock_click(id));
            }
        })?;
    }

    let desktop = dom::by_id::<Element>(document, "desktop")?;
    let doc = document.clone();
    dom::listen(&desktop, "click", move |e| {
        let on_background = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .is_some_and(|el| el.id() == "desktop" || el.class_list().contains("desktop-icons"));
        if on_background {
            for icon in dom::query_all(&doc, ".desktop-icon") {
                icon.class_list().remove_1("selected").ok();
            }
        }
    })?;
    Ok(())
}

// --- Panel clock and background ---------------------------------------------

fn clock_options() -> Result<Object, JsValue> {
    let options = Object::new();
    for (key, value) in [
        ("weekday", "short"),
        ("day", "numeric"),
        ("month", "short"),
        ("hour", "2-digit"),
        ("minute", "2-digit"),
    ] {
        Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(value))?;
    }
    Ok(options)
}

fn start_clock(document: &Document, lang: Lang) -> PortfolioResult<()> {
    let Some(clock) = document.get_element_by_id("clock") else {
        return Ok(());
    };
    let options = clock_options()?;
    let tick = move || {
        let label = js_sys::Date::new_0().to_locale_date_string(lang.locale(), &options);
        clock.set_text_content(Some(&String::from(label)));
    };
    tick();
    dom::set_interval(1000, tick)?;
    Ok(())
}

fn start_wallpaper_rotation(document: &Document, interval_ms: i32) -> PortfolioResult<()> {
    let wallpapers = dom::query_all(document, ".wallpaper");
    if wallpapers.len() < 2 {
        return Ok(());
    }
    let current = Cell::new(0usize);
    dom::set_interval(interval_ms, move || {
        let index = current.get();
        let next = (index + 1) % wallpapers.len();
        wallpapers[index].class_list().remove_1("active").ok();
        wallpapers[next].class_list().add_1("active").ok();
        current.set(next);
    })?;
    Ok(())
}

fn set_display(document: &Document, id: &str, visible: bool) {
    if let Ok(el) = dom::by_id::<HtmlElement>(document, id) {
        el.style().set_property("display", if visible { "block" } else { "none" }).ok();
    }
}

fn load_clip(player: &HtmlVideoElement, src: &str) {
    player.set_src(src);
    player.load();
}

fn start_video_rotation(document: &Document, cfg: BackgroundConfig) -> PortfolioResult<()> {
    let Some(mut rotation) = VideoRotation::new(cfg.videos) else {
        return Ok(());
    };
    let (Ok(first), Ok(second)) = (
        dom::by_id::<HtmlVideoElement>(document, "bg-video-1"),
        dom::by_id::<HtmlVideoElement>(document, "bg-video-2"),
    ) else {
        log::warn!("video background without #bg-video-1 / #bg-video-2");
        return Ok(());
    };

    load_clip(&first, rotation.current());
    first.play().ok();
    first.class_list().add_1("active").ok();
    load_clip(&second, rotation.upcoming());

    let players = [first, second];
    let preload_delay = cfg.preload_delay_ms;
    dom::set_interval(cfg.video_rotation_ms, move || {
        let fade = rotation.advance();
        let shown = &players[fade.show];
        shown.play().ok();
        shown.class_list().add_1("active").ok();
        let hidden = players[fade.hide].clone();
        hidden.class_list().remove_1("active").ok();
        let src = fade.preload.to_string();
        report(dom::set_timeout(preload_delay, move || load_clip(&hidden, &src)).map(|_| ()));
    })?;
    Ok(())
}

fn start_background(document: &Document, cfg: BackgroundConfig, wallpaper_ms: i32) -> PortfolioResult<()> {
    let video = cfg.mode == BackgroundMode::Video;
    set_display(document, "video-bg", video);
    set_display(document, "wallpaper-bg", !video);
    if video {
        if document.get_element_by_id("video-bg").is_some() {
            start_video_rotation(document, cfg)?;
        }
        Ok(())
    } else {
        start_wallpaper_rotation(document, wallpaper_ms)
    }
}

/// Boot the desktop page.
#[wasm_bindgen]
pub fn start_desktop() -> Result<(), JsValue> {
    let document = dom::document()?;
    let container = dom::by_id::<Element>(&document, "windows-container")?;
    let template = dom::by_id::<HtmlTemplateElement>(&document, "window-template")?;
    let lang = dom::page_lang(&document);
    let site = config::current();
    let desktop_config = site.desktop;
    let interval = desktop_config.wallpaper_interval_ms;

    DESKTOP.with(|d| {
        *d.borrow_mut() = Some(DesktopView {
            manager: WindowManager::new(desktop_config),
            lang,
            document: document.clone(),
            container,
            template,
            elements: HashMap::new(),
        })
    });

    install_pointer_tracking(&document)?;
    install_launchers(&document)?;
    start_clock(&document, lang)?;
    start_background(&document, site.background, interval)?;

    let window = dom::window()?;
    dom::listen(&window, "resize", |_| {
        let viewport = current_viewport();
        report(with_view(|v| {
            v.manager.relayout(viewport);
            v.sync()
        }))
    })?;

    log::info!("desktop ready ({})", lang.code());
    Ok(())
}

/// Open a window from page script (e.g. a deep link).
#[wasm_bindgen]
pub fn desktop_open(id: &str) -> Result<(), JsValue> {
    open_window(id).map_err(JsValue::from)
}
