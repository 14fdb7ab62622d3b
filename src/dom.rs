//! Small helpers shared by the browser bindings: element lookup, listeners,
//! timers and the `requestAnimationFrame` loop.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, Event, EventTarget, HtmlCanvasElement,
    HtmlElement, NodeList, Window,
};

use crate::error::{PortfolioError, PortfolioResult};

pub fn window() -> PortfolioResult<Window> {
    web_sys::window().ok_or(PortfolioError::MissingWindow)
}

pub fn document() -> PortfolioResult<Document> {
    window()?.document().ok_or(PortfolioError::MissingWindow)
}

/// `document.getElementById` cast to the requested element type.
pub fn by_id<T: JsCast>(doc: &Document, id: &str) -> PortfolioResult<T> {
    doc.get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| PortfolioError::MissingElement(format!("#{id}")))
}

pub fn query<T: JsCast>(doc: &Document, selector: &str) -> PortfolioResult<T> {
    doc.query_selector(selector)?
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| PortfolioError::MissingElement(selector.to_string()))
}

pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    doc.query_selector_all(selector).map(elements).unwrap_or_default()
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector).map(elements).unwrap_or_default()
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> PortfolioResult<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")?
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or_else(|| PortfolioError::Dom(format!("no 2d context on #{}", canvas.id())))
}

pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Attach a listener for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> PortfolioResult<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) -> PortfolioResult<i32> {
    let callback = Closure::once_into_js(f);
    let id = window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)?;
    Ok(id)
}

pub fn set_interval(ms: i32, f: impl FnMut() + 'static) -> PortfolioResult<i32> {
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let id = window()?.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        ms,
    )?;
    closure.forget();
    Ok(id)
}

pub fn clear_interval(id: i32) {
    if let Some(w) = web_sys::window() {
        w.clear_interval_with_handle(id);
    }
}

/// Apply inline style properties, ignoring rejected values.
pub fn set_styles(el: &HtmlElement, props: &[(&str, &str)]) {
    let style = el.style();
    for (name, value) in props {
        style.set_property(name, value).ok();
    }
}

pub fn viewport_size() -> (f64, f64) {
    let Some(w) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

/// Read a query-string parameter from the current page URL.
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search).ok()?.get(name)
}

/// `<body data-lang>` of the current page.
pub fn page_lang(doc: &Document) -> crate::lang::Lang {
    doc.body()
        .and_then(|b| b.get_attribute("data-lang"))
        .map(|v| crate::lang::Lang::from_page_attr(&v))
        .unwrap_or_default()
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Run `tick` on every animation frame until it returns `false`.
pub fn frame_loop(mut tick: impl FnMut(f64) -> bool + 'static) {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        if !tick(ts) {
            // The closure stays in its own slot; it just stops rescheduling.
            return;
        }
        if let (Some(w), Some(cb)) = (web_sys::window(), f.borrow().as_ref()) {
            w.request_animation_frame(cb.as_ref().unchecked_ref()).ok();
        }
    }) as Box<dyn FnMut(f64)>));
    if let (Some(w), Some(cb)) = (web_sys::window(), g.borrow().as_ref()) {
        w.request_animation_frame(cb.as_ref().unchecked_ref()).ok();
    }
}
