//! Browser binding for the terminal page.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, KeyboardEvent};

use super::{Action, Response, Terminal};
use crate::dom;
use crate::error::PortfolioResult;

struct TerminalView {
    terminal: Terminal,
    document: Document,
    output: Element,
    input: HtmlInputElement,
    body: Element,
    path: Option<Element>,
}

thread_local! {
    static TERMINAL: RefCell<Option<TerminalView>> = const { RefCell::new(None) };
}

fn with_view<R>(f: impl FnOnce(&mut TerminalView) -> R) -> Option<R> {
    TERMINAL.with(|t| t.borrow_mut().as_mut().map(f))
}

impl TerminalView {
    fn append(&self, class: Option<&str>, html: &str) -> PortfolioResult<()> {
        let div = self.document.create_element("div")?;
        if let Some(class) = class {
            div.set_class_name(class);
        }
        div.set_inner_html(html);
        self.output.append_child(&div)?;
        Ok(())
    }

    fn perform(&self, action: &Action) -> PortfolioResult<()> {
        match action {
            Action::Line { html, kind } => {
                self.append(Some(&format!("output-line {}", kind.class())), html)?
            }
            Action::Block(html) => self.append(None, html)?,
            Action::LocalTime => {
                let now = js_sys::Date::new_0().to_locale_string("pt-BR", &JsValue::UNDEFINED);
                self.append(Some("output-line info"), &String::from(now))?;
            }
            Action::Clear => self.output.set_inner_html(""),
            Action::OpenUrl(url) => {
                dom::window()?.open_with_url_and_target(url, "_blank")?;
            }
            Action::Glitch(on) => {
                if let Some(body) = self.document.body() {
                    body.class_list().toggle_with_force("glitch", *on)?;
                }
            }
        }
        Ok(())
    }

    fn perform_all(&self, actions: &[Action]) {
        for action in actions {
            if let Err(err) = self.perform(action) {
                log::warn!("terminal: {err}");
            }
        }
        self.body.set_scroll_top(self.body.scroll_height());
    }

    fn submit(&mut self) {
        let line = self.input.value();
        self.input.set_value("");
        let Response { actions, delayed } = self.terminal.execute(&line);
        if let Some(path) = self.path.as_ref() {
            path.set_text_content(Some(self.terminal.path()));
        }
        self.perform_all(&actions);
        for batch in delayed {
            let scheduled = dom::set_timeout(batch.after_ms, move || {
                with_view(|view| view.perform_all(&batch.actions));
            });
            if let Err(err) = scheduled {
                log::warn!("terminal: {err}");
            }
        }
    }

    fn on_key(&mut self, event: &KeyboardEvent) {
        match event.key().as_str() {
            "Enter" => {
                event.prevent_default();
                self.submit();
            }
            "ArrowUp" | "ArrowDown" => {
                event.prevent_default();
                let older = event.key() == "ArrowUp";
                if let Some(text) = self.terminal.recall(older) {
                    self.input.set_value(text);
                }
            }
            "Tab" => {
                event.prevent_default();
                if let Some(name) = super::complete(&self.input.value()) {
                    self.input.set_value(name);
                }
            }
            "l" if event.ctrl_key() => {
                event.prevent_default();
                self.output.set_inner_html("");
            }
            _ => {}
        }
    }
}

/// Boot the terminal on `terminal.html`.
#[wasm_bindgen]
pub fn start_terminal() -> Result<(), JsValue> {
    let document = dom::document()?;
    let input = dom::by_id::<HtmlInputElement>(&document, "terminal-input")?;
    let body = dom::by_id::<Element>(&document, "terminal-body")?;

    let view = TerminalView {
        terminal: Terminal::new(),
        output: dom::by_id(&document, "terminal-output")?,
        input: input.clone(),
        body: body.clone(),
        path: document.query_selector(".prompt .path")?,
        document: document.clone(),
    };
    let welcome = view.terminal.welcome();
    view.perform_all(&[welcome]);
    TERMINAL.with(|t| *t.borrow_mut() = Some(view));

    dom::listen(&input, "keydown", |e| {
        if let Some(ke) = e.dyn_ref::<KeyboardEvent>() {
            with_view(|view| view.on_key(ke));
        }
    })?;

    let focus_target = input.clone();
    dom::listen(&body, "click", move |_| {
        focus_target.focus().ok();
    })?;

    let doc = document.clone();
    dom::listen(&input, "input", move |_| {
        if let Some(hint) = doc
            .query_selector(".mobile-hint")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            hint.style().set_property("opacity", "0.3").ok();
        }
    })?;

    log::info!("terminal ready");
    Ok(())
}
