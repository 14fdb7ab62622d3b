//! Browser binding for the office game (`game.html`).

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent};

use super::game::{self, Frame, Game};
use super::player::Key;
use super::render;
use super::rooms::RoomContent;
use crate::config;
use crate::dom;
use crate::error::{PortfolioError, PortfolioResult};

struct OfficeView {
    game: Game,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    minimap: HtmlCanvasElement,
    minimap_ctx: CanvasRenderingContext2d,
    location: Option<Element>,
    prompt: HtmlElement,
    overlay: Element,
    modal_title: Element,
    modal_icon: Element,
    modal_content: Element,
    welcome: Option<Element>,
}

thread_local! {
    static OFFICE: RefCell<Option<OfficeView>> = const { RefCell::new(None) };
}

fn with_view<R>(f: impl FnOnce(&mut OfficeView) -> R) -> Option<R> {
    OFFICE.with(|o| o.borrow_mut().as_mut().map(f))
}

impl OfficeView {
    fn resize(&mut self) {
        let (width, height) = dom::viewport_size();
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.game.resize(width, height);
        let size = self.game.config().minimap_size;
        self.minimap.set_width(size);
        self.minimap.set_height(size);
        self.ctx.set_image_smoothing_enabled(false);
        self.minimap_ctx.set_image_smoothing_enabled(false);
    }

    fn apply(&self, frame: &Frame) {
        if let (Some(room), Some(label)) = (frame.entered, self.location.as_ref()) {
            label.set_text_content(Some(room.name));
        }
        let classes = self.prompt.class_list();
        match frame.prompt {
            Some(room) => {
                self.prompt.set_text_content(Some(&game::prompt_text(room)));
                classes.add_1("visible").ok();
            }
            None => {
                classes.remove_1("visible").ok();
            }
        }
        if let Some(content) = frame.opened {
            self.show_modal(content);
        }
    }

    fn show_modal(&self, content: &RoomContent) {
        self.modal_icon.set_text_content(Some(content.icon));
        self.modal_title.set_text_content(Some(content.title));
        self.modal_content.set_inner_html(content.html);
        self.overlay.class_list().add_1("active").ok();
    }

    fn close_modal(&mut self) {
        self.game.close_modal();
        self.overlay.class_list().remove_1("active").ok();
    }

    fn render(&self) {
        let tile = self.game.config().tile_size;
        let player = self.game.player();
        render::draw_scene(&self.ctx, self.game.layout(), tile, player);
        if let Some(p) = player {
            let size = f64::from(self.game.config().minimap_size);
            render::draw_minimap(&self.minimap_ctx, (p.tile_x, p.tile_y), size, size, tile);
        }
    }
}

fn start_game() {
    let started = with_view(|view| {
        if let Some(welcome) = view.welcome.as_ref() {
            welcome.class_list().add_1("hidden").ok();
        }
        view.game.start()
    });
    if started != Some(true) {
        return;
    }
    dom::frame_loop(|_ts| {
        with_view(|view| {
            let frame = view.game.tick();
            view.apply(&frame);
            view.render();
        })
        .is_some()
    });
}

fn on_key(event: &KeyboardEvent, pressed: bool) {
    let name = event.key();
    if pressed && name == "Escape" {
        with_view(OfficeView::close_modal);
        return;
    }
    if let Some(key) = Key::from_key_name(&name) {
        with_view(|view| view.game.key(key, pressed));
        if pressed {
            event.prevent_default();
        }
    }
}

fn create_prompt() -> PortfolioResult<HtmlElement> {
    let document = dom::document()?;
    let prompt = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| PortfolioError::Dom("interaction prompt".to_string()))?;
    prompt.set_class_name("interaction-prompt");
    document
        .body()
        .ok_or_else(|| PortfolioError::MissingElement("body".to_string()))?
        .append_child(&prompt)?;
    Ok(prompt)
}

/// Boot the office explorer on `game.html`.
#[wasm_bindgen]
pub fn start_office() -> Result<(), JsValue> {
    let document = dom::document()?;
    let canvas = dom::by_id::<HtmlCanvasElement>(&document, "game-canvas")?;
    let minimap = dom::by_id::<HtmlCanvasElement>(&document, "minimap-canvas")?;
    let overlay = dom::by_id::<Element>(&document, "modal-overlay")?;

    let mut view = OfficeView {
        game: Game::new(config::current().game),
        ctx: dom::context_2d(&canvas)?,
        minimap_ctx: dom::context_2d(&minimap)?,
        canvas: canvas.clone(),
        minimap,
        location: document.query_selector(".location-name")?,
        prompt: create_prompt()?,
        overlay: overlay.clone(),
        modal_title: dom::by_id(&document, "modal-title")?,
        modal_icon: dom::by_id(&document, "modal-icon")?,
        modal_content: dom::by_id(&document, "modal-content")?,
        welcome: document.get_element_by_id("welcome-screen"),
    };
    view.resize();
    OFFICE.with(|o| *o.borrow_mut() = Some(view));

    if let Some(start) = document.get_element_by_id("start-btn") {
        dom::listen(&start, "click", |_| start_game())?;
    }
    if let Some(close) = document.get_element_by_id("modal-close") {
        dom::listen(&close, "click", |_| {
            with_view(OfficeView::close_modal);
        })?;
    }
    let backdrop = overlay.clone();
    dom::listen(&overlay, "click", move |e| {
        let on_backdrop = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .is_some_and(|el| el == backdrop);
        if on_backdrop {
            with_view(OfficeView::close_modal);
        }
    })?;

    dom::listen(&document, "keydown", |e| {
        if let Some(ke) = e.dyn_ref::<KeyboardEvent>() {
            on_key(ke, true);
        }
    })?;
    dom::listen(&document, "keyup", |e| {
        if let Some(ke) = e.dyn_ref::<KeyboardEvent>() {
            on_key(ke, false);
        }
    })?;

    let target = canvas.clone();
    dom::listen(&canvas, "click", move |e| {
        if let Some(me) = e.dyn_ref::<MouseEvent>() {
            let rect = target.get_bounding_client_rect();
            let px = f64::from(me.client_x()) - rect.left();
            let py = f64::from(me.client_y()) - rect.top();
            with_view(|view| view.game.click(px, py));
        }
    })?;

    let window = dom::window()?;
    dom::listen(&window, "resize", |_| {
        with_view(OfficeView::resize);
    })?;

    log::info!("office ready");
    Ok(())
}
