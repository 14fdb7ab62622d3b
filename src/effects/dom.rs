//! Browser binding for the landing page effects.

use std::cell::RefCell;

use chrono::Timelike;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement, MouseEvent,
    TouchEvent,
};

use super::christmas::{ACCELERATE_EVERY_MS, ACCELERATION, Cue, SCHEDULE, Santa};
use super::fireworks::FireworkShow;
use super::greeting::{self, Typewriter};
use super::particles::ParticleField;
use super::season::{self, SeasonOverrides};
use super::snow::{GROW_INTERVAL_MS, Snowfall};
use crate::config;
use crate::dom;
use crate::error::{PortfolioError, PortfolioResult};
use crate::lang::Lang;

const GREETING_REFRESH_MS: i32 = 60_000;
const LIGHT_COLORS: [&str; 5] = ["red", "yellow", "green", "blue", "pink"];
const LIGHT_ROUNDS: usize = 6;

const CHRISTMAS_GREETING_CSS: &str = r#"
.christmas-greeting {
    background: linear-gradient(90deg, #ff6b6b, #ffd700, #69db7c, #ff6b6b);
    background-size: 300% 100%;
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    background-clip: text;
    animation: christmas-shimmer 3s ease-in-out infinite;
    font-weight: 700 !important;
}
@keyframes christmas-shimmer {
    0% { background-position: 0% 50%; }
    50% { background-position: 100% 50%; }
    100% { background-position: 0% 50%; }
}
"#;

struct Surface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Surface {
    fn new(canvas: HtmlCanvasElement) -> PortfolioResult<Self> {
        let ctx = dom::context_2d(&canvas)?;
        Ok(Self { canvas, ctx })
    }

    /// Match the viewport and return its size.
    fn fit(&self) -> (f64, f64) {
        let (w, h) = dom::viewport_size();
        self.canvas.set_width(w as u32);
        self.canvas.set_height(h as u32);
        (w, h)
    }
}

struct ChristmasScene {
    surface: Surface,
    banner: HtmlElement,
    lights: HtmlElement,
    snow: Snowfall,
    santa: Santa,
    active: bool,
    grow_timer: Option<i32>,
    accelerate_timer: Option<i32>,
}

struct EffectsView {
    document: Document,
    lang: Lang,
    rng: SmallRng,
    particles: Option<(Surface, ParticleField)>,
    christmas: Option<ChristmasScene>,
    fireworks: Option<(Surface, FireworkShow)>,
}

thread_local! {
    static EFFECTS: RefCell<Option<EffectsView>> = const { RefCell::new(None) };
}

fn with_view<R>(f: impl FnOnce(&mut EffectsView) -> R) -> Option<R> {
    EFFECTS.with(|e| e.borrow_mut().as_mut().map(f))
}

fn seeded_rng() -> SmallRng {
    let mut seed = [0u8; 8];
    if let Err(err) = getrandom::getrandom(&mut seed) {
        log::warn!("no browser entropy, using clock seed: {err}");
        return SmallRng::seed_from_u64(js_sys::Date::now() as u64);
    }
    SmallRng::seed_from_u64(u64::from_le_bytes(seed))
}

fn is_hidden() -> bool {
    dom::document().map(|d| d.hidden()).unwrap_or(false)
}

fn hero_greeting(doc: &Document) -> Option<HtmlElement> {
    dom::query::<HtmlElement>(doc, ".hero-greeting").ok()
}

fn particle_canvas(doc: &Document) -> Option<HtmlElement> {
    dom::by_id::<HtmlElement>(doc, "particle-canvas").ok()
}

/// Hour in São Paulo; the browser's own clock if the timestamp is out of range.
fn sao_paulo_hour() -> u32 {
    season::sao_paulo_time(js_sys::Date::now())
        .map(|t| t.hour())
        .unwrap_or_else(|| js_sys::Date::new_0().get_hours())
}

impl EffectsView {
    fn refresh_greeting(&self) {
        let Some(el) = hero_greeting(&self.document) else {
            return;
        };
        let text = greeting::greeting(sao_paulo_hour(), self.lang);
        let classes = el.class_list();
        if !classes.contains("christmas-greeting") && !classes.contains("newyear-greeting") {
            el.set_text_content(Some(text));
        }
        el.set_attribute("data-original-greeting", text).ok();
    }

    fn draw_particles(&mut self) {
        if let Some((surface, field)) = self.particles.as_mut() {
            field.step();
            field.draw(&surface.ctx);
        }
    }

    fn resize_particles(&mut self) {
        let Self { rng, particles, .. } = self;
        if let Some((surface, field)) = particles.as_mut() {
            let (w, h) = surface.fit();
            field.reset(rng, w, h);
        }
    }

    fn set_pointer(&mut self, pointer: Option<(f64, f64)>) {
        if let Some((_, field)) = self.particles.as_mut() {
            field.pointer = pointer;
        }
    }

    fn show_particles(&self, visible: bool) {
        if let Some(canvas) = particle_canvas(&self.document) {
            dom::set_styles(&canvas, &[("display", if visible { "block" } else { "none" })]);
        }
    }

    // --- Christmas ---------------------------------------------------------

    fn draw_christmas(&mut self) -> bool {
        let Self { rng, christmas, .. } = self;
        let Some(scene) = christmas.as_mut().filter(|s| s.active) else {
            return false;
        };
        let ctx = &scene.surface.ctx;
        ctx.clear_rect(0.0, 0.0, scene.snow.width, scene.snow.height);
        scene.snow.step(rng);
        scene.snow.draw(ctx);
        scene.santa.update(scene.snow.width, scene.snow.height);
        scene.santa.draw(ctx, js_sys::Date::now() / 100.0);
        true
    }

    fn resize_christmas(&mut self) {
        if let Some(scene) = self.christmas.as_mut() {
            let (w, h) = scene.surface.fit();
            scene.snow.resize(w, h);
            scene.santa.reset(w);
        }
    }

    fn christmas_cue(&mut self, cue: Cue) {
        let Self { document, lang, rng, christmas, .. } = self;
        let Some(scene) = christmas.as_mut() else {
            return;
        };
        if let Some(speed) = cue.santa_speed() {
            scene.santa.speed = speed;
        }
        let fade_in = [("transition", "opacity 1s ease-in"), ("opacity", "1")];
        match cue {
            Cue::ShowBanner => {
                if let Some(body) = document.body() {
                    body.class_list().add_1("christmas-active").ok();
                }
                dom::set_styles(&scene.banner, &fade_in);
            }
            Cue::ShowLights => dom::set_styles(&scene.lights, &fade_in),
            Cue::StartSnow => {
                dom::set_styles(&scene.surface.canvas, &fade_in);
                scene.snow.begin(rng);
                scene.grow_timer = dom::set_interval(GROW_INTERVAL_MS, grow_snow).ok();
            }
            Cue::LaunchSanta => scene.santa.launch(dom::viewport_size().0),
            Cue::BeginFadeOut => {
                if let Some(id) = scene.grow_timer.take() {
                    dom::clear_interval(id);
                }
                scene.snow.slow_down();
                scene.accelerate_timer = dom::set_interval(ACCELERATE_EVERY_MS, || {
                    with_view(|view| {
                        if let Some(scene) = view.christmas.as_mut() {
                            scene.santa.speed += ACCELERATION;
                        }
                    });
                })
                .ok();
            }
            Cue::DimChrome => {
                let dim = [("transition", "opacity 4s ease-out"), ("opacity", "0.3")];
                dom::set_styles(&scene.banner, &dim);
                dom::set_styles(&scene.lights, &dim);
            }
            Cue::FadeCanvas => {
                dom::set_styles(
                    &scene.surface.canvas,
                    &[("transition", "opacity 5s ease-out"), ("opacity", "0")],
                );
                let slide = [
                    ("transition", "opacity 3s ease-out, transform 4s ease-out"),
                    ("opacity", "0"),
                    ("transform", "translateY(-100%)"),
                ];
                dom::set_styles(&scene.banner, &slide);
                dom::set_styles(&scene.lights, &slide);
            }
            Cue::FinalSpeed => {
                if let Some(id) = scene.accelerate_timer.take() {
                    dom::clear_interval(id);
                }
            }
            Cue::Cleanup => {
                scene.active = false;
                let chrome: [&HtmlElement; 3] = [&scene.surface.canvas, &scene.banner, &scene.lights];
                for el in chrome {
                    el.class_list().remove_1("active").ok();
                }
                if let Some(body) = document.body() {
                    body.class_list().remove_1("christmas-active").ok();
                }
                if let Some(canvas) = particle_canvas(document) {
                    dom::set_styles(&canvas, &[("display", "block")]);
                }
                restore_greeting(document, *lang);
                log::info!("christmas scene finished");
            }
        }
    }

    // --- New Year ----------------------------------------------------------

    fn draw_fireworks(&mut self) {
        let Self { rng, fireworks, .. } = self;
        if let Some((surface, show)) = fireworks.as_mut() {
            show.step(rng);
            show.draw(&surface.ctx);
        }
    }

    fn resize_fireworks(&mut self) {
        if let Some((surface, show)) = self.fireworks.as_mut() {
            let (w, h) = surface.fit();
            show.resize(w, h);
        }
    }
}

fn grow_snow() {
    with_view(|view| {
        let EffectsView { rng, christmas, .. } = view;
        if let Some(scene) = christmas.as_mut() {
            if !scene.snow.grow(rng) {
                if let Some(id) = scene.grow_timer.take() {
                    dom::clear_interval(id);
                }
            }
        }
    });
}

/// Fade the hero text back from the Christmas message to the clock greeting.
fn restore_greeting(doc: &Document, lang: Lang) {
    let Some(el) = hero_greeting(doc) else {
        return;
    };
    dom::set_styles(&el, &[("transition", "opacity 1s ease-out"), ("opacity", "0")]);
    let doc = doc.clone();
    let scheduled = dom::set_timeout(1_000, move || {
        el.class_list().remove_1("christmas-greeting").ok();
        el.set_text_content(Some(greeting::greeting(sao_paulo_hour(), lang)));
        if let Some(style) = doc.get_element_by_id("christmas-greeting-style") {
            style.remove();
        }
        dom::frame_loop(move |_| {
            dom::set_styles(&el, &[("transition", "opacity 1.5s ease-in"), ("opacity", "1")]);
            false
        });
    });
    if let Err(err) = scheduled {
        log::warn!("effects: {err}");
    }
}

fn create_div(doc: &Document, class: &str, html: &str) -> PortfolioResult<HtmlElement> {
    let el = doc.create_element("div")?;
    el.set_class_name(class);
    el.set_inner_html(html);
    Ok(el.unchecked_into())
}

fn create_canvas(doc: &Document, id: &str) -> PortfolioResult<HtmlCanvasElement> {
    let canvas: HtmlCanvasElement = doc.create_element("canvas")?.unchecked_into();
    canvas.set_id(id);
    canvas.set_class_name("active");
    Ok(canvas)
}

fn banner_html(prefix: &str, first: &str, text: &str, last: &str) -> String {
    format!(
        r#"<div class="{prefix}-banner-content"><span class="{prefix}-emoji">{first}</span><span class="{prefix}-text">{text}</span><span class="{prefix}-emoji">{last}</span></div>"#
    )
}

fn start_christmas(doc: &Document, lang: Lang) -> PortfolioResult<ChristmasScene> {
    let body = doc.body().ok_or_else(|| PortfolioError::MissingElement("body".into()))?;

    let banner = create_div(
        doc,
        "christmas-banner active",
        &banner_html("christmas", "🎄", greeting::christmas_banner(lang), "🎅"),
    )?;
    banner.set_id("christmas-banner");
    dom::set_styles(&banner, &[("opacity", "0")]);
    body.insert_before(&banner, body.first_child().as_ref())?;

    let lights: String = (0..LIGHT_ROUNDS)
        .flat_map(|_| LIGHT_COLORS)
        .map(|color| format!(r#"<span class="light light-{color}"></span>"#))
        .collect();
    let lights = create_div(
        doc,
        "christmas-lights-bar active",
        &format!(r#"<div class="christmas-lights">{lights}</div>"#),
    )?;
    dom::set_styles(&lights, &[("opacity", "0")]);
    body.insert_before(&lights, banner.next_sibling().as_ref())?;

    let canvas = create_canvas(doc, "christmas-canvas")?;
    dom::set_styles(&canvas, &[("opacity", "0")]);
    body.insert_before(&canvas, banner.next_sibling().as_ref())?;

    if let Some(el) = hero_greeting(doc) {
        el.set_text_content(Some(greeting::christmas_greeting(lang)));
        el.class_list().add_1("christmas-greeting")?;
    }
    let style: Element = doc.create_element("style")?;
    style.set_id("christmas-greeting-style");
    style.set_text_content(Some(CHRISTMAS_GREETING_CSS));
    if let Some(head) = doc.head() {
        head.append_child(&style)?;
    }

    let surface = Surface::new(canvas)?;
    let (w, h) = surface.fit();
    Ok(ChristmasScene {
        surface,
        banner,
        lights,
        snow: Snowfall::new(w, h),
        santa: Santa::new(w),
        active: true,
        grow_timer: None,
        accelerate_timer: None,
    })
}

fn start_new_year(
    doc: &Document,
    lang: Lang,
    rng: &mut SmallRng,
) -> PortfolioResult<(Surface, FireworkShow)> {
    let body = doc.body().ok_or_else(|| PortfolioError::MissingElement("body".into()))?;

    let banner = create_div(
        doc,
        "newyear-banner active",
        &banner_html("newyear", "🎉", greeting::new_year_banner(lang), "🎊"),
    )?;
    banner.set_id("newyear-banner");
    body.insert_before(&banner, body.first_child().as_ref())?;

    let canvas = create_canvas(doc, "fireworks-canvas")?;
    body.insert_before(&canvas, banner.next_sibling().as_ref())?;
    body.class_list().add_1("newyear-active")?;

    if let Some(el) = hero_greeting(doc) {
        el.set_inner_html(&format!(
            r#"<span class="newyear-greeting">{}</span>"#,
            greeting::new_year_greeting(lang)
        ));
        el.class_list().add_1("newyear-greeting")?;
    }

    let surface = Surface::new(canvas)?;
    let (w, h) = surface.fit();
    let show = FireworkShow::new(rng, w, h);
    Ok((surface, show))
}

fn type_next(el: Element, mut writer: Typewriter) {
    let (text, delay) = writer.step();
    el.set_text_content(Some(&text));
    if let Err(err) = dom::set_timeout(delay, move || type_next(el, writer)) {
        log::warn!("typewriter: {err}");
    }
}

fn install_particles(doc: &Document) -> PortfolioResult<()> {
    let Ok(canvas) = dom::by_id::<HtmlCanvasElement>(doc, "particle-canvas") else {
        return Ok(());
    };
    let surface = Surface::new(canvas)?;
    let (w, h) = surface.fit();
    let cfg = config::current().particles;
    with_view(|view| {
        let field = ParticleField::new(&mut view.rng, w, h, cfg);
        view.particles = Some((surface, field));
    });

    let window = dom::window()?;
    dom::listen(&window, "mousemove", |e| {
        if let Some(me) = e.dyn_ref::<MouseEvent>() {
            let pointer = (f64::from(me.client_x()), f64::from(me.client_y()));
            with_view(|view| view.set_pointer(Some(pointer)));
        }
    })?;
    dom::listen(&window, "touchmove", |e| {
        if let Some(touch) = e.dyn_ref::<TouchEvent>().and_then(|te| te.touches().get(0)) {
            let pointer = (f64::from(touch.client_x()), f64::from(touch.client_y()));
            with_view(|view| view.set_pointer(Some(pointer)));
        }
    })?;
    dom::listen(&window, "touchend", |_| {
        with_view(|view| view.set_pointer(None));
    })?;

    dom::frame_loop(|_| {
        if !is_hidden() {
            with_view(EffectsView::draw_particles);
        }
        true
    });
    Ok(())
}

/// Boot the landing page effects: greeting, typewriter, particle network and
/// any seasonal scene that is due.
#[wasm_bindgen]
pub fn start_effects() -> Result<(), JsValue> {
    let document = dom::document()?;
    let lang = dom::page_lang(&document);
    let cfg = config::current();

    let view = EffectsView {
        document: document.clone(),
        lang,
        rng: seeded_rng(),
        particles: None,
        christmas: None,
        fireworks: None,
    };
    view.refresh_greeting();
    EFFECTS.with(|e| *e.borrow_mut() = Some(view));
    dom::set_interval(GREETING_REFRESH_MS, || {
        with_view(|view| view.refresh_greeting());
    })?;

    if let Ok(el) = dom::query::<Element>(&document, ".typewriter") {
        let writer = Typewriter::new(lang);
        dom::set_timeout(greeting::FIRST_DELAY_MS, move || type_next(el, writer))?;
    }

    install_particles(&document)?;

    let today = season::sao_paulo_time(js_sys::Date::now())
        .map(|t| t.date_naive())
        .ok_or_else(|| PortfolioError::Dom("clock out of range".to_string()))?;
    let overrides = SeasonOverrides::from_params(dom::query_param);
    let seasons = season::detect(today, &cfg.christmas, &cfg.new_year, overrides);

    if seasons.christmas {
        let scene = start_christmas(&document, lang)?;
        with_view(|view| {
            view.show_particles(false);
            view.christmas = Some(scene);
        });
        for (at, cue) in SCHEDULE {
            dom::set_timeout(at, move || {
                with_view(|view| view.christmas_cue(cue));
            })?;
        }
        dom::frame_loop(|_| {
            if is_hidden() {
                return true;
            }
            with_view(EffectsView::draw_christmas).unwrap_or(false)
        });
        log::info!("christmas scene active");
    } else if seasons.new_year {
        let scene = with_view(|view| {
            view.show_particles(false);
            start_new_year(&view.document, view.lang, &mut view.rng)
        });
        if let Some(scene) = scene {
            let scene = scene?;
            with_view(|view| view.fireworks = Some(scene));
        }
        dom::frame_loop(|_| {
            if !is_hidden() {
                with_view(EffectsView::draw_fireworks);
            }
            true
        });
        log::info!("new year scene active");
    }

    let window = dom::window()?;
    dom::listen(&window, "resize", |_| {
        with_view(|view| {
            view.resize_particles();
            view.resize_christmas();
            view.resize_fireworks();
        });
    })?;

    log::info!("effects ready");
    Ok(())
}
