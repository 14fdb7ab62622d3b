// Browser tests: run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use portfolio_os::{config, dom, route_request};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn configure_accepts_partial_json() {
    config::configure(r#"{ "particles": { "count": 12 } }"#).unwrap();
    assert_eq!(config::current().particles.count, 12);
    assert!(config::configure("{ nope").is_err());
    config::set(config::SiteConfig::default());
}

#[wasm_bindgen_test]
fn route_request_reads_the_url() {
    let json = route_request("https://example.com/about?lang=en", Some("BR".into()), None).unwrap();
    assert!(json.contains(r#""action":"rewrite""#));
    assert!(json.contains(r#""asset":"/index-en.html""#));

    let json = route_request("https://example.com/css/style.css", None, None).unwrap();
    assert_eq!(json, r#"{"action":"next"}"#);
}

#[wasm_bindgen_test]
fn missing_elements_are_reported() {
    let doc = dom::document().unwrap();
    doc.body().unwrap().set_inner_html("");
    let err = dom::by_id::<web_sys::HtmlElement>(&doc, "no-such-element").unwrap_err();
    assert_eq!(err.to_string(), "missing element: #no-such-element");
    // the terminal page needs its input; this test page has none
    assert!(portfolio_os::start_terminal().is_err());
}

#[wasm_bindgen_test]
fn canvas_context_and_office_render() {
    let doc = dom::document().unwrap();
    let canvas = doc
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_width(640);
    canvas.set_height(480);
    let ctx = dom::context_2d(&canvas).unwrap();

    let mut game = portfolio_os::office::Game::new(config::current().game);
    game.resize(640.0, 480.0);
    game.start();
    portfolio_os::office::render::draw_scene(
        &ctx,
        game.layout(),
        game.config().tile_size,
        game.player(),
    );
}

#[wasm_bindgen_test]
fn terminal_page_echoes_commands() {
    let doc = dom::document().unwrap();
    let body = doc.body().unwrap();
    body.set_inner_html(
        r#"<div id="terminal-body"><div id="terminal-output"></div>
           <span class="prompt"><span class="path">~</span></span>
           <input id="terminal-input"></div>"#,
    );
    portfolio_os::start_terminal().unwrap();
    let output = doc.get_element_by_id("terminal-output").unwrap();
    // the welcome banner is printed on start
    assert!(output.inner_html().contains("welcome-banner"));
}

#[wasm_bindgen_test]
fn effects_start_on_a_bare_page() {
    let doc = dom::document().unwrap();
    doc.body().unwrap().set_inner_html(r#"<h1 class="hero-greeting"></h1>"#);
    portfolio_os::start_effects().unwrap();
    let greeting = dom::query::<web_sys::HtmlElement>(&doc, ".hero-greeting").unwrap();
    assert!(!greeting.text_content().unwrap_or_default().is_empty());
}

#[wasm_bindgen_test]
fn landing_hides_the_work_badge_by_default() {
    let doc = dom::document().unwrap();
    doc.body().unwrap().set_inner_html(
        r#"<nav class="nav"><span class="nav-tagline">Open to work</span></nav>"#,
    );
    portfolio_os::start_landing().unwrap();
    let tagline = dom::query::<web_sys::HtmlElement>(&doc, ".nav-tagline").unwrap();
    assert_eq!(tagline.style().get_property_value("display").unwrap(), "none");
    assert!(doc.get_element_by_id("landing-style").is_some());
}
