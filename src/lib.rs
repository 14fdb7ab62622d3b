//! Portfolio OS core crate.
//!
//! One WASM module backs every page of the portfolio site. Each page calls its
//! own entry point after the module loads:
//!
//! - landing pages: [`start_landing`] (navigation, friendly section URLs,
//!   scroll reveal, stats) and [`start_effects`] (greeting, typewriter,
//!   particle network, seasonal scenes)
//! - desktop page: [`start_desktop`] (window manager)
//! - `game.html`: [`start_office`] (office explorer)
//! - `terminal.html`: [`start_terminal`] (terminal browser)
//!
//! The edge function calls [`route_request`] to pick the language of the
//! landing page. [`configure`] may be called first to override the built-in
//! tunables.
//!
//! Game and UI state lives in plain Rust models that run (and are tested) on
//! the host; the `dom` submodules are the only code touching `web_sys`.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod desktop;
pub mod dom;
pub mod edge;
pub mod effects;
pub mod error;
pub mod landing;
pub mod lang;
pub mod logging;
pub mod office;
pub mod terminal;

pub use config::{SiteConfig, configure};
pub use desktop::dom::{desktop_open, start_desktop};
pub use edge::route_request;
pub use effects::dom::start_effects;
pub use error::{PortfolioError, PortfolioResult};
pub use landing::dom::start_landing;
pub use lang::Lang;
pub use office::dom::start_office;
pub use terminal::dom::start_terminal;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
}
