//! Site-wide tunables.
//!
//! Every field has a built-in default so the page works without any
//! configuration. A host page may override values before starting a surface:
//!
//! ```js
//! configure(JSON.stringify({ christmas: { startMonth: 12, startDay: 20,
//!                                         endMonth: 12, endDay: 26 } }));
//! ```

use std::cell::RefCell;

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::error::PortfolioResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub game: GameConfig,
    pub desktop: DesktopConfig,
    pub background: BackgroundConfig,
    pub landing: LandingConfig,
    pub particles: ParticleConfig,
    pub christmas: SeasonWindow,
    pub new_year: SeasonWindow,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            desktop: DesktopConfig::default(),
            background: BackgroundConfig::default(),
            landing: LandingConfig::default(),
            particles: ParticleConfig::default(),
            christmas: SeasonWindow::christmas(),
            new_year: SeasonWindow::new_year(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Office explorer constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// Logical tile size in pixels before scaling.
    pub tile_size: f64,
    /// Pixels per frame while walking between tiles.
    pub player_speed: f64,
    /// Fraction of the best-fit scale used for the map.
    pub fit_ratio: f64,
    pub minimap_size: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { tile_size: 32.0, player_speed: 3.0, fit_ratio: 0.9, minimap_size: 150 }
    }
}

/// Desktop chrome and window defaults (pixels / milliseconds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesktopConfig {
    pub dock_width: f64,
    pub panel_height: f64,
    pub default_width: f64,
    pub default_height: f64,
    pub min_width: f64,
    pub min_height: f64,
    pub min_left: f64,
    pub min_top: f64,
    pub close_animation_ms: i32,
    pub base_z_index: u32,
    pub wallpaper_interval_ms: i32,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            dock_width: 68.0,
            panel_height: 28.0,
            default_width: 750.0,
            default_height: 550.0,
            min_width: 500.0,
            min_height: 400.0,
            min_left: 20.0,
            min_top: 40.0,
            close_animation_ms: 150,
            base_z_index: 100,
            wallpaper_interval_ms: 10_000,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundMode {
    #[default]
    Video,
    Images,
}

/// Desktop background: crossfading videos or the rotating wallpapers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackgroundConfig {
    pub mode: BackgroundMode,
    pub videos: Vec<String>,
    pub video_rotation_ms: i32,
    /// Delay after a crossfade before the hidden player loads the next clip.
    pub preload_delay_ms: i32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        let videos = [23219, 23374, 23218, 23380, 23215, 23216]
            .iter()
            .map(|id| format!("https://assets.mixkit.co/videos/{id}/{id}-720.mp4"))
            .collect();
        Self { mode: BackgroundMode::Video, videos, video_rotation_ms: 10_000, preload_delay_ms: 1_500 }
    }
}

/// Landing page behaviour (pixels of scroll / milliseconds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LandingConfig {
    /// Shows the "available for work" tagline in the navbar.
    pub available_for_work: bool,
    pub nav_shadow_after: f64,
    pub scroll_indicator_hide_after: f64,
    /// A section counts as current this far before its top edge.
    pub section_offset: f64,
    pub counter_duration_ms: f64,
    pub reveal_threshold: f64,
    pub stats_threshold: f64,
    /// Delay before scrolling to the section named by the URL on load.
    pub initial_scroll_delay_ms: i32,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            available_for_work: false,
            nav_shadow_after: 50.0,
            scroll_indicator_hide_after: 100.0,
            section_offset: 100.0,
            counter_duration_ms: 2_000.0,
            reveal_threshold: 0.1,
            stats_threshold: 0.5,
            initial_scroll_delay_ms: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticleConfig {
    pub count: usize,
    pub size: f64,
    pub line_distance: f64,
    pub speed: f64,
    pub mouse_radius: f64,
    /// Viewports narrower than this get half the particles.
    pub narrow_viewport: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 80,
            size: 2.0,
            line_distance: 150.0,
            speed: 0.5,
            mouse_radius: 200.0,
            narrow_viewport: 768.0,
        }
    }
}

/// Inclusive calendar window (months 1-12). A window whose end month is
/// before its start month wraps over the new year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonWindow {
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
    #[serde(default)]
    pub force_test: bool,
}

impl SeasonWindow {
    pub const fn christmas() -> Self {
        Self { start_month: 12, start_day: 24, end_month: 12, end_day: 26, force_test: false }
    }

    pub const fn new_year() -> Self {
        Self { start_month: 12, start_day: 31, end_month: 1, end_day: 7, force_test: false }
    }
}

thread_local! {
    static CONFIG: RefCell<SiteConfig> = RefCell::new(SiteConfig::default());
}

/// Snapshot of the active configuration.
pub fn current() -> SiteConfig {
    CONFIG.with(|c| c.borrow().clone())
}

pub fn set(config: SiteConfig) {
    CONFIG.with(|c| *c.borrow_mut() = config);
}

/// Replace the active configuration from a JSON document. Missing fields keep
/// their defaults.
#[wasm_bindgen]
pub fn configure(json: &str) -> Result<(), JsValue> {
    let parsed = SiteConfig::from_json(json)?;
    log::info!("site configuration updated");
    set(parsed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_yields_defaults() {
        let cfg = SiteConfig::from_json("{}").unwrap();
        assert_eq!(cfg, SiteConfig::default());
        assert_eq!(cfg.game.tile_size, 32.0);
        assert_eq!(cfg.desktop.close_animation_ms, 150);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let cfg = SiteConfig::from_json(
            r#"{ "game": { "playerSpeed": 4.5 }, "newYear": { "startMonth": 12, "startDay": 30, "endMonth": 1, "endDay": 2 } }"#,
        )
        .unwrap();
        assert_eq!(cfg.game.player_speed, 4.5);
        assert_eq!(cfg.game.tile_size, 32.0);
        assert_eq!(cfg.new_year.start_day, 30);
        assert!(!cfg.new_year.force_test);
        assert_eq!(cfg.christmas, SeasonWindow::christmas());
    }

    #[test]
    fn test_background_and_landing_overrides() {
        let cfg = SiteConfig::from_json(
            r#"{ "background": { "mode": "images", "videoRotationMs": 30000 }, "landing": { "availableForWork": true } }"#,
        )
        .unwrap();
        assert_eq!(cfg.background.mode, BackgroundMode::Images);
        assert_eq!(cfg.background.video_rotation_ms, 30_000);
        assert_eq!(cfg.background.videos.len(), 6);
        assert!(cfg.landing.available_for_work);
        assert_eq!(cfg.landing.nav_shadow_after, 50.0);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        assert!(SiteConfig::from_json("{ game: }").is_err());
    }

    #[test]
    fn test_set_and_current_roundtrip() {
        let mut cfg = SiteConfig::default();
        cfg.desktop.min_width = 320.0;
        set(cfg.clone());
        assert_eq!(current().desktop.min_width, 320.0);
        set(SiteConfig::default());
    }
}
