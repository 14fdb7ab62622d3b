//! Landing page behaviour around the hero effects: navigation, friendly
//! section URLs, scroll-driven chrome, the stats counter and link handling.
//!
//! The functions here are plain state; [`dom`] wires them to the page.

pub mod dom;

use crate::config::LandingConfig;

/// Section anchor → friendly path pushed into the address bar.
const SECTION_URLS: &[(&str, &str)] = &[
    ("#", "/"),
    ("#projects", "/opensource"),
    ("#highlights", "/destaques"),
    ("#about", "/sobre"),
    ("#experience", "/experiencia"),
    ("#contact", "/contato"),
];

/// Friendly path (either language) → section anchor to scroll to.
const PATH_SECTIONS: &[(&str, &str)] = &[
    ("/opensource", "#projects"),
    ("/projetos", "#projects"),
    ("/projects", "#projects"),
    ("/destaques", "#highlights"),
    ("/highlights", "#highlights"),
    ("/sobre", "#about"),
    ("/about", "#about"),
    ("/experiencia", "#experience"),
    ("/experience", "#experience"),
    ("/contato", "#contact"),
    ("/contact", "#contact"),
];

/// Elements that fade up when they scroll into view.
pub const REVEAL_SELECTOR: &str = ".project-card, .timeline-item, .skills-group";

pub const PDF_VIEWER: &str = "https://docs.google.com/viewer";

pub fn friendly_path(hash: &str) -> Option<&'static str> {
    SECTION_URLS.iter().find(|(h, _)| *h == hash).map(|(_, path)| *path)
}

pub fn section_for_path(path: &str) -> Option<&'static str> {
    PATH_SECTIONS.iter().find(|(p, _)| *p == path).map(|(_, hash)| *hash)
}

/// Navbar shadow and scroll-indicator visibility for a scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollChrome {
    pub nav_shadow: bool,
    pub indicator_visible: bool,
}

impl ScrollChrome {
    pub fn at(scroll_y: f64, cfg: &LandingConfig) -> Self {
        Self {
            nav_shadow: scroll_y > cfg.nav_shadow_after,
            indicator_visible: scroll_y <= cfg.scroll_indicator_hide_after,
        }
    }
}

/// Whether the nav link for a section at `top` (document offset) with the
/// given height is highlighted.
pub fn section_active(scroll_y: f64, top: f64, height: f64, offset: f64) -> bool {
    let start = top - offset;
    scroll_y > start && scroll_y <= start + height
}

/// Leading integer of a stat label such as `"15+"`.
pub fn parse_stat(text: &str) -> Option<u32> {
    let text = text.trim_start();
    let end = text.find(|c: char| !c.is_ascii_digit()).unwrap_or(text.len());
    text[..end].parse().ok()
}

/// Count-up animation for a hero stat, one step per frame (~16 ms).
#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    target: u32,
    value: f64,
    increment: f64,
}

impl Counter {
    pub fn new(target: u32, duration_ms: f64) -> Self {
        Self { target, value: 0.0, increment: f64::from(target) / (duration_ms / 16.0) }
    }

    /// Label for the next frame and whether another frame follows.
    pub fn step(&mut self) -> (String, bool) {
        self.value += self.increment;
        if self.value < f64::from(self.target) {
            (format!("{}+", self.value.floor()), true)
        } else {
            (format!("{}+", self.target), false)
        }
    }
}

/// Local previews open PDFs directly; deployed pages go through the viewer.
pub fn opens_pdf_directly(hostname: &str, protocol: &str) -> bool {
    matches!(hostname, "localhost" | "127.0.0.1") || protocol == "file:"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_path_maps() {
        assert_eq!(friendly_path("#about"), Some("/sobre"));
        assert_eq!(friendly_path("#"), Some("/"));
        assert_eq!(friendly_path("#nope"), None);
        assert_eq!(section_for_path("/projetos"), Some("#projects"));
        assert_eq!(section_for_path("/contact"), Some("#contact"));
        assert_eq!(section_for_path("/"), None);
    }

    #[test]
    fn test_friendly_paths_round_trip_to_their_section() {
        for (hash, path) in SECTION_URLS.iter().skip(1) {
            assert_eq!(section_for_path(path), Some(*hash));
        }
    }

    #[test]
    fn test_scroll_chrome_thresholds() {
        let cfg = LandingConfig::default();
        assert_eq!(ScrollChrome::at(0.0, &cfg), ScrollChrome { nav_shadow: false, indicator_visible: true });
        assert!(!ScrollChrome::at(50.0, &cfg).nav_shadow);
        assert_eq!(ScrollChrome::at(51.0, &cfg), ScrollChrome { nav_shadow: true, indicator_visible: true });
        assert!(!ScrollChrome::at(101.0, &cfg).indicator_visible);
    }

    #[test]
    fn test_section_active_window() {
        // section at 1000px, 500px tall, highlighted from 900 (exclusive) to 1400
        assert!(!section_active(900.0, 1000.0, 500.0, 100.0));
        assert!(section_active(901.0, 1000.0, 500.0, 100.0));
        assert!(section_active(1400.0, 1000.0, 500.0, 100.0));
        assert!(!section_active(1401.0, 1000.0, 500.0, 100.0));
    }

    #[test]
    fn test_parse_stat_reads_leading_digits() {
        assert_eq!(parse_stat("15+"), Some(15));
        assert_eq!(parse_stat(" 200 "), Some(200));
        assert_eq!(parse_stat("∞"), None);
        assert_eq!(parse_stat(""), None);
    }

    #[test]
    fn test_counter_reaches_target_in_about_duration() {
        let mut counter = Counter::new(50, 2_000.0);
        let mut frames = 0;
        let last = loop {
            let (label, more) = counter.step();
            frames += 1;
            if !more {
                break label;
            }
            assert!(label.ends_with('+'));
        };
        assert_eq!(last, "50+");
        assert!((124..=126).contains(&frames));
    }

    #[test]
    fn test_counter_for_zero_finishes_at_once() {
        assert_eq!(Counter::new(0, 2_000.0).step(), ("0+".to_string(), false));
    }

    #[test]
    fn test_pdf_target() {
        assert!(opens_pdf_directly("localhost", "http:"));
        assert!(opens_pdf_directly("127.0.0.1", "http:"));
        assert!(opens_pdf_directly("", "file:"));
        assert!(!opens_pdf_directly("example.com", "https:"));
    }
}
