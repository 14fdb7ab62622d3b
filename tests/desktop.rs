// Integration tests (native) for the desktop window manager.
// They drive `WindowManager` the way the dock, icons and title bars do,
// without touching the DOM.

use portfolio_os::Lang;
use portfolio_os::desktop::{
    DockOutcome, OpenOutcome, Viewport, WindowManager, WindowState, catalog,
};

const VIEW: Viewport = Viewport::new(1468.0, 928.0);

#[test]
fn every_catalog_window_opens_in_both_languages() {
    for lang in [Lang::Ptbr, Lang::En] {
        let mut wm = WindowManager::default();
        for content in catalog::entries(lang) {
            let outcome = wm.open(content.id, lang, VIEW).unwrap();
            assert_eq!(outcome, OpenOutcome::Created, "{} ({lang:?})", content.id);
        }
        assert_eq!(wm.len(), catalog::entries(lang).len());
        // exactly one window holds focus: the last one opened
        assert_eq!(wm.windows().filter(|w| w.focused).count(), 1);
    }
}

#[test]
fn stacking_follows_focus_order() {
    let mut wm = WindowManager::default();
    wm.open("about", Lang::Ptbr, VIEW).unwrap();
    wm.open("skills", Lang::Ptbr, VIEW).unwrap();
    wm.open("contact", Lang::Ptbr, VIEW).unwrap();

    wm.focus("about");
    let z = |wm: &WindowManager, id: &str| wm.get(id).unwrap().z_index;
    assert!(z(&wm, "about") > z(&wm, "contact"));
    assert!(z(&wm, "contact") > z(&wm, "skills"));
    assert_eq!(wm.active(), Some("about"));
    assert_eq!(z(&wm, "about"), wm.top_z());
}

#[test]
fn dock_cycle_minimize_restore_close() {
    let mut wm = WindowManager::default();
    assert_eq!(wm.dock_activate("terminal", Lang::Ptbr, VIEW).unwrap(), DockOutcome::Opened);
    wm.minimize("terminal");
    assert_eq!(wm.get("terminal").unwrap().state(), WindowState::Minimized);

    assert_eq!(wm.dock_activate("terminal", Lang::Ptbr, VIEW).unwrap(), DockOutcome::Restored);
    assert_eq!(wm.get("terminal").unwrap().state(), WindowState::Normal);
    assert_eq!(wm.dock_activate("terminal", Lang::Ptbr, VIEW).unwrap(), DockOutcome::Focused);

    assert!(wm.close("terminal"));
    assert!(!wm.is_open("terminal"));
    assert!(wm.finish_close("terminal"));
    assert!(wm.is_empty());
    assert_eq!(wm.active(), None);
}

#[test]
fn reopening_during_close_animation_keeps_the_window() {
    let mut wm = WindowManager::default();
    wm.open("experience", Lang::En, VIEW).unwrap();
    wm.close("experience");
    assert_eq!(wm.open("experience", Lang::En, VIEW).unwrap(), OpenOutcome::Reopened);
    // the pending animation timer fires afterwards and must not drop it
    assert!(!wm.finish_close("experience"));
    assert!(wm.is_open("experience"));
}

#[test]
fn dock_click_during_close_animation_reopens_like_an_icon() {
    let mut wm = WindowManager::default();
    wm.open("skills", Lang::Ptbr, VIEW).unwrap();
    wm.close("skills");
    assert_eq!(wm.dock_activate("skills", Lang::Ptbr, VIEW).unwrap(), DockOutcome::Reopened);
    assert!(!wm.finish_close("skills"));
    assert!(wm.is_open("skills"));
    assert_eq!(wm.active(), Some("skills"));
}

#[test]
fn project_windows_open_maximized_and_follow_viewport() {
    let mut wm = WindowManager::default();
    wm.open("edgeproxy", Lang::En, VIEW).unwrap();
    let record = wm.get("edgeproxy").unwrap();
    assert_eq!(record.state(), WindowState::Maximized);
    assert_eq!(record.geometry, wm.work_area(VIEW));

    let smaller = Viewport::new(1024.0, 700.0);
    wm.relayout(smaller);
    assert_eq!(wm.get("edgeproxy").unwrap().geometry, wm.work_area(smaller));

    // un-maximizing returns to the centered 1000x700 placement
    wm.toggle_maximize("edgeproxy", smaller);
    let g = wm.get("edgeproxy").unwrap().geometry;
    assert_eq!((g.width, g.height), (1000.0, 700.0));
}

#[test]
fn drag_then_resize_a_window() {
    let mut wm = WindowManager::default();
    wm.open("about", Lang::Ptbr, VIEW).unwrap();
    let start = wm.get("about").unwrap().geometry;

    assert!(wm.begin_drag("about", (100.0, 100.0)));
    wm.drag_to((160.0, 90.0));
    wm.end_drag();
    let moved = wm.get("about").unwrap().geometry;
    assert_eq!((moved.x, moved.y), (start.x + 60.0, start.y - 10.0));

    assert!(wm.begin_resize("about", (0.0, 0.0)));
    wm.resize_to((-1000.0, 50.0));
    wm.end_resize();
    let resized = wm.get("about").unwrap().geometry;
    assert_eq!(resized.width, wm.config().min_width);
    assert_eq!(resized.height, start.height + 50.0);
}

#[test]
fn unknown_window_is_an_error() {
    let mut wm = WindowManager::default();
    let err = wm.open("solitaire", Lang::Ptbr, VIEW).unwrap_err();
    assert_eq!(err, portfolio_os::PortfolioError::UnknownWindow("solitaire".into()));
    assert!(wm.is_empty());
}
