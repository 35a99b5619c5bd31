// Host-side tests for menu toggling, fragment resolution and fade-in tracking.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod projects {
        include!("../src/core/projects.rs");
    }
    pub mod state {
        include!("../src/core/state.rs");
    }
}

use crate::core::state::*;
use std::collections::BTreeSet;

// Mirrors the click handler: read the class, flip it, write it back.
fn click(classes: &mut BTreeSet<String>, class: &str) {
    let open = MenuState::from_open(classes.contains(class)).toggle();
    if open {
        classes.insert(class.to_string());
    } else {
        classes.remove(class);
    }
}

fn class_set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn menu_starts_closed() {
    assert!(!MenuState::default().is_open());
}

#[test]
fn menu_toggle_parity() {
    for clicks in 0..8 {
        let mut menu = MenuState::default();
        for _ in 0..clicks {
            menu.toggle();
        }
        assert_eq!(menu.is_open(), clicks % 2 == 1, "after {} clicks", clicks);
    }
}

#[test]
fn menu_toggle_returns_new_state() {
    let mut menu = MenuState::default();
    assert!(menu.toggle());
    assert!(!menu.toggle());
}

#[test]
fn menu_from_open_seeds_state() {
    assert!(MenuState::from_open(true).is_open());
    assert!(!MenuState::from_open(false).is_open());
    assert!(!MenuState::from_open(true).toggle());
}

#[test]
fn even_clicks_restore_original_classes_from_either_start() {
    for start in [class_set(&["nav-links"]), class_set(&["nav-links", "nav-active"])] {
        for clicks in 0..6 {
            let mut panel = start.clone();
            for _ in 0..clicks {
                click(&mut panel, "nav-active");
            }
            if clicks % 2 == 0 {
                assert_eq!(panel, start, "after {} clicks", clicks);
            } else {
                assert_ne!(
                    panel.contains("nav-active"),
                    start.contains("nav-active"),
                    "after {} clicks",
                    clicks
                );
            }
        }
    }
}

#[test]
fn first_click_on_preopened_panel_closes_it() {
    let mut panel = class_set(&["nav-active"]);
    let mut button = class_set(&["hamburger"]);
    click(&mut panel, "nav-active");
    click(&mut button, "toggle");
    assert!(!panel.contains("nav-active"));
    assert!(button.contains("toggle"));
    assert!(button.contains("hamburger"));
}

#[test]
fn fragment_target_strips_hash() {
    assert_eq!(fragment_target("#about"), Some("about"));
    assert_eq!(fragment_target("#contact-form"), Some("contact-form"));
}

#[test]
fn fragment_target_rejects_empty_and_external() {
    assert_eq!(fragment_target("#"), None);
    assert_eq!(fragment_target(""), None);
    assert_eq!(fragment_target("about"), None);
    assert_eq!(fragment_target("https://example.com/#about"), None);
}

#[test]
fn fade_reveals_once_after_threshold() {
    let mut fade = FadeTracker::new(2);
    // Intersecting but below 10%: not yet.
    assert!(!fade.observe(0, true, 0.05, 0.1));
    assert!(!fade.is_shown(0));
    assert!(fade.observe(0, true, 0.1, 0.1));
    assert!(fade.is_shown(0));
    // Later changes, including scrolling out and back, have no effect.
    assert!(!fade.observe(0, false, 0.0, 0.1));
    assert!(!fade.observe(0, true, 1.0, 0.1));
    assert!(fade.is_shown(0));
    assert_eq!(fade.remaining(), 1);
}

#[test]
fn fade_ignores_non_intersecting_entries() {
    let mut fade = FadeTracker::new(1);
    assert!(!fade.observe(0, false, 0.5, 0.1));
    assert_eq!(fade.remaining(), 1);
}

#[test]
fn fade_elements_are_independent() {
    let mut fade = FadeTracker::new(3);
    assert!(fade.observe(2, true, 0.3, 0.1));
    assert!(!fade.is_shown(0));
    assert!(!fade.is_shown(1));
    assert!(fade.observe(0, true, 0.5, 0.1));
    assert_eq!(fade.remaining(), 1);
}

#[test]
fn fade_out_of_range_index_is_ignored() {
    let mut fade = FadeTracker::new(1);
    assert!(!fade.observe(5, true, 1.0, 0.1));
    assert!(!fade.is_shown(5));
    assert_eq!(fade.remaining(), 1);
}
