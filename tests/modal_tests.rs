// Host-side tests for the project table and modal state.
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

use crate::core::projects::*;
use crate::core::state::*;

#[test]
fn sample_table_has_three_records() {
    let table = ProjectTable::sample();
    assert_eq!(table.len(), 3);
    assert!(!table.is_empty());
    assert_eq!(table.ids().collect::<Vec<_>>(), vec!["1", "2", "3"]);
}

#[test]
fn opening_known_id_yields_exactly_that_record() {
    let table = ProjectTable::sample();
    for n in 1..=3 {
        let id = n.to_string();
        let mut modal = ModalState::default();
        let project = modal.open(&table, &id).expect("known id");
        assert_eq!(project.title, format!("Project Title {}", n));
        assert_eq!(project.image, format!("images/project{}.jpg", n));
        assert_eq!(
            project.description,
            format!("Detailed description of Project {}.", n)
        );
        assert_eq!(project.link, format!("https://liveproject{}.com", n));
        assert!(modal.is_open());
        assert_eq!(modal.current(), Some(id.as_str()));
    }
}

#[test]
fn unknown_id_leaves_modal_hidden_and_unchanged() {
    let table = ProjectTable::sample();
    let mut modal = ModalState::default();
    assert!(modal.open(&table, "42").is_none());
    assert!(modal.open(&table, "").is_none());
    assert!(modal.open(&table, "01").is_none());
    assert!(!modal.is_open());

    // Already showing a project: an unknown id must not replace it.
    modal.open(&table, "2");
    assert!(modal.open(&table, "nope").is_none());
    assert_eq!(modal.current(), Some("2"));
}

#[test]
fn close_control_and_backdrop_dismiss_content_does_not() {
    assert!(ModalClick::CloseControl.dismisses());
    assert!(ModalClick::Backdrop.dismisses());
    assert!(!ModalClick::Content.dismisses());
}

#[test]
fn close_reports_previous_visibility() {
    let table = ProjectTable::sample();
    let mut modal = ModalState::default();
    assert!(!modal.close());
    modal.open(&table, "1");
    assert!(modal.close());
    assert!(!modal.is_open());
    assert_eq!(modal.current(), None);
}

#[test]
fn custom_table_from_iterator() {
    let table: ProjectTable = vec![(
        "alpha".to_string(),
        Project::new("Alpha", "img/a.png", "First.", "https://a.example"),
    )]
    .into_iter()
    .collect();
    let mut modal = ModalState::default();
    assert_eq!(modal.open(&table, "alpha").map(|p| p.title.as_str()), Some("Alpha"));
    assert!(modal.open(&table, "1").is_none());
}
