use crate::core::{MenuConfig, MenuState};
use crate::dom;
use web_sys as web;

// Flip `class` relative to what the element carries right now.
fn toggle_class(el: &web::Element, class: &str) {
    let open = MenuState::from_open(dom::has_class(el, class)).toggle();
    dom::set_class(el, class, open);
}

/// Wire the hamburger button. Returns false when either element is missing.
pub fn wire_menu_toggle(document: &web::Document, cfg: &MenuConfig) -> bool {
    let (Some(button), Some(panel)) = (
        dom::query(document, &cfg.button),
        dom::query(document, &cfg.panel),
    ) else {
        return false;
    };

    let panel_class = cfg.panel_class.clone();
    let button_class = cfg.button_class.clone();
    let button_for_handler = button.clone();

    dom::add_listener(&button, "click", move |_ev: web::MouseEvent| {
        toggle_class(&panel, &panel_class);
        toggle_class(&button_for_handler, &button_class);
    });
    true
}
