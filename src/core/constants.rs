// DOM contract: selectors, ids and state classes the page markup provides.

// Menu toggle
pub const MENU_BUTTON_SELECTOR: &str = ".hamburger";
pub const NAV_PANEL_SELECTOR: &str = ".nav-links";
pub const NAV_ACTIVE_CLASS: &str = "nav-active";
pub const BUTTON_TOGGLED_CLASS: &str = "toggle";

// Project modal
pub const MODAL_ID: &str = "modal";
pub const MODAL_IMAGE_ID: &str = "modal-image";
pub const MODAL_DESCRIPTION_ID: &str = "modal-description";
pub const MODAL_LINK_ID: &str = "modal-link";
pub const MODAL_CLOSE_SELECTOR: &str = ".close-button";
pub const MODAL_HEADING_SELECTOR: &str = "h2";
pub const PORTFOLIO_ITEM_SELECTOR: &str = ".portfolio-item";
pub const PROJECT_ID_ATTR: &str = "data-project";

// Smooth scroll
pub const INTERNAL_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Fade-in
pub const FADE_SELECTOR: &str = ".fade-in";
pub const FADE_VISIBLE_CLASS: &str = "show";
pub const FADE_THRESHOLD: f64 = 0.1; // fraction of the element in view
pub const FADE_BOTTOM_MARGIN_PX: u32 = 50; // trigger before the literal bottom edge

// Optional JSON config block embedded in the page
pub const CONFIG_ELEMENT_ID: &str = "site-config";
