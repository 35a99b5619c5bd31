#![cfg(target_arch = "wasm32")]
use crate::core::{SiteConfig, CONFIG_ELEMENT_ID};
use wasm_bindgen::prelude::*;
use web_sys as web;

pub mod core;
mod dom;
mod events;

/// Which behaviors found their markup and were registered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Features {
    pub menu: bool,
    pub modal: bool,
    pub scroll_anchors: usize,
    pub fade_targets: usize,
}

// A page may embed `<script type="application/json" id="site-config">` to
// override any part of the defaults; a bad block falls back to defaults.
fn load_config(document: &web::Document) -> SiteConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&text) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("[config] ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            SiteConfig::default()
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    if let Err(e) = run() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no window document"))?;

    let config = load_config(&document);
    let features = init(&document, &config);
    log::debug!("[init] {:?}", features);
    Ok(())
}

/// Register every behavior whose elements are present. Each one is
/// independent; a missing element only disables its own feature.
pub fn init(document: &web::Document, config: &SiteConfig) -> Features {
    let menu = events::wire_menu_toggle(document, &config.menu);
    if !menu {
        log::debug!("[menu] button or panel missing, skipped");
    }

    let modal = events::wire_project_modal(document, &config.modal, &config.projects);
    if !modal {
        log::debug!("[modal] required elements missing, skipped");
    }

    Features {
        menu,
        modal,
        scroll_anchors: events::wire_smooth_scroll(document, &config.scroll),
        fade_targets: events::wire_fade_in(document, &config.fade),
    }
}
