use super::constants::*;
use super::projects::ProjectTable;
use serde::{Deserialize, Serialize};

/// Everything `init` needs to wire the page, passed in explicitly.
///
/// Every section falls back to the defaults from `constants.rs`, so a page
/// may override a single field (typically `projects`) and leave the rest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub menu: MenuConfig,
    pub modal: ModalConfig,
    pub scroll: ScrollConfig,
    pub fade: FadeOptions,
    pub projects: ProjectTable,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            menu: MenuConfig::default(),
            modal: ModalConfig::default(),
            scroll: ScrollConfig::default(),
            fade: FadeOptions::default(),
            projects: ProjectTable::sample(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub button: String,
    pub panel: String,
    pub panel_class: String,
    pub button_class: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            button: MENU_BUTTON_SELECTOR.to_string(),
            panel: NAV_PANEL_SELECTOR.to_string(),
            panel_class: NAV_ACTIVE_CLASS.to_string(),
            button_class: BUTTON_TOGGLED_CLASS.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub container_id: String,
    pub image_id: String,
    pub description_id: String,
    pub link_id: String,
    pub close_selector: String,
    pub heading_selector: String,
    pub item_selector: String,
    pub project_attr: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            container_id: MODAL_ID.to_string(),
            image_id: MODAL_IMAGE_ID.to_string(),
            description_id: MODAL_DESCRIPTION_ID.to_string(),
            link_id: MODAL_LINK_ID.to_string(),
            close_selector: MODAL_CLOSE_SELECTOR.to_string(),
            heading_selector: MODAL_HEADING_SELECTOR.to_string(),
            item_selector: PORTFOLIO_ITEM_SELECTOR.to_string(),
            project_attr: PROJECT_ID_ATTR.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub anchor_selector: String,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            anchor_selector: INTERNAL_ANCHOR_SELECTOR.to_string(),
        }
    }
}

/// Intersection settings for the fade-in reveal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeOptions {
    pub selector: String,
    pub visible_class: String,
    pub threshold: f64,
    pub bottom_margin_px: u32,
}

impl Default for FadeOptions {
    fn default() -> Self {
        Self {
            selector: FADE_SELECTOR.to_string(),
            visible_class: FADE_VISIBLE_CLASS.to_string(),
            threshold: FADE_THRESHOLD,
            bottom_margin_px: FADE_BOTTOM_MARGIN_PX,
        }
    }
}

impl FadeOptions {
    /// CSS margin string for the observer root; shrinks the bottom edge.
    pub fn root_margin(&self) -> String {
        if self.bottom_margin_px == 0 {
            return "0px 0px 0px 0px".to_string();
        }
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }

    /// Clamp the threshold into the 0..=1 range the observer accepts.
    pub fn validate(mut self) -> Self {
        self.threshold = if self.threshold.is_finite() {
            self.threshold.clamp(0.0, 1.0)
        } else {
            FADE_THRESHOLD
        };
        self
    }
}

impl SiteConfig {
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let cfg: SiteConfig = serde_json::from_str(text)?;
        Ok(Self {
            fade: cfg.fade.validate(),
            ..cfg
        })
    }
}
