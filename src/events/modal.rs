use crate::core::{ModalClick, ModalConfig, ModalState, Project, ProjectTable};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Handles into the modal markup, resolved once at init.
#[derive(Clone)]
struct ModalElements {
    container: web::Element,
    image: web::HtmlImageElement,
    description: web::Element,
    link: web::HtmlAnchorElement,
    close: web::Element,
    heading: Option<web::Element>,
}

impl ModalElements {
    fn resolve(document: &web::Document, cfg: &ModalConfig) -> Option<Self> {
        let container = document.get_element_by_id(&cfg.container_id)?;
        let image = document
            .get_element_by_id(&cfg.image_id)?
            .dyn_into::<web::HtmlImageElement>()
            .ok()?;
        let description = document.get_element_by_id(&cfg.description_id)?;
        let link = document
            .get_element_by_id(&cfg.link_id)?
            .dyn_into::<web::HtmlAnchorElement>()
            .ok()?;
        let close = dom::query(document, &cfg.close_selector)?;
        let heading = container.query_selector(&cfg.heading_selector).ok().flatten();
        Some(Self {
            container,
            image,
            description,
            link,
            close,
            heading,
        })
    }

    fn fill(&self, project: &Project) {
        self.image.set_src(&project.image);
        self.image.set_alt(&project.title);
        self.description.set_text_content(Some(&project.description));
        self.link.set_href(&project.link);
        if let Some(h) = &self.heading {
            h.set_text_content(Some(&project.title));
        }
    }
}

struct ModalCtx {
    els: ModalElements,
    state: RefCell<ModalState>,
    projects: ProjectTable,
}

impl ModalCtx {
    fn show(&self, id: &str) {
        let mut state = self.state.borrow_mut();
        match state.open(&self.projects, id) {
            Some(project) => {
                self.els.fill(project);
                dom::set_display(&self.els.container, true);
            }
            None => log::debug!("[modal] unknown project id {:?}", id),
        }
    }

    fn click(&self, at: ModalClick) {
        if at.dismisses() {
            self.state.borrow_mut().close();
            dom::set_display(&self.els.container, false);
        }
    }
}

/// Wire portfolio items, close control, backdrop and Escape.
/// Returns false when any required modal element is missing.
pub fn wire_project_modal(
    document: &web::Document,
    cfg: &ModalConfig,
    projects: &ProjectTable,
) -> bool {
    let Some(els) = ModalElements::resolve(document, cfg) else {
        return false;
    };
    let ctx = Rc::new(ModalCtx {
        els,
        state: RefCell::new(ModalState::default()),
        projects: projects.clone(),
    });

    let items = dom::query_all(document, &cfg.item_selector);
    for item in &items {
        let ctx = ctx.clone();
        let item_for_handler = item.clone();
        let attr = cfg.project_attr.clone();
        dom::add_listener(item, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            if let Some(id) = item_for_handler.get_attribute(&attr) {
                ctx.show(&id);
            }
        });
    }

    {
        let ctx_close = ctx.clone();
        dom::add_listener(&ctx.els.close, "click", move |_ev: web::MouseEvent| {
            ctx_close.click(ModalClick::CloseControl);
        });
    }

    if let Some(window) = web::window() {
        let ctx_backdrop = ctx.clone();
        dom::add_listener(&window, "click", move |ev: web::MouseEvent| {
            let on_backdrop = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .map(|t| t == ctx_backdrop.els.container)
                .unwrap_or(false);
            let at = if on_backdrop {
                ModalClick::Backdrop
            } else {
                ModalClick::Content
            };
            ctx_backdrop.click(at);
        });
    }

    let ctx_key = ctx.clone();
    dom::add_listener(document, "keydown", move |ev: web::KeyboardEvent| {
        if ev.key() == "Escape" && ctx_key.state.borrow().is_open() {
            ctx_key.click(ModalClick::CloseControl);
        }
    });

    log::debug!("[modal] wired {} portfolio items", items.len());
    true
}
