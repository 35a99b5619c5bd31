use crate::core::{FadeOptions, FadeTracker};
use crate::dom;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn build_observer(
    faders: Rc<Vec<web::Element>>,
    opts: &FadeOptions,
) -> anyhow::Result<web::IntersectionObserver> {
    let mut tracker = FadeTracker::new(faders.len());
    let threshold = opts.threshold;
    let visible_class = opts.visible_class.clone();

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = faders.iter().position(|el| *el == target) else {
                    continue;
                };
                let reveal = tracker.observe(
                    index,
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                    threshold,
                );
                if reveal {
                    dom::set_class(&target, &visible_class, true);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    init.set_root_margin(&opts.root_margin());

    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();
    Ok(observer)
}

/// Observe every fade-in element and reveal each once. Returns the count observed.
pub fn wire_fade_in(document: &web::Document, opts: &FadeOptions) -> usize {
    let faders = dom::query_all(document, &opts.selector);
    if faders.is_empty() {
        return 0;
    }
    let faders = Rc::new(faders);

    match build_observer(faders.clone(), opts) {
        Ok(observer) => {
            for el in faders.iter() {
                observer.observe(el);
            }
        }
        Err(e) => {
            log::warn!("[fade] observer unavailable, revealing all: {}", e);
            for el in faders.iter() {
                dom::set_class(el, &opts.visible_class, true);
            }
        }
    }
    faders.len()
}
