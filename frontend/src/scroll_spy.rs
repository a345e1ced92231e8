use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// A section is active once at least half of it is inside the viewport.
pub const SPY_THRESHOLD: f64 = 0.5;

#[derive(Clone, Debug, PartialEq)]
pub struct ObservedEntry {
    pub id: String,
    pub intersecting: bool,
    pub ratio: f64,
}

impl ObservedEntry {
    /// A section leaving the viewport still intersects, only below the threshold.
    pub fn crossed_into_view(&self) -> bool {
        self.intersecting && self.ratio >= SPY_THRESHOLD
    }
}

/// Decides which registered section is active from observer batches.
///
/// Only entries at or above the threshold count, so a section scrolling out
/// of view never wins. When several sections are above it in the same batch
/// the one registered first (the topmost one on the page) wins.
#[derive(Clone, Debug)]
pub struct SectionSpy {
    sections: Vec<String>,
    active: String,
}

impl SectionSpy {
    pub fn new<I, S>(sections: I, initial: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: sections.into_iter().map(Into::into).collect(),
            active: initial.to_string(),
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Applies one batch of intersection changes. Returns true when the
    /// active section changed.
    pub fn observe(&mut self, batch: &[ObservedEntry]) -> bool {
        let winner = batch
            .iter()
            .filter(|entry| entry.crossed_into_view())
            .filter_map(|entry| self.position(&entry.id))
            .min();

        match winner {
            Some(index) if self.sections[index] != self.active => {
                self.active = self.sections[index].clone();
                true
            }
            _ => false,
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section == id)
    }
}

type BatchCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Owns an `IntersectionObserver` and its JS callback. Dropping it
/// disconnects the observer.
pub struct ObserverRegistration {
    observer: IntersectionObserver,
    _callback: BatchCallback,
}

impl ObserverRegistration {
    pub fn new<F>(threshold: f64, root_margin: &str, mut on_batch: F) -> Result<Self, JsValue>
    where
        F: FnMut(&[ObservedEntry], &IntersectionObserver) + 'static,
    {
        let callback: BatchCallback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let batch: Vec<ObservedEntry> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| ObservedEntry {
                    id: entry.target().id(),
                    intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                })
                .collect();
            on_batch(&batch, &observer);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for ObserverRegistration {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Tracks which of `sections` (element ids, in page order) is in view.
#[hook]
pub fn use_scroll_spy(sections: Vec<&'static str>, initial: &'static str) -> String {
    let active = use_state(|| initial.to_string());

    {
        let active = active.clone();
        use_effect_with_deps(
            move |sections: &Vec<&'static str>| {
                let spy = Rc::new(RefCell::new(SectionSpy::new(sections.iter().copied(), initial)));
                let registration = ObserverRegistration::new(SPY_THRESHOLD, "0px", move |batch, _| {
                    let mut spy = spy.borrow_mut();
                    if spy.observe(batch) {
                        debug!("Active section: {}", spy.active());
                        active.set(spy.active().to_string());
                    }
                });

                let registration = match registration {
                    Ok(registration) => {
                        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                            for id in sections {
                                match document.get_element_by_id(id) {
                                    Some(element) => registration.observe(&element),
                                    None => warn!("Section #{} is not mounted", id),
                                }
                            }
                        }
                        Some(registration)
                    }
                    Err(err) => {
                        warn!("IntersectionObserver unavailable, keeping #{} active: {:?}", initial, err);
                        None
                    }
                };

                move || drop(registration)
            },
            sections,
        );
    }

    (*active).clone()
}
