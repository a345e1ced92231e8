use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use web_sys::{Element, IntersectionObserver};
use yew::prelude::*;

use crate::scroll_spy::{ObservedEntry, ObserverRegistration};

pub const REVEAL_ROOT_MARGIN: &str = "-100px";

/// Flips to seen on the first intersection and never flips back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    seen: bool,
}

impl VisibilityLatch {
    pub fn seen(&self) -> bool {
        self.seen
    }

    /// Returns true only for the call that first latches.
    pub fn record(&mut self, intersecting: bool) -> bool {
        if self.seen || !intersecting {
            return false;
        }
        self.seen = true;
        true
    }
}

#[hook]
pub fn use_on_screen(node: NodeRef, root_margin: &'static str) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut registration = None;
                if let Some(element) = node.cast::<Element>() {
                    let latch = Rc::new(Cell::new(VisibilityLatch::default()));
                    let on_batch = {
                        let visible = visible.clone();
                        move |batch: &[ObservedEntry], observer: &IntersectionObserver| {
                            let mut state = latch.get();
                            if state.seen() {
                                return;
                            }
                            if batch.iter().any(|entry| state.record(entry.intersecting)) {
                                latch.set(state);
                                visible.set(true);
                                observer.disconnect();
                            }
                        }
                    };
                    match ObserverRegistration::new(0.0, root_margin, on_batch) {
                        Ok(observer) => {
                            observer.observe(&element);
                            registration = Some(observer);
                        }
                        Err(err) => {
                            // Without an observer nothing would ever reveal the content.
                            warn!("IntersectionObserver unavailable, showing content: {:?}", err);
                            visible.set(true);
                        }
                    }
                }
                move || drop(registration)
            },
            node,
        );
    }

    *visible
}

#[derive(Properties, PartialEq)]
pub struct AnimateOnVisibleProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay_ms: u32,
}

#[function_component(AnimateOnVisible)]
pub fn animate_on_visible(props: &AnimateOnVisibleProps) -> Html {
    let node = use_node_ref();
    let on_screen = use_on_screen(node.clone(), REVEAL_ROOT_MARGIN);

    let style = (props.delay_ms > 0).then(|| format!("animation-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            class={classes!(props.class.clone(), if on_screen { "fade-in-up" } else { "reveal-pending" })}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_starts_unseen() {
        assert!(!VisibilityLatch::default().seen());
    }

    #[test]
    fn test_latch_ignores_misses() {
        let mut latch = VisibilityLatch::default();
        assert!(!latch.record(false));
        assert!(!latch.seen());
    }

    #[test]
    fn test_latch_stays_seen() {
        let mut latch = VisibilityLatch::default();
        assert!(latch.record(true));
        assert!(!latch.record(false));
        assert!(!latch.record(true));
        assert!(latch.seen());
    }
}
