use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{
    REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, TYPING_INTERVAL_MS, TYPING_START_DELAY_MS,
};

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct TypingState {
    pub started: bool,
    pub shown: usize,
}

pub enum TypingAction {
    Start,
    Tick { total: usize },
}

impl Reducible for TypingState {
    type Action = TypingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TypingAction::Start => Rc::new(TypingState { started: true, ..*self }),
            TypingAction::Tick { total } if self.started && self.shown < total => {
                Rc::new(TypingState { shown: self.shown + 1, ..*self })
            }
            TypingAction::Tick { .. } => self,
        }
    }
}

pub fn typed_prefix(text: &str, shown: usize) -> String {
    text.chars().take(shown).collect()
}

/// Types `text` out one character at a time, once per mount.
#[hook]
pub fn use_typing_effect(text: AttrValue) -> String {
    let total = text.chars().count();
    let typing = use_reducer(TypingState::default);

    {
        let typing = typing.clone();
        use_timeout(move || typing.dispatch(TypingAction::Start), TYPING_START_DELAY_MS);
    }

    let running = typing.started && typing.shown < total;
    {
        let typing = typing.clone();
        // An interval of 0 stops the timer once the text is complete.
        use_interval(
            move || typing.dispatch(TypingAction::Tick { total }),
            if running { TYPING_INTERVAL_MS } else { 0 },
        );
    }

    typed_prefix(&text, typing.shown)
}

pub fn parallax_transform(scroll_y: f64, rate: f64) -> String {
    let offset = scroll_y * rate;
    // Avoid rendering "-0px" at the top of the page.
    let offset = if offset == 0.0 { 0.0 } else { offset };
    format!("translate3d(0px, {}px, 0px)", offset)
}

#[hook]
pub fn use_parallax(rate: f64) -> String {
    let scroll_y = use_state(|| 0.0_f64);

    {
        let scroll_y = scroll_y.clone();
        use_event_with_window("scroll", move |_: Event| {
            if let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                scroll_y.set(y);
            }
        });
    }

    parallax_transform(*scroll_y, rate)
}

const HIDDEN: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(20px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];

const REVEALED: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

fn apply_style(element: &HtmlElement, rules: &[(&str, &str)]) {
    let style = element.style();
    for (property, value) in rules {
        let _ = style.set_property(property, value);
    }
}

/// Live observer for one subtree. Dropping it disconnects the observer.
pub struct RevealSubscription {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for RevealSubscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn reveal_within(root: &Element, selector: &str) -> Result<RevealSubscription, JsValue> {
    let targets = root.query_selector_all(selector)?;

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(element) = target.dyn_ref::<HtmlElement>() {
                    apply_style(element, &REVEALED);
                }
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    for i in 0..targets.length() {
        if let Some(element) = targets.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            apply_style(&element, &HIDDEN);
            observer.observe(&element);
        }
    }

    Ok(RevealSubscription {
        observer,
        _callback: callback,
    })
}

#[hook]
pub fn use_scroll_reveal(root: NodeRef, selector: &'static str) {
    use_effect_with_deps(
        move |root: &NodeRef| {
            let subscription = root.cast::<Element>().and_then(|el| {
                reveal_within(&el, selector)
                    .map_err(|e| warn!("Scroll reveal unavailable: {:?}", e))
                    .ok()
            });
            move || drop(subscription)
        },
        root,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: impl IntoIterator<Item = TypingAction>) -> TypingState {
        *actions
            .into_iter()
            .fold(Rc::new(TypingState::default()), |s, a| s.reduce(a))
    }

    #[test]
    fn ticks_before_start_do_nothing() {
        let state = run((0..3).map(|_| TypingAction::Tick { total: 5 }));
        assert_eq!(state, TypingState::default());
    }

    #[test]
    fn reveals_one_char_per_tick_and_stops_at_end() {
        let mut actions = vec![TypingAction::Start];
        actions.extend((0..10).map(|_| TypingAction::Tick { total: 4 }));
        let state = run(actions);
        assert!(state.started);
        assert_eq!(state.shown, 4);
    }

    #[test]
    fn prefix_counts_characters_not_bytes() {
        assert_eq!(typed_prefix("Pawsome", 0), "");
        assert_eq!(typed_prefix("Pawsome", 3), "Paw");
        assert_eq!(typed_prefix("Café 🐶", 6), "Café 🐶");
        assert_eq!(typed_prefix("Café 🐶", 4), "Café");
        assert_eq!(typed_prefix("abc", 99), "abc");
    }

    #[test]
    fn parallax_moves_against_scroll() {
        assert_eq!(parallax_transform(0.0, -0.5), "translate3d(0px, 0px, 0px)");
        assert_eq!(parallax_transform(200.0, -0.5), "translate3d(0px, -100px, 0px)");
        assert_eq!(parallax_transform(75.0, -0.5), "translate3d(0px, -37.5px, 0px)");
    }
}
