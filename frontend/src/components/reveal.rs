use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{REVEAL_DURATION_MS, REVEAL_OFFSET_PX, REVEAL_THRESHOLD};

/// Whether an element has been scrolled into view yet. The only transition is
/// `NotRevealed -> Revealed`; there is no way back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    NotRevealed,
    Revealed,
}

/// What the intersection observer told us about the element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportReport {
    Entered,
    Left,
}

impl RevealState {
    pub fn observe(self, report: ViewportReport) -> Self {
        match (self, report) {
            (RevealState::NotRevealed, ViewportReport::Entered) => RevealState::Revealed,
            (state, _) => state,
        }
    }

    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }
}

impl Reducible for RevealState {
    type Action = ViewportReport;

    fn reduce(self: Rc<Self>, report: ViewportReport) -> Rc<Self> {
        let next = self.observe(report);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Inline style for a revealed (or still hidden) wrapper.
pub fn reveal_style(state: RevealState, delay_ms: u32) -> String {
    let (opacity, offset) = if state.is_revealed() {
        (1, 0)
    } else {
        (0, REVEAL_OFFSET_PX)
    };
    format!(
        "transition: opacity {d}ms ease-out, transform {d}ms ease-out; transition-delay: {delay_ms}ms; \
         opacity: {opacity}; transform: translateY({offset}px);",
        d = REVEAL_DURATION_MS,
    )
}

/// Delay for the item at `index` of a list revealed as a cascade.
pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(step_ms))
}

/// One-shot intersection watch on a single element. Disconnects itself after
/// the first intersecting report, and on drop.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn watch<F>(element: &Element, on_report: F) -> Result<Self, JsValue>
    where
        F: Fn(ViewportReport) + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let entered = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                if entered {
                    observer.disconnect();
                    on_report(ViewportReport::Entered);
                } else {
                    on_report(ViewportReport::Left);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_reducer(RevealState::default);

    {
        let node = node.clone();
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let report = dispatcher.clone();
                    match RevealObserver::watch(&element, move |r| report.dispatch(r)) {
                        Ok(observer) => Some(observer),
                        Err(err) => {
                            // Without an observer nothing would ever show up
                            warn!("IntersectionObserver unavailable, revealing immediately: {:?}", err);
                            dispatcher.dispatch(ViewportReport::Entered);
                            None
                        }
                    }
                });
                move || drop(observer)
            },
            (),
        );
    }

    html! {
        <div ref={node} class="reveal" style={reveal_style(*state, props.delay_ms)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_starts_hidden() {
        assert_eq!(RevealState::default(), RevealState::NotRevealed);
        assert!(!RevealState::default().is_revealed());
    }

    #[rstest]
    fn test_reveal_latches() {
        let state = RevealState::default().observe(ViewportReport::Left);
        assert_eq!(state, RevealState::NotRevealed);

        let state = state.observe(ViewportReport::Entered);
        assert_eq!(state, RevealState::Revealed);

        let state = state
            .observe(ViewportReport::Left)
            .observe(ViewportReport::Left)
            .observe(ViewportReport::Entered)
            .observe(ViewportReport::Left);
        assert_eq!(state, RevealState::Revealed);
    }

    #[rstest]
    fn test_reducer_keeps_same_rc_when_nothing_changes() {
        let revealed = Rc::new(RevealState::Revealed);
        let next = revealed.clone().reduce(ViewportReport::Left);
        assert!(Rc::ptr_eq(&revealed, &next));

        let hidden = Rc::new(RevealState::NotRevealed);
        assert_eq!(*hidden.reduce(ViewportReport::Entered), RevealState::Revealed);
    }

    #[rstest]
    fn test_hidden_style() {
        let style = reveal_style(RevealState::NotRevealed, 0);
        assert!(style.contains("opacity: 0;"));
        assert!(style.contains("translateY(20px)"));
        assert!(style.contains("transition-delay: 0ms;"));
        assert!(style.contains("1000ms ease-out"));
    }

    #[rstest]
    fn test_revealed_style() {
        let style = reveal_style(RevealState::Revealed, 250);
        assert!(style.contains("opacity: 1;"));
        assert!(style.contains("translateY(0px)"));
        assert!(style.contains("transition-delay: 250ms;"));
    }

    #[rstest]
    #[case(0, 100, 0)]
    #[case(1, 100, 100)]
    #[case(5, 100, 500)]
    #[case(7, 50, 350)]
    fn test_stagger_delay(#[case] index: usize, #[case] step: u32, #[case] expected: u32) {
        assert_eq!(stagger_delay(index, step), expected);
    }

    #[rstest]
    fn test_stagger_delay_saturates() {
        assert_eq!(stagger_delay(usize::MAX, 50), u32::MAX);
        assert_eq!(stagger_delay(100_000_000, 100), u32::MAX);
    }
}
