use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::anchors::Anchor;
use crate::components::booking_button::{BookingButton, Variant};
use crate::config::{BRAND_NAME, SCROLL_THRESHOLD_PX};
use crate::listener;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    /// A link inside the menu was followed.
    Navigate,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn apply(self, action: MenuAction) -> Self {
        match action {
            MenuAction::Toggle => MenuState { open: !self.open },
            MenuAction::Navigate => MenuState { open: false },
        }
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: MenuAction) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_reducer(MenuState::default);
    // Scroll fires constantly, only a flip across the threshold re-renders
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || {
                    if let Some(offset) = listener::scroll_offset() {
                        scrolled.set(is_scrolled(offset));
                    }
                };
                // Page may already be scrolled when reloaded mid-way
                update();
                let subscription = listener::on_window("scroll", move |_| update());
                move || drop(subscription)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    // Navigation itself is left to the browser, only the menu closes
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("Menu link followed, closing menu");
            menu.dispatch(MenuAction::Navigate);
        })
    };

    html! {
        <nav class={classes!("top-nav", (*scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-logo">
                    <div class="nav-logo__badge">{"✂"}</div>
                    <span class="nav-logo__name">{BRAND_NAME}</span>
                </div>

                <div class="nav-links">
                    { for Anchor::MENU.iter().map(|anchor| html! {
                        <a key={anchor.label()} href={anchor.href()} class="nav-link">
                            {anchor.label()}
                        </a>
                    }) }
                    <BookingButton variant={Variant::Outline} class="booking-button--small">
                        {"Umów Wizytę"}
                    </BookingButton>
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    { if menu.open { "✕" } else { "☰" } }
                </button>
            </div>

            <div class={classes!("mobile-menu", menu.open.then(|| "mobile-menu-open"))}>
                { for Anchor::MENU.iter().map(|anchor| html! {
                    <a key={anchor.label()} href={anchor.href()} class="mobile-menu__link" onclick={close_menu.clone()}>
                        {anchor.label()}
                    </a>
                }) }
                <BookingButton class="booking-button--wide" onclick={close_menu.clone()}>
                    {"Zarezerwuj"}
                </BookingButton>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 1.5rem 0;
                    background: transparent;
                    transition: all 0.5s;
                }
                .top-nav.scrolled {
                    padding: 1rem 0;
                    background: rgba(10, 10, 10, 0.7);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }
                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .nav-logo__badge {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: #d4af37;
                    color: #000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .nav-logo__name {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.25rem;
                    font-weight: 700;
                    letter-spacing: 0.05em;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    color: #d1d5db;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                    transition: color 0.3s;
                }
                .nav-link:hover {
                    color: #e6c35c;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .mobile-menu {
                    display: none;
                    position: absolute;
                    top: 100%;
                    left: 0;
                    width: 100%;
                    padding: 1.5rem;
                    flex-direction: column;
                    gap: 1.5rem;
                    background: rgba(10, 10, 10, 0.9);
                    backdrop-filter: blur(12px);
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    opacity: 0;
                    transform: translateY(-2.5rem);
                    pointer-events: none;
                    transition: all 0.5s;
                }
                .mobile-menu.mobile-menu-open {
                    opacity: 1;
                    transform: translateY(0);
                    pointer-events: auto;
                }
                .mobile-menu__link {
                    color: #d1d5db;
                    font-size: 1.125rem;
                    text-align: center;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                }
                @media (max-width: 768px) {
                    .nav-links { display: none; }
                    .burger-menu { display: block; }
                    .mobile-menu { display: flex; }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, false)]
    #[case(49.0, false)]
    #[case(50.0, false)]
    #[case(50.5, true)]
    #[case(51.0, true)]
    #[case(2400.0, true)]
    fn test_is_scrolled(#[case] offset: f64, #[case] expected: bool) {
        assert_eq!(is_scrolled(offset), expected);
    }

    #[rstest]
    fn test_scrolled_is_reversible() {
        let offsets = [0.0, 120.0, 51.0, 50.0, 10.0, 300.0];
        let flags: Vec<bool> = offsets.iter().map(|o| is_scrolled(*o)).collect();
        assert_eq!(flags, vec![false, true, true, false, false, true]);
    }

    #[rstest]
    fn test_scrolling_on_one_side_keeps_the_flag() {
        // Equal flags mean no state change, so no re-render while scrolling
        let below: Vec<bool> = [0.0, 10.0, 49.0, 50.0].iter().map(|o| is_scrolled(*o)).collect();
        assert!(below.iter().all(|f| !*f));
        let above: Vec<bool> = [51.0, 200.0, 900.0].iter().map(|o| is_scrolled(*o)).collect();
        assert!(above.iter().all(|f| *f));
    }

    #[rstest]
    fn test_menu_starts_closed() {
        assert!(!MenuState::default().open);
    }

    #[rstest]
    fn test_menu_toggle_opens() {
        assert!(MenuState::default().apply(MenuAction::Toggle).open);
    }

    #[rstest]
    fn test_menu_link_closes_open_menu() {
        let open = MenuState::default().apply(MenuAction::Toggle);
        assert!(!open.apply(MenuAction::Navigate).open);
    }

    #[rstest]
    fn test_menu_link_keeps_closed_menu_closed() {
        assert!(!MenuState::default().apply(MenuAction::Navigate).open);
    }

    #[rstest]
    #[case(MenuState { open: false })]
    #[case(MenuState { open: true })]
    fn test_menu_double_toggle_round_trips(#[case] start: MenuState) {
        let back = start.apply(MenuAction::Toggle).apply(MenuAction::Toggle);
        assert_eq!(back, start);
    }

    #[rstest]
    fn test_menu_reducer() {
        let state = Rc::new(MenuState::default());
        let state = state.reduce(MenuAction::Toggle);
        assert!(state.open);
        let state = state.reduce(MenuAction::Navigate);
        assert!(!state.open);
    }
}
