use log::info;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent};
use yew::prelude::*;

mod anchors;
mod config;
mod data;
mod listener;
mod components {
    pub mod booking_button;
    pub mod nav;
    pub mod reveal;
    pub mod section_heading;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod hero;
    pub mod portfolio;
    pub mod pricing;
}

use components::nav::Nav;
use pages::{about::About, contact::Contact, hero::Hero, portfolio::Portfolio, pricing::Pricing};

/// Sections of the page, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSection {
    Hero,
    About,
    Portfolio,
    Pricing,
    Contact,
}

impl PageSection {
    pub const ORDER: [PageSection; 5] = [
        PageSection::Hero,
        PageSection::About,
        PageSection::Portfolio,
        PageSection::Pricing,
        PageSection::Contact,
    ];
}

fn section(page: PageSection) -> Html {
    match page {
        PageSection::Hero => html! { <Hero /> },
        PageSection::About => html! { <About team={data::TEAM} /> },
        PageSection::Portfolio => html! { <Portfolio items={data::PORTFOLIO} /> },
        PageSection::Pricing => html! { <Pricing items={data::PRICING} /> },
        PageSection::Contact => html! { <Contact /> },
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub fn glow_style(self) -> String {
        format!("left: {}px; top: {}px;", self.x, self.y)
    }
}

#[function_component]
fn App() -> Html {
    let pointer = use_state(PointerPosition::default);

    {
        let pointer = pointer.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = listener::on_window("mousemove", move |event: Event| {
                    if let Some(e) = event.dyn_ref::<MouseEvent>() {
                        pointer.set(PointerPosition {
                            x: e.client_x(),
                            y: e.client_y(),
                        });
                    }
                });
                move || drop(subscription)
            },
            (),
        );
    }

    html! {
        <div class="site">
            <div class="cursor-glow" style={pointer.glow_style()}></div>
            <Nav />
            <main>
                { for PageSection::ORDER.into_iter().map(section) }
            </main>
            <style>
                {r#"
                .site {
                    min-height: 100vh;
                    background: #000;
                    color: #e5e7eb;
                }
                .site ::selection {
                    background: #d4af37;
                    color: #000;
                }
                .cursor-glow {
                    position: fixed;
                    z-index: 50;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 50%;
                    background: rgba(212, 175, 55, 0.1);
                    filter: blur(80px);
                    transform: translate(-50%, -50%);
                    transition: transform 75ms;
                    pointer-events: none;
                }
                @media (max-width: 768px) {
                    .cursor-glow { display: none; }
                }
                "#}
            </style>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::SHOP_NAME);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_pointer_starts_at_origin() {
        assert_eq!(PointerPosition::default(), PointerPosition { x: 0, y: 0 });
    }

    #[rstest]
    #[case(PointerPosition { x: 0, y: 0 }, "left: 0px; top: 0px;")]
    #[case(PointerPosition { x: 640, y: 212 }, "left: 640px; top: 212px;")]
    #[case(PointerPosition { x: -15, y: 4000 }, "left: -15px; top: 4000px;")]
    fn test_glow_follows_pointer(#[case] pos: PointerPosition, #[case] style: &str) {
        assert_eq!(pos.glow_style(), style);
    }
}
