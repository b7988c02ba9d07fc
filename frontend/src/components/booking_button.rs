use yew::prelude::*;

use crate::config::BOOKING_URL;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Primary,
    Outline,
}

impl Variant {
    pub fn class(self) -> &'static str {
        match self {
            Variant::Primary => "booking-button--primary",
            Variant::Outline => "booking-button--outline",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BookingButtonProps {
    #[prop_or_default]
    pub variant: Variant,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// Call to action that opens the booking page in a new tab.
#[function_component(BookingButton)]
pub fn booking_button(props: &BookingButtonProps) -> Html {
    html! {
        <a
            href={BOOKING_URL}
            target="_blank"
            rel="noreferrer"
            class={classes!("booking-button", props.variant.class(), props.class.clone())}
            onclick={props.onclick.clone()}
        >
            <span class="booking-button__fill"></span>
            <span class="booking-button__label">
                { for props.children.iter() }
                <i class="arrow">{"→"}</i>
            </span>
        </a>
    }
}
