use log::debug;
use yew::prelude::*;

use crate::anchors::Anchor;
use crate::components::booking_button::BookingButton;
use crate::components::reveal::{stagger_delay, Reveal};
use crate::components::section_heading::SectionHeading;
use crate::config::{BOOKING_URL, PRICING_CTA_DELAY_MS, PRICING_STAGGER_MS};
use crate::data::ServiceItem;

/// Text content of one row in the price list. Optional parts are `None`
/// when the service has nothing to say there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricingRow {
    pub name: &'static str,
    pub duration: Option<&'static str>,
    pub description: Option<&'static str>,
    pub price: &'static str,
    pub book_label: &'static str,
    pub book_href: &'static str,
}

impl From<&ServiceItem> for PricingRow {
    fn from(item: &ServiceItem) -> Self {
        PricingRow {
            name: item.name,
            duration: item.duration(),
            description: item.description(),
            price: item.price,
            book_label: "Umów",
            book_href: BOOKING_URL,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub item: ServiceItem,
}

#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let row = PricingRow::from(&props.item);

    html! {
        <div class="pricing-card">
            <div class="pricing-card__info">
                <h4 class="pricing-card__name">
                    {row.name}
                    {
                        if let Some(duration) = row.duration {
                            html! { <span class="pricing-card__duration">{duration}</span> }
                        } else {
                            html! {}
                        }
                    }
                </h4>
                {
                    if let Some(description) = row.description {
                        html! { <p class="pricing-card__description">{description}</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="pricing-card__side">
                <span class="pricing-card__price">{row.price}</span>
                <a href={row.book_href} target="_blank" rel="noreferrer" class="pricing-card__book">
                    {row.book_label}
                </a>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub items: &'static [ServiceItem],
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    debug!("Rendering Pricing with {} services", props.items.len());

    html! {
        <section id={Anchor::Pricing.id()} class="pricing">
            <div class="pricing__shape pricing__shape--left"></div>
            <div class="pricing__shape pricing__shape--right"></div>

            <div class="container pricing__inner">
                <SectionHeading title="Cennik Usług" subtitle="Jakość w dobrej cenie" />

                <div class="pricing-grid">
                    { for props.items.iter().enumerate().map(|(idx, item)| html! {
                        <Reveal key={idx} delay_ms={stagger_delay(idx, PRICING_STAGGER_MS)}>
                            <PricingCard item={item.clone()} />
                        </Reveal>
                    }) }
                </div>

                <Reveal delay_ms={PRICING_CTA_DELAY_MS}>
                    <div class="pricing__cta">
                        <BookingButton>{"Zarezerwuj Termin Online"}</BookingButton>
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .pricing {
                    position: relative;
                    overflow: hidden;
                    padding: 6rem 0;
                    background: #09090b;
                }
                .pricing__shape {
                    position: absolute;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 50%;
                    filter: blur(100px);
                }
                .pricing__shape--left {
                    left: -10rem;
                    top: 10rem;
                    background: rgba(88, 28, 135, 0.1);
                }
                .pricing__shape--right {
                    right: -10rem;
                    bottom: 10rem;
                    background: rgba(184, 134, 11, 0.05);
                }
                .pricing__inner {
                    position: relative;
                    z-index: 1;
                }
                .pricing-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    column-gap: 3rem;
                    row-gap: 1rem;
                    max-width: 64rem;
                    margin: 0 auto;
                }
                .pricing-card {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    padding: 1.5rem 1rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    transition: background 0.3s;
                }
                .pricing-card:hover {
                    background: rgba(255, 255, 255, 0.05);
                }
                .pricing-card__info {
                    display: flex;
                    flex-direction: column;
                }
                .pricing-card__name {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #fff;
                    font-size: 1.125rem;
                    font-weight: 500;
                    transition: color 0.3s;
                }
                .pricing-card:hover .pricing-card__name {
                    color: #e6c35c;
                }
                .pricing-card__duration {
                    font-size: 0.75rem;
                    font-weight: 400;
                    color: #4b5563;
                    padding: 0.125rem 0.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    border-radius: 9999px;
                }
                .pricing-card__description {
                    max-width: 24rem;
                    margin-top: 0.25rem;
                    color: #6b7280;
                    font-size: 0.875rem;
                }
                .pricing-card__side {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-end;
                    gap: 0.5rem;
                }
                .pricing-card__price {
                    color: #fff;
                    font-size: 1.25rem;
                    font-weight: 700;
                    white-space: nowrap;
                }
                .pricing-card__book {
                    color: #d4af37;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    text-decoration: none;
                    opacity: 0;
                    transform: translateX(1rem);
                    transition: all 0.3s;
                }
                .pricing-card:hover .pricing-card__book {
                    opacity: 1;
                    transform: translateX(0);
                }
                .pricing__cta {
                    margin-top: 4rem;
                    text-align: center;
                }
                @media (max-width: 768px) {
                    .pricing-grid { grid-template-columns: 1fr; }
                    .pricing-card__book { opacity: 1; transform: none; }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PRICING;
    use rstest::rstest;

    #[rstest]
    fn test_beardcut_row_shows_everything() {
        let item = ServiceItem {
            name: "Strzyżenie Brody (Beardcut)",
            description: Some("Olejek nawilżający, gorący ręcznik, shaver"),
            price: "80,00 zł",
            duration: Some("30min"),
        };
        let row = PricingRow::from(&item);

        assert_eq!(row.name, "Strzyżenie Brody (Beardcut)");
        assert_eq!(row.description, Some("Olejek nawilżający, gorący ręcznik, shaver"));
        assert_eq!(row.price, "80,00 zł");
        assert_eq!(row.duration, Some("30min"));
        assert_eq!(row.book_label, "Umów");
        assert_eq!(row.book_href, BOOKING_URL);
    }

    #[rstest]
    fn test_beardcut_is_in_the_price_list() {
        let item = PRICING
            .iter()
            .find(|item| item.name == "Strzyżenie Brody (Beardcut)")
            .expect("beardcut is listed");
        let row = PricingRow::from(item);
        assert_eq!(row.description, Some("Olejek nawilżający, gorący ręcznik, shaver"));
        assert_eq!(row.price, "80,00 zł");
        assert_eq!(row.duration, Some("30min"));
    }

    #[rstest]
    fn test_rows_follow_field_presence() {
        for item in PRICING {
            let row = PricingRow::from(item);
            assert_eq!(row.name, item.name);
            assert_eq!(row.price, item.price);
            assert_eq!(
                row.description.is_some(),
                item.description.is_some_and(|d| !d.is_empty()),
                "{}",
                item.name
            );
            assert_eq!(
                row.duration.is_some(),
                item.duration.is_some_and(|d| !d.is_empty()),
                "{}",
                item.name
            );
        }
    }

    #[rstest]
    #[case(Some("Short hair cut"), Some("Short hair cut"))]
    #[case(Some(""), None)]
    #[case(None, None)]
    fn test_description_is_never_a_placeholder(
        #[case] description: Option<&'static str>,
        #[case] expected: Option<&'static str>,
    ) {
        let item = ServiceItem {
            name: "Odsiwanie Brody",
            description,
            price: "70,00 zł",
            duration: None,
        };
        let row = PricingRow::from(&item);
        assert_eq!(row.description, expected);
        assert_eq!(row.duration, None);
    }
}
