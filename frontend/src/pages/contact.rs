use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::anchors::Anchor;
use crate::components::booking_button::BookingButton;
use crate::components::reveal::{stagger_delay, Reveal};
use crate::config::{ADDRESS, BRAND_NAME, CONTACT_STAGGER_MS, OPENING_HOURS, PHONE, SHOP_NAME};

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. Wszelkie prawa zastrzeżone.", year, SHOP_NAME)
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let year = Local::now().year();

    html! {
        <section id={Anchor::Contact.id()} class="contact">
            <div class="container">
                <div class="contact-grid">
                    <Reveal delay_ms={stagger_delay(0, CONTACT_STAGGER_MS)}>
                        <div>
                            <div class="contact__brand">
                                <div class="contact__badge">{"✂"}</div>
                                <span class="contact__brand-name">{BRAND_NAME}</span>
                            </div>
                            <p class="contact__blurb">
                                {"Profesjonalne usługi barberskie w wyjątkowej atmosferze. Zadbamy o Twój wygląd i samopoczucie."}
                            </p>
                        </div>
                    </Reveal>

                    <Reveal delay_ms={stagger_delay(1, CONTACT_STAGGER_MS)}>
                        <div>
                            <h3 class="contact__heading">{"Kontakt"}</h3>
                            <ul class="contact__list">
                                <li>
                                    <span class="contact__icon">{"📍"}</span>
                                    <span>{ADDRESS}</span>
                                </li>
                                <li>
                                    <span class="contact__icon">{"📞"}</span>
                                    <span>{PHONE}</span>
                                </li>
                                <li>
                                    <span class="contact__icon">{"🕘"}</span>
                                    <span>
                                        {OPENING_HOURS[0]}
                                        <br />
                                        {OPENING_HOURS[1]}
                                    </span>
                                </li>
                            </ul>
                        </div>
                    </Reveal>

                    <Reveal delay_ms={stagger_delay(2, CONTACT_STAGGER_MS)}>
                        <div>
                            <h3 class="contact__heading">{"Social Media"}</h3>
                            <div class="contact__socials">
                                <a href="#" class="social-link social-link--instagram">{"IG"}</a>
                                <a href="#" class="social-link social-link--facebook">{"FB"}</a>
                            </div>
                            <div class="contact__booking">
                                <BookingButton class="booking-button--wide">{"Rezerwuj"}</BookingButton>
                            </div>
                        </div>
                    </Reveal>
                </div>

                <footer class="contact__footer">{copyright_line(year)}</footer>
            </div>

            <style>
                {r#"
                .contact {
                    position: relative;
                    padding: 6rem 0;
                    background: #000;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .contact-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 3rem;
                }
                .contact__brand {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                }
                .contact__badge {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.05);
                    color: #d4af37;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .contact__brand-name {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.25rem;
                    font-weight: 700;
                }
                .contact__blurb {
                    color: #6b7280;
                    line-height: 1.75;
                }
                .contact__heading {
                    color: #fff;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 1.5rem;
                }
                .contact__list {
                    list-style: none;
                    padding: 0;
                    color: #9ca3af;
                }
                .contact__list li {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1rem;
                    transition: color 0.3s;
                }
                .contact__list li:hover {
                    color: #fff;
                }
                .contact__icon {
                    color: #d4af37;
                }
                .contact__socials {
                    display: flex;
                    gap: 1rem;
                }
                .social-link {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    text-decoration: none;
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    transition: all 0.3s;
                }
                .social-link--instagram:hover {
                    background: #d4af37;
                    color: #000;
                }
                .social-link--facebook:hover {
                    background: #2563eb;
                }
                .contact__booking {
                    margin-top: 2rem;
                }
                .contact__footer {
                    margin-top: 5rem;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    text-align: center;
                    color: #4b5563;
                    font-size: 0.875rem;
                }
                @media (max-width: 768px) {
                    .contact-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
