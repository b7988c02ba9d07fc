use yew::prelude::*;

use crate::anchors::Anchor;
use crate::components::booking_button::BookingButton;
use crate::components::reveal::Reveal;
use crate::config::{
    HERO_CTA_DELAY_MS, HERO_IMAGE_URL, HERO_LEAD_DELAY_MS, HERO_TAGLINE_DELAY_MS, HERO_TITLE_DELAY_MS,
};

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-background">
                <div class="hero-background__shade"></div>
                <img src={HERO_IMAGE_URL} alt="Barber working" />
            </div>

            <div class="hero-content">
                <Reveal delay_ms={HERO_TAGLINE_DELAY_MS}>
                    <p class="hero-tagline">{"Profesjonalizm & Pasja"}</p>
                </Reveal>

                <Reveal delay_ms={HERO_TITLE_DELAY_MS}>
                    <h1 class="hero-title">
                        {"Męski styl"}
                        <br />
                        <span class="hero-title__fade">{"zaczyna się tutaj"}</span>
                    </h1>
                </Reveal>

                <Reveal delay_ms={HERO_LEAD_DELAY_MS}>
                    <p class="hero-lead">
                        {"Doświadcz magii prawdziwego rzemiosła fryzjerskiego w sercu miasta."}
                    </p>
                </Reveal>

                <Reveal delay_ms={HERO_CTA_DELAY_MS}>
                    <div class="hero-cta-group">
                        <BookingButton class="hero-cta">{"Umów Wizytę"}</BookingButton>
                        <a href={Anchor::Pricing.href()} class="hero-pricing-link">{"Zobacz Cennik"}</a>
                    </div>
                </Reveal>
            </div>

            <div class="scroll-hint">
                <span>{"Przewiń"}</span>
                <div class="scroll-hint__line"></div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }
                .hero-background__shade {
                    position: absolute;
                    inset: 0;
                    z-index: 1;
                    background: rgba(0, 0, 0, 0.6);
                }
                .hero-background img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.8;
                    transform: scale(1.05);
                    animation: pulseSlow 8s ease-in-out infinite;
                }
                @keyframes pulseSlow {
                    0%, 100% { opacity: 0.8; }
                    50% { opacity: 0.65; }
                }
                .hero-content {
                    position: relative;
                    z-index: 2;
                    padding: 0 1.5rem;
                    text-align: center;
                }
                .hero-tagline {
                    color: #e6c35c;
                    font-weight: 600;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    margin-bottom: 1rem;
                }
                .hero-title {
                    font-family: 'Playfair Display', serif;
                    font-size: 6rem;
                    font-weight: 700;
                    line-height: 1.15;
                    color: #fff;
                    margin-bottom: 1.5rem;
                }
                .hero-title__fade {
                    background: linear-gradient(to right, #fff, #9ca3af, #4b5563);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-lead {
                    max-width: 36rem;
                    margin: 0 auto 2.5rem;
                    color: #d1d5db;
                    font-size: 1.25rem;
                    font-weight: 300;
                }
                .hero-cta-group {
                    display: flex;
                    gap: 1.5rem;
                    justify-content: center;
                    align-items: center;
                }
                .hero-cta {
                    min-width: 200px;
                }
                .hero-pricing-link {
                    color: #fff;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                    padding-bottom: 0.25rem;
                    border-bottom: 1px solid transparent;
                    transition: all 0.3s;
                }
                .hero-pricing-link:hover {
                    color: #e6c35c;
                    border-color: #e6c35c;
                }
                .scroll-hint {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    opacity: 0.6;
                    font-size: 10px;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .scroll-hint__line {
                    width: 1px;
                    height: 3rem;
                    background: linear-gradient(to bottom, #fff, transparent);
                }
                @media (max-width: 768px) {
                    .hero-title { font-size: 3rem; }
                    .hero-lead { font-size: 1.125rem; }
                    .hero-cta-group { flex-direction: column; }
                }
                "#}
            </style>
        </section>
    }
}
