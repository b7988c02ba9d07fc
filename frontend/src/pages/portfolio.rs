use log::debug;
use yew::prelude::*;

use crate::anchors::Anchor;
use crate::components::reveal::{stagger_delay, Reveal};
use crate::components::section_heading::SectionHeading;
use crate::config::{PORTFOLIO_STAGGER_MS, PORTFOLIO_TAGLINE_DELAY_MS};
use crate::data::PortfolioItem;

/// What gets rendered for one portfolio entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortfolioTile {
    pub key: u32,
    pub url: &'static str,
    pub delay_ms: u32,
}

pub fn portfolio_tiles(items: &[PortfolioItem]) -> Vec<PortfolioTile> {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| PortfolioTile {
            key: item.id,
            url: item.url,
            delay_ms: stagger_delay(idx, PORTFOLIO_STAGGER_MS),
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub items: &'static [PortfolioItem],
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let tiles = portfolio_tiles(props.items);
    debug!("Rendering Portfolio with {} tiles", tiles.len());

    html! {
        <section id={Anchor::Portfolio.id()} class="portfolio">
            <SectionHeading title="Nasze Prace" subtitle="Efekty naszej magii" />

            <div class="container">
                <div class="portfolio-grid">
                    { for tiles.into_iter().map(|tile| html! {
                        <Reveal key={tile.key} delay_ms={tile.delay_ms}>
                            <div class="portfolio-tile">
                                <img src={tile.url} alt="Fryzura" loading="lazy" />
                            </div>
                        </Reveal>
                    }) }
                </div>
                <Reveal delay_ms={PORTFOLIO_TAGLINE_DELAY_MS}>
                    <p class="portfolio__tagline">{"Tniemy każdą długość i każdy rodzaj włosa"}</p>
                </Reveal>
            </div>

            <style>
                {r#"
                .portfolio {
                    position: relative;
                    padding: 6rem 0;
                    background: #000;
                }
                .portfolio-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                }
                .portfolio-tile {
                    position: relative;
                    overflow: hidden;
                    aspect-ratio: 1 / 1;
                    background: #111827;
                    cursor: zoom-in;
                }
                .portfolio-tile img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.8;
                    transition: transform 0.7s, opacity 0.7s;
                }
                .portfolio-tile:hover img {
                    transform: scale(1.05);
                    opacity: 1;
                }
                .portfolio__tagline {
                    margin-top: 3rem;
                    text-align: center;
                    color: #6b7280;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                @media (max-width: 768px) {
                    .portfolio-grid { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PORTFOLIO;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    fn test_one_tile_per_entry_in_order() {
        let tiles = portfolio_tiles(PORTFOLIO);
        assert_eq!(tiles.len(), PORTFOLIO.len());
        for (tile, item) in tiles.iter().zip(PORTFOLIO) {
            assert_eq!(tile.key, item.id);
            assert_eq!(tile.url, item.url);
        }
    }

    #[rstest]
    fn test_tile_keys_unique() {
        let keys: HashSet<u32> = portfolio_tiles(PORTFOLIO).iter().map(|t| t.key).collect();
        assert_eq!(keys.len(), PORTFOLIO.len());
    }

    #[rstest]
    fn test_tiles_cascade_by_fifty_ms() {
        let delays: Vec<u32> = portfolio_tiles(PORTFOLIO).iter().map(|t| t.delay_ms).collect();
        assert_eq!(delays, vec![0, 50, 100, 150, 200, 250, 300, 350]);
    }

    #[rstest]
    fn test_input_order_is_kept() {
        let items = [
            PortfolioItem { id: 9, url: "https://example.com/b.jpeg" },
            PortfolioItem { id: 3, url: "https://example.com/a.jpeg" },
        ];
        let keys: Vec<u32> = portfolio_tiles(&items).iter().map(|t| t.key).collect();
        assert_eq!(keys, vec![9, 3]);
    }

    #[rstest]
    fn test_empty_collection_renders_no_tiles() {
        assert!(portfolio_tiles(&[]).is_empty());
    }
}
