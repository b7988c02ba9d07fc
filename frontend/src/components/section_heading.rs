use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::{HEADING_SUBTITLE_DELAY_MS, HEADING_TITLE_DELAY_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadingPart<'a> {
    Subtitle(&'a str),
    Title(&'a str),
}

/// Parts of a heading in render order, each with its reveal delay. A missing
/// or empty subtitle is left out entirely.
pub fn heading_parts<'a>(title: &'a str, subtitle: Option<&'a str>) -> Vec<(HeadingPart<'a>, u32)> {
    let mut parts = Vec::with_capacity(2);
    if let Some(subtitle) = subtitle.filter(|s| !s.is_empty()) {
        parts.push((HeadingPart::Subtitle(subtitle), HEADING_SUBTITLE_DELAY_MS));
    }
    parts.push((HeadingPart::Title(title), HEADING_TITLE_DELAY_MS));
    parts
}

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    let parts = heading_parts(&props.title, props.subtitle.as_deref());

    html! {
        <div class="section-heading">
            { for parts.into_iter().map(|(part, delay_ms)| match part {
                HeadingPart::Subtitle(subtitle) => html! {
                    <Reveal key="subtitle" delay_ms={delay_ms}>
                        <p class="section-heading__subtitle">{subtitle.to_string()}</p>
                    </Reveal>
                },
                HeadingPart::Title(title) => html! {
                    <Reveal key="title" delay_ms={delay_ms}>
                        <h2 class="section-heading__title">{title.to_string()}</h2>
                        <div class="section-heading__rule"></div>
                    </Reveal>
                },
            }) }
            <style>
                {r#"
                .section-heading {
                    margin-bottom: 5rem;
                    text-align: center;
                }
                .section-heading__subtitle {
                    color: #d4af37;
                    font-size: 0.875rem;
                    font-weight: 500;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    margin-bottom: 0.75rem;
                }
                .section-heading__title {
                    font-family: 'Playfair Display', serif;
                    font-size: 3.5rem;
                    font-weight: 700;
                    color: #fff;
                    margin-bottom: 1.5rem;
                }
                .section-heading__rule {
                    height: 4px;
                    width: 6rem;
                    margin: 0 auto;
                    opacity: 0.7;
                    background: linear-gradient(to right, transparent, #d4af37, transparent);
                }
                @media (max-width: 768px) {
                    .section-heading { margin-bottom: 3rem; }
                    .section-heading__title { font-size: 2.25rem; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_subtitle_reveals_before_title() {
        assert_eq!(
            heading_parts("Cennik Usług", Some("Jakość w dobrej cenie")),
            vec![
                (HeadingPart::Subtitle("Jakość w dobrej cenie"), 0),
                (HeadingPart::Title("Cennik Usług"), 100),
            ]
        );
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    fn test_missing_subtitle_is_left_out(#[case] subtitle: Option<&str>) {
        assert_eq!(
            heading_parts("Nasze Prace", subtitle),
            vec![(HeadingPart::Title("Nasze Prace"), 100)]
        );
    }
}
