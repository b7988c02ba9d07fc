use log::debug;
use yew::prelude::*;

use crate::anchors::Anchor;
use crate::components::reveal::{stagger_delay, Reveal};
use crate::config::{SHOP_NAME, TEAM_STAGGER_MS};
use crate::data::TeamMember;

/// What gets rendered for one team member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamCardView {
    pub key: &'static str,
    pub name: &'static str,
    pub experience: &'static str,
    pub flags: &'static [&'static str],
    pub delay_ms: u32,
}

pub fn team_cards(team: &[TeamMember]) -> Vec<TeamCardView> {
    team.iter()
        .enumerate()
        .map(|(idx, member)| TeamCardView {
            key: member.name,
            name: member.name,
            experience: member.experience,
            flags: member.flags,
            delay_ms: stagger_delay(idx, TEAM_STAGGER_MS),
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub team: &'static [TeamMember],
}

#[derive(Properties, PartialEq)]
struct TeamCardProps {
    card: TeamCardView,
}

#[function_component(TeamCard)]
fn team_card(props: &TeamCardProps) -> Html {
    let card = &props.card;
    html! {
        <div class="team-card">
            <h3 class="team-card__name">{card.name}</h3>
            <p class="team-card__experience">{card.experience}</p>
            <div class="team-card__flags">
                { for card.flags.iter().map(|flag| html! {
                    <span key={*flag} class="team-card__flag">{*flag}</span>
                }) }
            </div>
        </div>
    }
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    debug!("Rendering About with {} team members", props.team.len());

    html! {
        <section id={Anchor::About.id()} class="about">
            <div class="about__glow"></div>
            <div class="container about__grid">
                <div>
                    <Reveal>
                        <h2 class="about__title">
                            {"Mistrzowie Grzebienia i Nożyczek "}
                            <span class="accent">{"."}</span>
                        </h2>
                    </Reveal>
                    <Reveal delay_ms={200}>
                        <div class="about__copy">
                            <p>
                                <span class="about__poles">{"💈💈💈"}</span>
                                {"Salon "}
                                <strong>{SHOP_NAME}</strong>
                                {" to miejsce prowadzone przez dyplomowanych mistrzów fryzjerstwa z kilkunastoletnim doświadczeniem w branży."}
                            </p>
                            <p>
                                {"Cechuje nas nacisk na jakość wykonywanych usług i profesjonalizm. Barbering jest naszą pasją dzięki czemu jesteśmy na bieżąco z trendami rzemiosła przerzucając wiedze na Wasze głowy i brody z pasją i zaangażowaniem."}
                            </p>
                            <p class="about__signoff">{"Zapraszamy i pozdrawiamy."}</p>
                        </div>
                    </Reveal>
                </div>

                <div id={Anchor::Team.id()} class="team-grid">
                    { for team_cards(props.team).into_iter().map(|card| html! {
                        <Reveal key={card.key} delay_ms={card.delay_ms}>
                            <TeamCard card={card.clone()} />
                        </Reveal>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .about {
                    position: relative;
                    padding: 6rem 0;
                    background: #0f0f0f;
                }
                .about__glow {
                    position: absolute;
                    top: 0;
                    right: 0;
                    width: 50%;
                    height: 50%;
                    border-radius: 50%;
                    filter: blur(64px);
                    background: linear-gradient(to bottom, rgba(212, 175, 55, 0.05), transparent);
                    pointer-events: none;
                }
                .about__grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .about__title {
                    font-family: 'Playfair Display', serif;
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #fff;
                    margin-bottom: 2rem;
                }
                .about__copy p {
                    color: #9ca3af;
                    font-size: 1.125rem;
                    font-weight: 300;
                    line-height: 1.75;
                    margin-bottom: 1.5rem;
                }
                .about__copy strong {
                    color: #fff;
                }
                .about__poles {
                    font-size: 1.5rem;
                    margin-right: 0.5rem;
                }
                .about__signoff {
                    font-style: italic;
                    color: #fff !important;
                }
                .team-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .team-card {
                    padding: 1.5rem;
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    backdrop-filter: blur(12px);
                    transition: transform 0.5s;
                }
                .team-card:hover {
                    transform: translateY(-0.5rem);
                }
                .team-card__name {
                    color: #fff;
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin-bottom: 0.25rem;
                    transition: color 0.3s;
                }
                .team-card:hover .team-card__name {
                    color: #e6c35c;
                }
                .team-card__experience {
                    color: #9ca3af;
                    font-size: 0.875rem;
                    margin-bottom: 0.75rem;
                }
                .team-card__flags {
                    display: flex;
                    gap: 0.5rem;
                }
                .team-card__flag {
                    font-size: 0.75rem;
                    color: #6b7280;
                    padding: 0.25rem 0.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 4px;
                    background: rgba(0, 0, 0, 0.2);
                }
                @media (max-width: 768px) {
                    .about__grid { grid-template-columns: 1fr; }
                    .team-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TEAM;
    use rstest::rstest;

    #[rstest]
    fn test_team_cascades_by_hundred_ms() {
        let delays: Vec<u32> = team_cards(TEAM).iter().map(|c| c.delay_ms).collect();
        assert_eq!(delays, vec![0, 100, 200, 300, 400, 500]);
    }

    #[rstest]
    fn test_one_card_per_member_in_order() {
        let cards = team_cards(TEAM);
        assert_eq!(cards.len(), TEAM.len());
        for (card, member) in cards.iter().zip(TEAM) {
            assert_eq!(card.key, member.name);
            assert_eq!(card.name, member.name);
            assert_eq!(card.experience, member.experience);
        }
    }

    #[rstest]
    fn test_one_badge_per_flag() {
        for (card, member) in team_cards(TEAM).iter().zip(TEAM) {
            assert_eq!(card.flags.len(), member.flags.len(), "{}", member.name);
            assert_eq!(card.flags, member.flags);
        }
    }

    #[rstest]
    fn test_input_order_is_kept() {
        let team = [
            TeamMember { name: "Piotrek", experience: "6 lat doświadczenia", flags: &["PL"] },
            TeamMember { name: "Czarek", experience: "23 lata doświadczenia", flags: &["PL", "GB"] },
        ];
        let cards = team_cards(&team);
        let names: Vec<&str> = cards.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Piotrek", "Czarek"]);
        assert_eq!(cards[1].flags, &["PL", "GB"]);
        assert_eq!(cards[1].delay_ms, 100);
    }
}
