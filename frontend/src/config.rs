use log::Level;

/// Every call to action on the page points here.
pub const BOOKING_URL: &str =
    "https://booksy.com/pl-pl/5260_czarodziej-barber-shop_barber-shop_3_warszawa/staffer/620822#ba_s=s_2";

pub const BRAND_NAME: &str = "CZARODZIEJSKI";
pub const SHOP_NAME: &str = "Czarodziejski Barber Shop";
pub const ADDRESS: &str = "Warszawa, ul. Przykładowa 12";
pub const PHONE: &str = "+48 123 456 789";
pub const OPENING_HOURS: [&str; 2] = ["Pon - Pt: 9:00 - 20:00", "Sob: 9:00 - 15:00"];

pub const HERO_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1585747860715-2ba37e788b70?q=80&w=2074&auto=format&fit=crop";

// Nav switches to its compact look once the page is scrolled strictly past this
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

// Share of the element that must be in view before it reveals
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_OFFSET_PX: u32 = 20;
pub const REVEAL_DURATION_MS: u32 = 1000;

pub const TEAM_STAGGER_MS: u32 = 100;
pub const PORTFOLIO_STAGGER_MS: u32 = 50;
pub const PRICING_STAGGER_MS: u32 = 50;
pub const CONTACT_STAGGER_MS: u32 = 200;

pub const HERO_TAGLINE_DELAY_MS: u32 = 0;
pub const HERO_TITLE_DELAY_MS: u32 = 200;
pub const HERO_LEAD_DELAY_MS: u32 = 400;
pub const HERO_CTA_DELAY_MS: u32 = 600;

pub const HEADING_SUBTITLE_DELAY_MS: u32 = 0;
pub const HEADING_TITLE_DELAY_MS: u32 = 100;

// Closing lines come in after the staggered items above them
pub const PORTFOLIO_TAGLINE_DELAY_MS: u32 = 400;
pub const PRICING_CTA_DELAY_MS: u32 = 600;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_hero_reveals_in_two_hundred_ms_steps() {
        assert_eq!(
            [HERO_TAGLINE_DELAY_MS, HERO_TITLE_DELAY_MS, HERO_LEAD_DELAY_MS, HERO_CTA_DELAY_MS],
            [0, 200, 400, 600]
        );
    }

    #[rstest]
    fn test_heading_subtitle_comes_before_title() {
        assert_eq!(HEADING_SUBTITLE_DELAY_MS, 0);
        assert_eq!(HEADING_TITLE_DELAY_MS, 100);
    }

    #[rstest]
    #[case(TEAM_STAGGER_MS, 100)]
    #[case(PORTFOLIO_STAGGER_MS, 50)]
    #[case(PRICING_STAGGER_MS, 50)]
    #[case(CONTACT_STAGGER_MS, 200)]
    #[case(PORTFOLIO_TAGLINE_DELAY_MS, 400)]
    #[case(PRICING_CTA_DELAY_MS, 600)]
    fn test_section_delays(#[case] actual: u32, #[case] expected: u32) {
        assert_eq!(actual, expected);
    }
}
