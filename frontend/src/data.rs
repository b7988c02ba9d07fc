//! Static content of the page. Nothing here changes at runtime.

#[derive(Clone, Debug, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub experience: &'static str,
    pub flags: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceItem {
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub price: &'static str,
    pub duration: Option<&'static str>,
}

impl ServiceItem {
    /// Description to show, if there is anything to show.
    pub fn description(&self) -> Option<&'static str> {
        self.description.filter(|d| !d.is_empty())
    }

    pub fn duration(&self) -> Option<&'static str> {
        self.duration.filter(|d| !d.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioItem {
    pub id: u32,
    pub url: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember { name: "Czarek", experience: "23 lata doświadczenia", flags: &["PL", "GB"] },
    TeamMember { name: "Michał", experience: "19 lat doświadczenia", flags: &["PL", "GB"] },
    TeamMember { name: "Patrycja", experience: "12 lat doświadczenia", flags: &["PL"] },
    TeamMember { name: "Kacper", experience: "10 lat doświadczenia", flags: &["PL"] },
    TeamMember { name: "Krystian", experience: "9 lat doświadczenia", flags: &["PL"] },
    TeamMember { name: "Piotrek", experience: "6 lat doświadczenia", flags: &["PL"] },
];

const fn service(
    name: &'static str,
    description: Option<&'static str>,
    price: &'static str,
    duration: &'static str,
) -> ServiceItem {
    ServiceItem { name, description, price, duration: Some(duration) }
}

pub const PRICING: &[ServiceItem] = &[
    service("Strzyżenie Męskie Włosy Krótkie", Some("Short hair cut"), "100,00 zł", "30min"),
    service("Strzyżenie Włosów + Brody", Some("Hair & Beard Cut"), "150,00 zł", "1g"),
    service(
        "Kompleksowy Barbering",
        Some("Strzyżenie włosów + brody + olejek + gorący ręcznik"),
        "160,00 zł",
        "1g 15min",
    ),
    service("Strzyżenie Włosów 1 Długość + Broda", None, "120,00 zł", "30min"),
    service(
        "Strzyżenie Brody (Beardcut)",
        Some("Olejek nawilżający, gorący ręcznik, shaver"),
        "80,00 zł",
        "30min",
    ),
    service(
        "Strzyżenie Chłopca (5 do 12 lat)",
        Some("Do 90zł w zależności od trudności"),
        "80,00 zł",
        "30min",
    ),
    service("Strzyżenie 2 Chłopców (5 do 12 lat)", None, "150,00 zł", "1g"),
    service(
        "Strzyżenie Ojciec i Syn (5 do 12 lat)",
        Some("Pakiet rodzinny, oszczędzasz 20zł"),
        "160,00 zł",
        "1g",
    ),
    service("Kompleksowe Strzyżenie Brody", Some("Olejek, gorący ręcznik"), "90,00 zł", "45min"),
    service("Odsiwanie Brody", None, "70,00 zł", "15min"),
    service("Odsiwanie Włosów", None, "70,00 zł", "15min"),
    service("Odsiwanie Włosów i Brody", None, "130,00 zł", "30min"),
    service("Depilacja Woskiem (Nos)", None, "30,00 zł", "15min"),
    service("Depilacja Woskiem (Uszy)", None, "30,00 zł", "15min"),
    service("Konsultacja", None, "0,10 zł", "5min"),
];

pub const PORTFOLIO: &[PortfolioItem] = &[
    PortfolioItem {
        id: 1,
        url: "https://d375139ucebi94.cloudfront.net/pl/images/5260/inspiration_154694609541.jpeg",
    },
    PortfolioItem {
        id: 2,
        url: concat!(
            "https://d375139ucebi94.cloudfront.net/region2/pl/5260/inspiration/",
            "5a4aae66850e4559875947e6a19d84-czarodziej-barber-shop-inspiration-4b7d8a4853084ac7b38029b4484cdf-booksy.jpeg"
        ),
    },
    PortfolioItem {
        id: 3,
        url: concat!(
            "https://d375139ucebi94.cloudfront.net/region2/pl/5260/inspiration/",
            "869ff8f00feb4787b2b910c3b1a6e2-czarodziej-barber-shop-inspiration-7a077143179345afbced84f131aeb9-booksy.jpeg"
        ),
    },
    PortfolioItem {
        id: 4,
        url: concat!(
            "https://d375139ucebi94.cloudfront.net/region2/pl/5260/inspiration/",
            "c80fbefe41bf4c2aa485e77ebf8caf-czarodziej-barber-shop-inspiration-2f448de9d7254af5bf936e6a8ff096-booksy.jpeg"
        ),
    },
    PortfolioItem {
        id: 5,
        url: concat!(
            "https://d375139ucebi94.cloudfront.net/region2/pl/5260/inspiration/",
            "e867cad6a2134bfb864ca0ee7c3b96-czarodziej-barber-shop-inspiration-413f3f3eb05d4ae79ad2c15680d7ac-booksy.jpeg"
        ),
    },
    PortfolioItem {
        id: 6,
        url: concat!(
            "https://d375139ucebi94.cloudfront.net/region2/pl/5260/inspiration/",
            "000beffeaf27442096e643ead146e0-czarodziej-barber-shop-inspiration-377ac054b4e24db398f67236de83f6-booksy.jpeg"
        ),
    },
    PortfolioItem {
        id: 7,
        url: concat!(
            "https://d375139ucebi94.cloudfront.net/region2/pl/5260/inspiration/",
            "9523b4f984564be2b396023623d7e5-czarodziej-barber-shop-inspiration-0a078754a9034380ba5e3f4e4b8a2f-booksy.jpeg"
        ),
    },
    PortfolioItem {
        id: 8,
        url: concat!(
            "https://d375139ucebi94.cloudfront.net/region2/pl/5260/inspiration/",
            "48641ec1ae4d4bb4b072e79b1bbc4c-czarodziej-barber-shop-inspiration-74d002af599d46069e4ef220efa193-booksy.jpeg"
        ),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    const INSPIRATION_BASE: &str = "https://d375139ucebi94.cloudfront.net/region2/pl/5260/inspiration";

    #[rstest]
    fn test_team_flags_are_non_empty() {
        for member in TEAM {
            assert!(!member.flags.is_empty(), "{} has no flags", member.name);
            assert!(member.flags.iter().all(|f| !f.is_empty()));
        }
    }

    #[rstest]
    fn test_pricing_name_and_price_always_present() {
        assert_eq!(PRICING.len(), 15);
        for item in PRICING {
            assert!(!item.name.is_empty());
            assert!(item.price.ends_with("zł"), "{} has price {}", item.name, item.price);
        }
    }

    #[rstest]
    fn test_empty_optional_fields_count_as_absent() {
        let item = ServiceItem {
            name: "Konsultacja",
            description: Some(""),
            price: "0,10 zł",
            duration: Some(""),
        };
        assert_eq!(item.description(), None);
        assert_eq!(item.duration(), None);

        let item = ServiceItem { description: None, duration: None, ..item };
        assert_eq!(item.description(), None);
        assert_eq!(item.duration(), None);
    }

    #[rstest]
    fn test_portfolio_ids_unique() {
        let ids: HashSet<u32> = PORTFOLIO.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PORTFOLIO.len());
    }

    #[rstest]
    fn test_portfolio_urls_point_at_inspiration_images() {
        for item in &PORTFOLIO[1..] {
            assert!(item.url.starts_with(INSPIRATION_BASE), "{}", item.url);
        }
    }
}
