/// In-page navigation targets, in menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    About,
    Team,
    Portfolio,
    Pricing,
    Contact,
}

impl Anchor {
    pub const MENU: [Anchor; 5] = [
        Anchor::About,
        Anchor::Team,
        Anchor::Portfolio,
        Anchor::Pricing,
        Anchor::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Anchor::About => "O nas",
            Anchor::Team => "Zespół",
            Anchor::Portfolio => "Portfolio",
            Anchor::Pricing => "Cennik",
            Anchor::Contact => "Kontakt",
        }
    }

    /// Element id of the section this anchor points at.
    pub fn id(self) -> String {
        anchor_id(self.label())
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// "O nas" -> "o-nas". Every space becomes `-`, not just the first one, so
/// a label with several spaces gets a dash for each of them.
pub fn anchor_id(label: &str) -> String {
    label.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case(Anchor::About, "o-nas")]
    #[case(Anchor::Team, "zespół")]
    #[case(Anchor::Portfolio, "portfolio")]
    #[case(Anchor::Pricing, "cennik")]
    #[case(Anchor::Contact, "kontakt")]
    fn test_anchor_ids(#[case] anchor: Anchor, #[case] id: &str) {
        assert_eq!(anchor.id(), id);
        assert_eq!(anchor.href(), format!("#{id}"));
    }

    #[rstest]
    fn test_anchor_id_has_no_spaces_or_capitals() {
        for anchor in Anchor::MENU {
            let id = anchor.id();
            assert!(!id.contains(' '));
            assert_eq!(id, id.to_lowercase());
        }
    }

    #[rstest]
    #[case("O nas", "o-nas")]
    #[case("Nasze Prace Tutaj", "nasze-prace-tutaj")]
    #[case("Kontakt", "kontakt")]
    fn test_anchor_id_replaces_every_space(#[case] label: &str, #[case] id: &str) {
        assert_eq!(anchor_id(label), id);
    }

    #[rstest]
    fn test_menu_ids_are_distinct() {
        let ids: HashSet<String> = Anchor::MENU.iter().map(|a| a.id()).collect();
        assert_eq!(ids.len(), Anchor::MENU.len());
    }
}
