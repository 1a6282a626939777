//! Ethic values, their categories and the legal ethic combinations.

use itertools::Itertools;

use crate::aggregate::GroupKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ethic {
    Xenophile,
    FanaticXenophile,
    Xenophobe,
    FanaticXenophobe,
    Egalitarian,
    FanaticEgalitarian,
    Authoritarian,
    FanaticAuthoritarian,
    Materialist,
    FanaticMaterialist,
    Spiritualist,
    FanaticSpiritualist,
    Pacifist,
    FanaticPacifist,
    Militarist,
    FanaticMilitarist,
    GestaltConsciousness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Xeno,
    Politic,
    Internal,
    War,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intensity {
    Simple,
    Fanatic,
    Gestalt,
}

/// Result of reading one `ethic="..."` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedEthic {
    Known(Ethic),
    Unrecognized(String),
}

struct EthicInfo {
    ethic: Ethic,
    id: &'static str,
    abbrev: &'static str,
    intensity: Intensity,
    axis: Option<Axis>,
}

const fn info(
    ethic: Ethic,
    id: &'static str,
    abbrev: &'static str,
    intensity: Intensity,
    axis: Option<Axis>,
) -> EthicInfo {
    EthicInfo {
        ethic,
        id,
        abbrev,
        intensity,
        axis,
    }
}

// Indexed by discriminant; order must follow the enum.
const ETHIC_TABLE: [EthicInfo; 17] = {
    use Axis::*;
    use Ethic::*;
    use Intensity::*;
    [
        info(Xenophile, "ethic_xenophile", "XIL", Simple, Some(Xeno)),
        info(FanaticXenophile, "ethic_fanatic_xenophile", "FAN_XIL", Fanatic, Some(Xeno)),
        info(Xenophobe, "ethic_xenophobe", "XOB", Simple, Some(Xeno)),
        info(FanaticXenophobe, "ethic_fanatic_xenophobe", "FAN_XOB", Fanatic, Some(Xeno)),
        info(Egalitarian, "ethic_egalitarian", "EGA", Simple, Some(Politic)),
        info(FanaticEgalitarian, "ethic_fanatic_egalitarian", "FAN_EGA", Fanatic, Some(Politic)),
        info(Authoritarian, "ethic_authoritarian", "AUT", Simple, Some(Politic)),
        info(FanaticAuthoritarian, "ethic_fanatic_authoritarian", "FAN_AUT", Fanatic, Some(Politic)),
        info(Materialist, "ethic_materialist", "MAT", Simple, Some(Internal)),
        info(FanaticMaterialist, "ethic_fanatic_materialist", "FAN_MAT", Fanatic, Some(Internal)),
        info(Spiritualist, "ethic_spiritualist", "SPI", Simple, Some(Internal)),
        info(FanaticSpiritualist, "ethic_fanatic_spiritualist", "FAN_SPI", Fanatic, Some(Internal)),
        info(Pacifist, "ethic_pacifist", "PAC", Simple, Some(War)),
        info(FanaticPacifist, "ethic_fanatic_pacifist", "FAN_PAC", Fanatic, Some(War)),
        info(Militarist, "ethic_militarist", "MIL", Simple, Some(War)),
        info(FanaticMilitarist, "ethic_fanatic_militarist", "FAN_MIL", Fanatic, Some(War)),
        info(GestaltConsciousness, "ethic_gestalt_consciousness", "GES", Gestalt, None),
    ]
};

impl Ethic {
    pub const ALL: [Ethic; 17] = {
        let mut all = [Ethic::Xenophile; 17];
        let mut i = 0;
        while i < 17 {
            all[i] = ETHIC_TABLE[i].ethic;
            i += 1;
        }
        all
    };

    fn info(self) -> &'static EthicInfo {
        &ETHIC_TABLE[self as usize]
    }

    /// Identifier used in the design files, e.g. `ethic_fanatic_xenophile`.
    pub fn id(self) -> &'static str {
        self.info().id
    }

    /// Short report name, e.g. `FAN_XIL`.
    pub fn abbrev(self) -> &'static str {
        self.info().abbrev
    }

    pub fn intensity(self) -> Intensity {
        self.info().intensity
    }

    pub fn axis(self) -> Option<Axis> {
        self.info().axis
    }

    pub fn is_fanatic(self) -> bool {
        self.intensity() == Intensity::Fanatic
    }

    pub fn is_simple(self) -> bool {
        self.intensity() == Intensity::Simple
    }

    pub fn parse(raw: &str) -> ParsedEthic {
        ETHIC_TABLE
            .iter()
            .find(|e| e.id == raw)
            .map(|e| ParsedEthic::Known(e.ethic))
            .unwrap_or_else(|| ParsedEthic::Unrecognized(raw.to_string()))
    }
}

/// Canonical group key of an ethic set: abbreviations, sorted.
pub fn combination_key(ethics: &[Ethic]) -> GroupKey {
    GroupKey::canonical(ethics.iter().map(|e| e.abbrev()))
}

/// Every ethic combination an empire may legally pick.
///
/// Gestalt consciousness stands alone; otherwise one fanatic plus one simple
/// ethic, or three simple ethics, each on a different axis.
pub fn valid_combinations() -> Vec<GroupKey> {
    let simple: Vec<Ethic> = Ethic::ALL.into_iter().filter(|e| e.is_simple()).collect();
    let fanatic: Vec<Ethic> = Ethic::ALL.into_iter().filter(|e| e.is_fanatic()).collect();

    let gestalt = std::iter::once(vec![Ethic::GestaltConsciousness]);

    let fanatic_pairs = fanatic
        .iter()
        .cartesian_product(simple.iter())
        .filter(|(f, s)| f.axis() != s.axis())
        .map(|(f, s)| vec![*f, *s]);

    let simple_triples = simple
        .iter()
        .copied()
        .combinations(3)
        .filter(|combo| combo.iter().map(|e| e.axis()).unique().count() == 3);

    gestalt
        .chain(fanatic_pairs)
        .chain(simple_triples)
        .map(|combo| combination_key(&combo))
        .sorted()
        .dedup()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_follows_enum_order() {
        for (i, entry) in ETHIC_TABLE.iter().enumerate() {
            assert_eq!(entry.ethic as usize, i, "{} out of place", entry.id);
        }
    }

    #[test]
    fn parses_known_and_unknown_values() {
        assert_eq!(
            Ethic::parse("ethic_fanatic_authoritarian"),
            ParsedEthic::Known(Ethic::FanaticAuthoritarian)
        );
        assert_eq!(
            Ethic::parse("ethic_gestalt_consciousness"),
            ParsedEthic::Known(Ethic::GestaltConsciousness)
        );
        assert_eq!(
            Ethic::parse("ethic_hive_minded"),
            ParsedEthic::Unrecognized("ethic_hive_minded".to_string())
        );
    }

    #[test]
    fn categories_come_from_the_table() {
        assert!(Ethic::FanaticPacifist.is_fanatic());
        assert!(Ethic::Pacifist.is_simple());
        assert_eq!(Ethic::GestaltConsciousness.intensity(), Intensity::Gestalt);
        assert_eq!(Ethic::GestaltConsciousness.axis(), None);
        assert_eq!(Ethic::FanaticSpiritualist.axis(), Some(Axis::Internal));
        assert_eq!(Ethic::FanaticSpiritualist.abbrev(), "FAN_SPI");
    }

    #[test]
    fn combination_key_ignores_order() {
        assert_eq!(
            combination_key(&[Ethic::Egalitarian, Ethic::Xenophile]),
            combination_key(&[Ethic::Xenophile, Ethic::Egalitarian])
        );
    }

    #[test]
    fn universe_has_every_legal_combination() {
        let combos = valid_combinations();
        // 1 gestalt + 8 fanatic * 6 off-axis simple + 4 axis triples * 2^3
        assert_eq!(combos.len(), 1 + 48 + 32);
        assert!(combos.contains(&GroupKey::canonical(["GES"])));
        assert!(combos.contains(&GroupKey::canonical(["FAN_AUT", "SPI"])));
        assert!(combos.contains(&GroupKey::canonical(["MAT", "PAC", "XIL"])));
    }

    #[test]
    fn universe_excludes_illegal_combinations() {
        let combos = valid_combinations();
        assert!(!combos.contains(&GroupKey::canonical(["EGA", "XIL"])));
        assert!(!combos.contains(&GroupKey::canonical(["FAN_AUT", "EGA"])));
        assert!(!combos.contains(&GroupKey::canonical(["GES", "XIL"])));
        assert!(!combos.contains(&GroupKey::canonical(["XIL", "XOB", "MIL"])));
    }
}
