//! Tithi (lunar day): 30 segments of 12° of Moon − Sun elongation.

/// Elongation span of one tithi, degrees.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing fortnight (tithis 1-15).
    Shukla,
    /// Waning fortnight (tithis 16-30).
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// The 30 tithis of a synodic month, from Shukla Pratipada to Amavasya.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tithi {
    ShuklaPratipada,
    ShuklaDwitiya,
    ShuklaTritiya,
    ShuklaChaturthi,
    ShuklaPanchami,
    ShuklaShashthi,
    ShuklaSaptami,
    ShuklaAshtami,
    ShuklaNavami,
    ShuklaDashami,
    ShuklaEkadashi,
    ShuklaDwadashi,
    ShuklaTrayodashi,
    ShuklaChaturdashi,
    Purnima,
    KrishnaPratipada,
    KrishnaDwitiya,
    KrishnaTritiya,
    KrishnaChaturthi,
    KrishnaPanchami,
    KrishnaShashthi,
    KrishnaSaptami,
    KrishnaAshtami,
    KrishnaNavami,
    KrishnaDashami,
    KrishnaEkadashi,
    KrishnaDwadashi,
    KrishnaTrayodashi,
    KrishnaChaturdashi,
    Amavasya,
}

/// All 30 tithis in order (0 = Shukla Pratipada, 29 = Amavasya).
pub const ALL_TITHIS: [Tithi; 30] = [
    Tithi::ShuklaPratipada,
    Tithi::ShuklaDwitiya,
    Tithi::ShuklaTritiya,
    Tithi::ShuklaChaturthi,
    Tithi::ShuklaPanchami,
    Tithi::ShuklaShashthi,
    Tithi::ShuklaSaptami,
    Tithi::ShuklaAshtami,
    Tithi::ShuklaNavami,
    Tithi::ShuklaDashami,
    Tithi::ShuklaEkadashi,
    Tithi::ShuklaDwadashi,
    Tithi::ShuklaTrayodashi,
    Tithi::ShuklaChaturdashi,
    Tithi::Purnima,
    Tithi::KrishnaPratipada,
    Tithi::KrishnaDwitiya,
    Tithi::KrishnaTritiya,
    Tithi::KrishnaChaturthi,
    Tithi::KrishnaPanchami,
    Tithi::KrishnaShashthi,
    Tithi::KrishnaSaptami,
    Tithi::KrishnaAshtami,
    Tithi::KrishnaNavami,
    Tithi::KrishnaDashami,
    Tithi::KrishnaEkadashi,
    Tithi::KrishnaDwadashi,
    Tithi::KrishnaTrayodashi,
    Tithi::KrishnaChaturdashi,
    Tithi::Amavasya,
];

/// Names of the first fourteen days of either fortnight.
const DAY_NAMES: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

const NAMES: [&str; 30] = {
    let mut names = [""; 30];
    let mut i = 0;
    while i < 14 {
        names[i] = DAY_NAMES[i];
        names[i + 15] = DAY_NAMES[i];
        i += 1;
    }
    names[14] = "Purnima";
    names[29] = "Amavasya";
    names
};

impl Tithi {
    /// Tithi for an index, reduced modulo 30.
    pub const fn from_index(index: u8) -> Self {
        ALL_TITHIS[(index % 30) as usize]
    }

    /// Name of the day within its fortnight ("Ekadashi", "Purnima", ...).
    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// 0-based index (Shukla Pratipada=0 .. Amavasya=29).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Fortnight this tithi belongs to.
    pub const fn paksha(self) -> Paksha {
        if (self as u8) < 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        }
    }

    /// 1-based day within the fortnight (1-15).
    pub const fn tithi_in_paksha(self) -> u8 {
        self as u8 % 15 + 1
    }

    /// Name with the fortnight prefix, e.g. "Krishna Ekadashi".
    pub fn full_name(self) -> String {
        match self {
            Self::Purnima | Self::Amavasya => self.name().to_string(),
            _ => format!("{} {}", self.paksha().name(), self.name()),
        }
    }

    /// All 30 tithis in order.
    pub const fn all() -> &'static [Tithi; 30] {
        &ALL_TITHIS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_roundtrip() {
        for (i, t) in ALL_TITHIS.iter().enumerate() {
            assert_eq!(t.index() as usize, i);
            assert_eq!(Tithi::from_index(i as u8), *t);
        }
    }

    #[test]
    fn paksha_split() {
        assert_eq!(Tithi::from_index(0).paksha(), Paksha::Shukla);
        assert_eq!(Tithi::from_index(14).paksha(), Paksha::Shukla);
        assert_eq!(Tithi::from_index(15).paksha(), Paksha::Krishna);
        assert_eq!(Tithi::from_index(29).paksha(), Paksha::Krishna);
    }

    #[test]
    fn day_in_paksha() {
        assert_eq!(Tithi::ShuklaPratipada.tithi_in_paksha(), 1);
        assert_eq!(Tithi::Purnima.tithi_in_paksha(), 15);
        assert_eq!(Tithi::KrishnaPratipada.tithi_in_paksha(), 1);
        assert_eq!(Tithi::Amavasya.tithi_in_paksha(), 15);
    }

    #[test]
    fn names() {
        assert_eq!(Tithi::Purnima.name(), "Purnima");
        assert_eq!(Tithi::KrishnaEkadashi.name(), "Ekadashi");
        assert_eq!(Tithi::KrishnaEkadashi.full_name(), "Krishna Ekadashi");
        assert_eq!(Tithi::Amavasya.full_name(), "Amavasya");
        assert!(ALL_TITHIS.iter().all(|t| !t.name().is_empty()));
    }
}
