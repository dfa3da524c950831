//! Karana (half-tithi): 60 segments of 6° of Moon − Sun elongation, named
//! from a table of 11.
//!
//! Seven movable karanas (Bava .. Vishti) repeat eight times through the
//! month, from the second half of Shukla Pratipada to the first half of
//! Krishna Chaturdashi. Four fixed karanas fill the remaining slots:
//! Shakuni, Chatushpada and Naga close the month, Kimstughna opens it.

/// Elongation span of one karana, degrees.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// Number of karana slots in a synodic month.
pub const KARANAS_PER_MONTH: u8 = 60;

/// The 11 karana names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

/// All 11 karanas in table order (0 = Bava, 10 = Kimstughna).
pub const ALL_KARANAS: [Karana; 11] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
    Karana::Shakuni,
    Karana::Chatushpada,
    Karana::Naga,
    Karana::Kimstughna,
];

const NAMES: [&str; 11] = [
    "Bava",
    "Balava",
    "Kaulava",
    "Taitila",
    "Garaja",
    "Vanija",
    "Vishti",
    "Shakuni",
    "Chatushpada",
    "Naga",
    "Kimstughna",
];

/// Slot of the month that opens with Kimstughna.
const OPENING_SLOT: u8 = 0;

/// First of the three closing slots (Shakuni, Chatushpada, Naga).
const FIRST_CLOSING_SLOT: u8 = 57;

/// Table index of Kimstughna.
const KIMSTUGHNA_INDEX: u8 = 10;

/// Table index (0-10) of the karana occupying slot `raw` (0-59) of the month.
///
/// - slot 0 → Kimstughna (10)
/// - slots 57, 58, 59 → Shakuni, Chatushpada, Naga (`raw − 50`)
/// - slots 1..=56 → the movable cycle, `(raw − 1) mod 7`
pub const fn karana_index_from_slot(raw: u8) -> u8 {
    let slot = raw % KARANAS_PER_MONTH;
    if slot == OPENING_SLOT {
        KIMSTUGHNA_INDEX
    } else if slot >= FIRST_CLOSING_SLOT {
        slot - 50
    } else {
        (slot - 1) % 7
    }
}

impl Karana {
    /// Karana for a table index, reduced modulo 11.
    pub const fn from_index(index: u8) -> Self {
        ALL_KARANAS[(index % 11) as usize]
    }

    /// Karana occupying slot `raw` (0-59) of the month.
    pub const fn from_slot(raw: u8) -> Self {
        Self::from_index(karana_index_from_slot(raw))
    }

    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// 0-based table index (Bava=0 .. Kimstughna=10).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Whether this is one of the four fixed karanas.
    pub const fn is_fixed(self) -> bool {
        (self as u8) >= 7
    }

    /// All 11 karanas in table order.
    pub const fn all() -> &'static [Karana; 11] {
        &ALL_KARANAS
    }
}
