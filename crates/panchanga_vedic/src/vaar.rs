//! Vaar (weekday).

/// The seven weekdays, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Vaar {
    Ravivara,
    Somavara,
    Mangalavara,
    Budhavara,
    Guruvara,
    Shukravara,
    Shanivara,
}

/// All 7 vaars in order (0 = Ravivara/Sunday).
pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivara,
    Vaar::Somavara,
    Vaar::Mangalavara,
    Vaar::Budhavara,
    Vaar::Guruvara,
    Vaar::Shukravara,
    Vaar::Shanivara,
];

const NAMES: [&str; 7] = [
    "Ravivara",
    "Somavara",
    "Mangalavara",
    "Budhavara",
    "Guruvara",
    "Shukravara",
    "Shanivara",
];

const ENGLISH_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

impl Vaar {
    /// Vaar for a weekday index, reduced modulo 7 (0 = Sunday).
    pub const fn from_index(index: u8) -> Self {
        ALL_VAARS[(index % 7) as usize]
    }

    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// English weekday name.
    pub const fn english_name(self) -> &'static str {
        ENGLISH_NAMES[self as usize]
    }

    /// 0-based index (Ravivara=0 .. Shanivara=6).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// All 7 vaars in order.
    pub const fn all() -> &'static [Vaar; 7] {
        &ALL_VAARS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_roundtrip() {
        for (i, v) in ALL_VAARS.iter().enumerate() {
            assert_eq!(v.index() as usize, i);
            assert_eq!(Vaar::from_index(i as u8), *v);
        }
    }

    #[test]
    fn saturday() {
        let v = Vaar::from_index(6);
        assert_eq!(v.name(), "Shanivara");
        assert_eq!(v.english_name(), "Saturday");
    }

    #[test]
    fn index_wraps() {
        assert_eq!(Vaar::from_index(7), Vaar::Ravivara);
    }
}
