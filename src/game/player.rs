use std::fmt;

/// Identity of one of the two seats at the table. This is what the board
/// stores; display attributes live on [`Player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Get the other player
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Symbol used by the plain-text board rendering
    pub fn symbol(self) -> char {
        match self {
            PlayerId::One => 'X',
            PlayerId::Two => 'O',
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::One => write!(f, "Player 1"),
            PlayerId::Two => write!(f, "Player 2"),
        }
    }
}

/// A named piece color. `value` is either a CSS keyword or `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceColor {
    pub name: &'static str,
    pub value: &'static str,
}

pub const PALETTE: [PieceColor; 17] = [
    PieceColor { name: "Red", value: "red" },
    PieceColor { name: "Blue", value: "blue" },
    PieceColor { name: "Green", value: "green" },
    PieceColor { name: "Yellow", value: "yellow" },
    PieceColor { name: "Gold", value: "gold" },
    PieceColor { name: "Silver", value: "silver" },
    PieceColor { name: "Crystal", value: "#A7D8DE" },
    PieceColor { name: "Ruby", value: "#EE115F" },
    PieceColor { name: "Sapphire", value: "#0F52BA" },
    PieceColor { name: "Emerald", value: "#046307" },
    PieceColor { name: "Diamond", value: "#B9F2FF" },
    PieceColor { name: "Pearl", value: "#FDEEF4" },
    PieceColor { name: "Platinum", value: "#E5E4E2" },
    PieceColor { name: "Black", value: "#000000" },
    PieceColor { name: "White", value: "#F7F7F7" },
    PieceColor { name: "Purple", value: "#FF00FF" },
    PieceColor { name: "Pink", value: "#FFBBBB" },
];

impl PieceColor {
    /// Look up a palette entry by name, ignoring case.
    pub fn by_name(name: &str) -> Option<PieceColor> {
        PALETTE
            .iter()
            .copied()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Resolve the color value to an RGB triple.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self.value {
            "red" => (255, 0, 0),
            "blue" => (0, 0, 255),
            "green" => (0, 128, 0),
            "yellow" => (255, 255, 0),
            "gold" => (255, 215, 0),
            "silver" => (192, 192, 192),
            hex => parse_hex(hex).unwrap_or((255, 255, 255)),
        }
    }
}

fn parse_hex(value: &str) -> Option<(u8, u8, u8)> {
    let digits = value.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Presentation attributes for a participant. Core logic never looks at
/// these; the engine only compares [`PlayerId`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub color: PieceColor,
}

impl Player {
    pub fn new(name: impl Into<String>, color: PieceColor) -> Self {
        Player {
            name: name.into(),
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(PlayerId::One.other(), PlayerId::Two);
        assert_eq!(PlayerId::Two.other(), PlayerId::One);
    }

    #[test]
    fn test_player_display() {
        assert_eq!(PlayerId::One.to_string(), "Player 1");
        assert_eq!(PlayerId::Two.to_string(), "Player 2");
    }

    #[test]
    fn test_palette_lookup_ignores_case() {
        let ruby = PieceColor::by_name("rUBY").unwrap();
        assert_eq!(ruby.value, "#EE115F");
        assert!(PieceColor::by_name("Mauve").is_none());
    }

    #[test]
    fn test_rgb_resolves_keywords_and_hex() {
        assert_eq!(PieceColor::by_name("Gold").unwrap().rgb(), (255, 215, 0));
        assert_eq!(PieceColor::by_name("Sapphire").unwrap().rgb(), (0x0F, 0x52, 0xBA));
    }

    #[test]
    fn test_palette_names_are_unique() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in &PALETTE[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
