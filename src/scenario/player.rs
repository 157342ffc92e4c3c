use std::fmt;

/// A player slot. Slot 0 is the neutral environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Player {
    Gaia = 0,
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
}

impl Player {
    /// Every slot in enumeration order
    pub const ALL: [Player; 9] = [
        Player::Gaia,
        Player::One,
        Player::Two,
        Player::Three,
        Player::Four,
        Player::Five,
        Player::Six,
        Player::Seven,
        Player::Eight,
    ];

    /// Resolve a raw slot number. The `-1` sentinel and out of range values
    /// resolve to nothing.
    ///
    /// ```rust
    /// use rge::scenario::Player;
    /// assert_eq!(Player::from_raw(0), Some(Player::Gaia));
    /// assert_eq!(Player::from_raw(8), Some(Player::Eight));
    /// assert_eq!(Player::from_raw(-1), None);
    /// assert_eq!(Player::from_raw(9), None);
    /// ```
    pub fn from_raw(value: i32) -> Option<Player> {
        usize::try_from(value)
            .ok()
            .and_then(|x| Self::ALL.get(x))
            .copied()
    }

    /// The slot number
    pub fn value(&self) -> i32 {
        *self as i32
    }

    /// Symbolic name of the slot, eg: `GAIA`, `ONE`
    pub fn name(&self) -> &'static str {
        match self {
            Player::Gaia => "GAIA",
            Player::One => "ONE",
            Player::Two => "TWO",
            Player::Three => "THREE",
            Player::Four => "FOUR",
            Player::Five => "FIVE",
            Player::Six => "SIX",
            Player::Seven => "SEVEN",
            Player::Eight => "EIGHT",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_round_trip() {
        for player in Player::ALL {
            assert_eq!(Player::from_raw(player.value()), Some(player));
        }
        assert_eq!(Player::from_raw(i32::MIN), None);
    }

    #[test]
    fn test_unset_sentinel_is_no_player() {
        assert_eq!(Player::from_raw(crate::triggers::UNSET), None);
    }
}
