// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compass directions.
//!
//! Used by [`Triangle`](crate::shape::Triangle) to choose where its apex
//! points. Turning is counter-clockwise for positive eighths.

/// The eight compass directions plus [`Nowhere`](Self::Nowhere).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction8 {
    /// East.
    East,
    /// North-east.
    NorthEast,
    /// North.
    #[default]
    North,
    /// North-west.
    NorthWest,
    /// West.
    West,
    /// South-west.
    SouthWest,
    /// South.
    South,
    /// South-east.
    SouthEast,
    /// No direction. Turning it yields itself.
    Nowhere,
}

impl Direction8 {
    /// The four main directions, counter-clockwise from east.
    pub const MAIN: [Self; 4] = [Self::East, Self::North, Self::West, Self::South];

    /// All eight real directions, counter-clockwise from east.
    pub const ALL: [Self; 8] = [
        Self::East,
        Self::NorthEast,
        Self::North,
        Self::NorthWest,
        Self::West,
        Self::SouthWest,
        Self::South,
        Self::SouthEast,
    ];

    /// Position in [`ALL`](Self::ALL), or `None` for [`Nowhere`](Self::Nowhere).
    #[must_use]
    pub const fn ordinal(self) -> Option<usize> {
        match self {
            Self::East => Some(0),
            Self::NorthEast => Some(1),
            Self::North => Some(2),
            Self::NorthWest => Some(3),
            Self::West => Some(4),
            Self::SouthWest => Some(5),
            Self::South => Some(6),
            Self::SouthEast => Some(7),
            Self::Nowhere => None,
        }
    }

    /// Abbreviated name, e.g. `"NE"`.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::East => "E",
            Self::NorthEast => "NE",
            Self::North => "N",
            Self::NorthWest => "NW",
            Self::West => "W",
            Self::SouthWest => "SW",
            Self::South => "S",
            Self::SouthEast => "SE",
            Self::Nowhere => "X",
        }
    }

    /// Returns the direction turned by `eighths` of a full turn (45° each).
    #[must_use]
    pub fn turn_by(self, eighths: i32) -> Self {
        let Some(ord) = self.ordinal() else {
            return Self::Nowhere;
        };
        let step = eighths.rem_euclid(8).unsigned_abs() as usize;
        Self::ALL[(ord + step) % 8]
    }

    /// Turned 90° to the left.
    #[must_use]
    pub fn turn_left(self) -> Self {
        self.turn_by(2)
    }

    /// Turned 90° to the right.
    #[must_use]
    pub fn turn_right(self) -> Self {
        self.turn_by(-2)
    }

    /// Turned 45° to the left.
    #[must_use]
    pub fn half_left(self) -> Self {
        self.turn_by(1)
    }

    /// Turned 45° to the right.
    #[must_use]
    pub fn half_right(self) -> Self {
        self.turn_by(-1)
    }

    /// Turned 180°.
    #[must_use]
    pub fn turn_around(self) -> Self {
        self.turn_by(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turns() {
        assert_eq!(Direction8::North.turn_left(), Direction8::West);
        assert_eq!(Direction8::North.turn_right(), Direction8::East);
        assert_eq!(Direction8::East.turn_right(), Direction8::South);
    }

    #[test]
    fn half_turns_and_wraparound() {
        assert_eq!(Direction8::East.half_right(), Direction8::SouthEast);
        assert_eq!(Direction8::SouthEast.half_left(), Direction8::East);
        assert_eq!(Direction8::NorthWest.turn_around(), Direction8::SouthEast);
        assert_eq!(Direction8::West.turn_by(-13), Direction8::SouthEast);
    }

    #[test]
    fn nowhere_stays_put() {
        assert_eq!(Direction8::Nowhere.turn_left(), Direction8::Nowhere);
        assert_eq!(Direction8::Nowhere.turn_by(5), Direction8::Nowhere);
    }
}
