//! GuitarWii decoding.
//!
//! The layout follows the Classic Controller packing and has not been validated against real
//! hardware.

use bitflags::bitflags;

use crate::input::{BitField, RawSample, SplitField};

const STICK_X: BitField = BitField::new(0, 0, 6);
const STICK_Y: SplitField = SplitField::new(BitField::new(0, 6, 2), BitField::new(1, 0, 4));
const TOUCH_BAR: SplitField = SplitField::new(BitField::new(1, 4, 4), BitField::new(2, 0, 1));
const WHAMMY_BAR: BitField = BitField::new(2, 1, 5);

bitflags! {
    /// Buttons of bytes 4 (low half) and 5 (high half), already inverted so that set means pressed.
    ///
    /// WiiBrew Documentation: https://www.wiibrew.org/wiki/Wiimote/Extension_Controllers/Guitar_Hero_(Wii)_Guitars
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GuitarButtons: u16 {
        const PLUS = 1 << 2;
        const MINUS = 1 << 4;
        const STRUM_DOWN = 1 << 6;

        const STRUM_UP = 1 << 8;
        const YELLOW = 1 << 11;
        const GREEN = 1 << 12;
        const BLUE = 1 << 13;
        const RED = 1 << 14;
        const ORANGE = 1 << 15;
    }
}

impl GuitarButtons {
    pub const FRETS: Self = Self::GREEN
        .union(Self::RED)
        .union(Self::YELLOW)
        .union(Self::BLUE)
        .union(Self::ORANGE);
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GuitarReport {
    pub stick_x: u8,
    pub stick_y: u8,
    pub touch_bar: u8,
    pub whammy_bar: u8,
    pub buttons: GuitarButtons,
}

impl GuitarReport {
    /// Frets currently held down.
    #[must_use]
    pub fn frets(&self) -> GuitarButtons {
        self.buttons & GuitarButtons::FRETS
    }

    #[must_use]
    pub fn strumming(&self) -> bool {
        self.buttons
            .intersects(GuitarButtons::STRUM_UP | GuitarButtons::STRUM_DOWN)
    }
}

impl From<RawSample> for GuitarReport {
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: RawSample) -> Self {
        let data = value.bytes();
        Self {
            stick_x: STICK_X.extract(data),
            stick_y: STICK_Y.extract(data) as u8,
            touch_bar: TOUCH_BAR.extract(data) as u8,
            whammy_bar: WHAMMY_BAR.extract(data),
            buttons: GuitarButtons::from_bits_truncate(value.active_high_buttons()),
        }
    }
}

impl From<[u8; 6]> for GuitarReport {
    fn from(value: [u8; 6]) -> Self {
        Self::from(RawSample(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle() {
        let report = GuitarReport::from([0, 0, 0, 0, 0xFF, 0xFF]);

        assert!(report.buttons.is_empty());
        assert!(!report.strumming());
    }

    #[test]
    fn test_frets_and_strum() {
        // green and orange held, strumming down
        let report = GuitarReport::from([0, 0, 0, 0, 0b1011_1111, 0b0110_1111]);

        assert_eq!(report.frets(), GuitarButtons::GREEN | GuitarButtons::ORANGE);
        assert!(report.buttons.contains(GuitarButtons::STRUM_DOWN));
        assert!(report.strumming());
    }

    #[test]
    fn test_plus_minus() {
        let report = GuitarReport::from([0, 0, 0, 0, 0b1110_1011, 0xFF]);

        assert_eq!(report.buttons, GuitarButtons::PLUS | GuitarButtons::MINUS);
        assert!(report.frets().is_empty());
    }

    #[test]
    fn test_analog_values() {
        let report = GuitarReport::from([0b0110_1010, 0b1001_0011, 0b0001_1011, 0, 0xFF, 0xFF]);

        assert_eq!(report.stick_x, 0b10_1010);
        assert_eq!(report.stick_y, 0b01_0011);
        assert_eq!(report.touch_bar, 0b1_0011);
        assert_eq!(report.whammy_bar, 0b0_1101);
    }
}
