use bitflags::bitflags;

use crate::input::{BitField, RawSample, SplitField};

// Axes are packed back to back through bytes 0..=3 in the order
// left X, left Y, right X, right Y, left trigger, right trigger.
const LEFT_STICK_X: BitField = BitField::new(0, 0, 6);
const LEFT_STICK_Y: SplitField = SplitField::new(BitField::new(0, 6, 2), BitField::new(1, 0, 4));
const RIGHT_STICK_X: SplitField = SplitField::new(BitField::new(1, 4, 4), BitField::new(2, 0, 1));
const RIGHT_STICK_Y: BitField = BitField::new(2, 1, 5);
const LEFT_TRIGGER: SplitField = SplitField::new(BitField::new(2, 6, 2), BitField::new(3, 0, 3));
const RIGHT_TRIGGER: BitField = BitField::new(3, 3, 5);

bitflags! {
    /// Buttons of bytes 4 (low half) and 5 (high half), already inverted so that set means pressed.
    ///
    /// WiiBrew Documentation: https://www.wiibrew.org/wiki/Wiimote/Extension_Controllers/Classic_Controller
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClassicButtons: u16 {
        const R = 1 << 1;
        const START = 1 << 2;
        const HOME = 1 << 3;
        const SELECT = 1 << 4;
        const L = 1 << 5;
        const DOWN = 1 << 6;
        const RIGHT = 1 << 7;

        const UP = 1 << 8;
        const LEFT = 1 << 9;
        const ZR = 1 << 10;
        const X = 1 << 11;
        const A = 1 << 12;
        const Y = 1 << 13;
        const B = 1 << 14;
        const ZL = 1 << 15;
    }
}

/// Decoded Classic Controller (Pro) sample.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClassicReport {
    /// 6 bits.
    pub left_stick_x: u8,
    /// 6 bits.
    pub left_stick_y: u8,
    /// 5 bits.
    pub right_stick_x: u8,
    /// 5 bits.
    pub right_stick_y: u8,
    /// 5 bits.
    pub left_trigger: u8,
    /// 5 bits.
    pub right_trigger: u8,
    pub buttons: ClassicButtons,
}

impl ClassicReport {
    #[must_use]
    pub fn pressed(&self, buttons: ClassicButtons) -> bool {
        self.buttons.contains(buttons)
    }
}

impl From<RawSample> for ClassicReport {
    #[allow(clippy::cast_possible_truncation)] // split fields are at most 6 bits wide
    fn from(value: RawSample) -> Self {
        let data = value.bytes();
        Self {
            left_stick_x: LEFT_STICK_X.extract(data),
            left_stick_y: LEFT_STICK_Y.extract(data) as u8,
            right_stick_x: RIGHT_STICK_X.extract(data) as u8,
            right_stick_y: RIGHT_STICK_Y.extract(data),
            left_trigger: LEFT_TRIGGER.extract(data) as u8,
            right_trigger: RIGHT_TRIGGER.extract(data),
            buttons: ClassicButtons::from_bits_truncate(value.active_high_buttons()),
        }
    }
}

impl From<[u8; 6]> for ClassicReport {
    fn from(value: [u8; 6]) -> Self {
        Self::from(RawSample(value))
    }
}
