use crate::input::{BitField, RawSample, SplitField};

// https://www.wiibrew.org/wiki/Wiimote/Extension_Controllers/Nunchuck#Data_Format
const STICK_X: BitField = BitField::new(0, 0, 8);
const STICK_Y: BitField = BitField::new(1, 0, 8);

// The low two bits of each accelerometer axis are packed into byte 5 as ZZYYXXCZ.
const ACCEL_X_LOW: BitField = BitField::new(5, 2, 2);
const ACCEL_Y_LOW: BitField = BitField::new(5, 4, 2);
const ACCEL_Z_LOW: BitField = BitField::new(5, 6, 2);

const ACCEL_X: SplitField = SplitField::new(BitField::new(2, 0, 8), ACCEL_X_LOW);
const ACCEL_Y: SplitField = SplitField::new(BitField::new(3, 0, 8), ACCEL_Y_LOW);
const ACCEL_Z: SplitField = SplitField::new(BitField::new(4, 0, 8), ACCEL_Z_LOW);

// Active-low on the wire.
const BUTTON_Z: BitField = BitField::new(5, 0, 1);
const BUTTON_C: BitField = BitField::new(5, 1, 1);

/// Decoded Nunchuck sample.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NunchuckReport {
    pub stick_x: u8,
    pub stick_y: u8,
    /// 10-bit accelerometer values.
    pub accel_x: u16,
    pub accel_y: u16,
    pub accel_z: u16,
    /// `true` while pressed.
    pub c: bool,
    pub z: bool,
}

impl From<RawSample> for NunchuckReport {
    fn from(value: RawSample) -> Self {
        let data = value.bytes();
        Self {
            stick_x: STICK_X.extract(data),
            stick_y: STICK_Y.extract(data),
            accel_x: ACCEL_X.extract(data),
            accel_y: ACCEL_Y.extract(data),
            accel_z: ACCEL_Z.extract(data),
            c: BUTTON_C.extract(data) == 0,
            z: BUTTON_Z.extract(data) == 0,
        }
    }
}

impl From<[u8; 6]> for NunchuckReport {
    fn from(value: [u8; 6]) -> Self {
        Self::from(RawSample(value))
    }
}
