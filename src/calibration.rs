use crate::extensions::NunchuckReport;

pub(crate) const CALIBRATION_SIZE: usize = 16;

const CHECKSUM_SEED: u8 = 0x55;

/// Maps `value` so that `zero` becomes 0.0 and `max` becomes 1.0.
///
/// A degenerate range yields 0.0.
#[must_use]
pub fn normalize(value: u16, zero: u16, max: u16) -> f32 {
    let range = f32::from(max) - f32::from(zero);
    if range == 0.0 {
        return 0.0;
    }
    (f32::from(value) - f32::from(zero)) / range
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StickCalibration {
    pub min: u8,
    pub center: u8,
    pub max: u8,
}

impl StickCalibration {
    /// Returns the axis in roughly `-1.0..=1.0`.
    #[must_use]
    pub fn normalize(&self, value: u8) -> f32 {
        if value >= self.center {
            normalize(value.into(), self.center.into(), self.max.into())
        } else {
            -normalize(value.into(), self.center.into(), self.min.into())
        }
    }
}

/// Factory calibration of a Nunchuck, stored at register 0x20.
///
/// WiiBrew Documentation: https://www.wiibrew.org/wiki/Wiimote/Extension_Controllers/Nunchuck#Calibration_data
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NunchuckCalibration {
    pub zero_g: (u16, u16, u16),
    pub one_g: (u16, u16, u16),
    pub stick_x: StickCalibration,
    pub stick_y: StickCalibration,
}

impl NunchuckCalibration {
    /// Parses the calibration block, returns `None` when the checksum does not match.
    ///
    /// Byte 14 holds `0x55` plus the sum of the first fourteen bytes, byte 15 adds another `0x55`.
    #[must_use]
    pub fn parse(data: &[u8; CALIBRATION_SIZE]) -> Option<Self> {
        let mut checksum = CHECKSUM_SEED;
        for byte in &data[..14] {
            checksum = checksum.wrapping_add(*byte);
        }
        if checksum != data[14] || checksum.wrapping_add(CHECKSUM_SEED) != data[15] {
            return None;
        }

        // The low bits are packed as ZZYYXX-- like in the sample data.
        let axis =
            |high: u8, low: u8, shift: u8| (u16::from(high) << 2) | (u16::from(low) >> shift & 0b11);

        Some(Self {
            zero_g: (
                axis(data[0], data[3], 2),
                axis(data[1], data[3], 4),
                axis(data[2], data[3], 6),
            ),
            one_g: (
                axis(data[4], data[7], 2),
                axis(data[5], data[7], 4),
                axis(data[6], data[7], 6),
            ),
            stick_x: StickCalibration {
                max: data[8],
                min: data[9],
                center: data[10],
            },
            stick_y: StickCalibration {
                max: data[11],
                min: data[12],
                center: data[13],
            },
        })
    }

    /// Returns the acceleration in g per axis.
    #[must_use]
    pub fn acceleration(&self, report: &NunchuckReport) -> (f32, f32, f32) {
        (
            normalize(report.accel_x, self.zero_g.0, self.one_g.0),
            normalize(report.accel_y, self.zero_g.1, self.one_g.1),
            normalize(report.accel_z, self.zero_g.2, self.one_g.2),
        )
    }

    #[must_use]
    pub fn stick(&self, report: &NunchuckReport) -> (f32, f32) {
        (
            self.stick_x.normalize(report.stick_x),
            self.stick_y.normalize(report.stick_y),
        )
    }
}
