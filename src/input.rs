use crate::SAMPLE_SIZE;

/// A contiguous run of bits inside one byte of a sample.
///
/// `offset` counts from the least significant bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    pub(crate) byte: usize,
    pub(crate) offset: u8,
    pub(crate) width: u8,
}

impl BitField {
    /// # Panics
    ///
    /// Panics if the field does not lie within one byte of a sample.
    #[must_use]
    pub const fn new(byte: usize, offset: u8, width: u8) -> Self {
        assert!(byte < SAMPLE_SIZE, "bit field byte out of range");
        assert!(
            width > 0 && offset as u16 + width as u16 <= 8,
            "bit field must fit in one byte"
        );
        Self {
            byte,
            offset,
            width,
        }
    }

    /// Extracts the field, right aligned.
    #[must_use]
    pub const fn extract(&self, data: &[u8; SAMPLE_SIZE]) -> u8 {
        let mask = ((1u16 << self.width) - 1) as u8;
        (data[self.byte] >> self.offset) & mask
    }
}

/// A field that crosses a byte boundary.
///
/// The `high` part supplies the most significant bits and comes from the first byte touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitField {
    pub(crate) high: BitField,
    pub(crate) low: BitField,
}

impl SplitField {
    #[must_use]
    pub const fn new(high: BitField, low: BitField) -> Self {
        Self { high, low }
    }

    #[must_use]
    pub const fn width(&self) -> u8 {
        self.high.width + self.low.width
    }

    #[must_use]
    pub const fn extract(&self, data: &[u8; SAMPLE_SIZE]) -> u16 {
        ((self.high.extract(data) as u16) << self.low.width) | self.low.extract(data) as u16
    }
}

/// The six bytes returned by the most recent poll.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RawSample(pub [u8; SAMPLE_SIZE]);

impl RawSample {
    #[must_use]
    pub const fn bytes(&self) -> &[u8; SAMPLE_SIZE] {
        &self.0
    }

    /// Digital flags of bytes 4 and 5 with the active-low wire sense inverted.
    ///
    /// Byte 4 is the low half, so a set bit means the button is pressed.
    #[must_use]
    pub const fn active_high_buttons(&self) -> u16 {
        !u16::from_le_bytes([self.0[4], self.0[5]])
    }
}

impl From<[u8; SAMPLE_SIZE]> for RawSample {
    fn from(value: [u8; SAMPLE_SIZE]) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_byte_field() {
        let field = BitField::new(2, 0, 8);
        let data = [0, 0, 0xA7, 0, 0, 0];

        assert_eq!(field.extract(&data), 0xA7);
    }

    #[test]
    fn test_inner_bits() {
        let field = BitField::new(5, 2, 2);

        assert_eq!(field.extract(&[0, 0, 0, 0, 0, 0b0000_1100]), 0b11);
        assert_eq!(field.extract(&[0, 0, 0, 0, 0, 0b1111_0011]), 0);
        assert_eq!(field.extract(&[0, 0, 0, 0, 0, 0b0000_1000]), 0b10);
    }

    #[test]
    fn test_split_field_order() {
        let field = SplitField::new(BitField::new(0, 6, 2), BitField::new(1, 0, 4));
        let data = [0b1000_0000, 0b0000_0011, 0, 0, 0, 0];

        assert_eq!(field.width(), 6);
        // high bits 0b10 from byte 0, low bits 0b0011 from byte 1
        assert_eq!(field.extract(&data), 0b10_0011);
    }

    #[test]
    #[should_panic(expected = "bit field must fit in one byte")]
    fn test_field_wider_than_byte() {
        let _ = BitField::new(0, 4, 5);
    }

    #[test]
    #[should_panic(expected = "bit field byte out of range")]
    fn test_field_past_sample() {
        let _ = BitField::new(SAMPLE_SIZE, 0, 1);
    }

    #[test]
    fn test_active_high_buttons() {
        let sample = RawSample([0, 0, 0, 0, 0b1111_1101, 0b0111_1111]);

        assert_eq!(sample.active_high_buttons(), 0b1000_0000_0000_0010);
    }
}
