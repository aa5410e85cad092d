mod classic;
mod guitar;
mod nunchuck;

pub use classic::{ClassicButtons, ClassicReport};
pub use guitar::{GuitarButtons, GuitarReport};
pub use nunchuck::NunchuckReport;

use crate::input::RawSample;
use crate::SAMPLE_SIZE;

// https://www.wiibrew.org/wiki/Wiimote/Extension_Controllers#Identification
pub const NUNCHUCK_ID: [u8; SAMPLE_SIZE] = [0x00, 0x00, 0xA4, 0x20, 0x00, 0x00];
/// Classic Controller without handles.
pub const CLASSIC_CONTROLLER_ID: [u8; SAMPLE_SIZE] = [0x00, 0x00, 0xA4, 0x20, 0x01, 0x01];
/// Classic Controller Pro, the variant with handles.
pub const CLASSIC_CONTROLLER_PRO_ID: [u8; SAMPLE_SIZE] = [0x01, 0x00, 0xA4, 0x20, 0x01, 0x01];
pub const GUITAR_ID: [u8; SAMPLE_SIZE] = [0x00, 0x00, 0xA4, 0x20, 0x01, 0x03];

/// Families that answer with a known identity but have no decoder yet.
pub mod reserved {
    use crate::SAMPLE_SIZE;

    pub const DRUMS_ID: [u8; SAMPLE_SIZE] = [0x01, 0x00, 0xA4, 0x20, 0x01, 0x03];
    pub const TURNTABLE_ID: [u8; SAMPLE_SIZE] = [0x03, 0x00, 0xA4, 0x20, 0x01, 0x03];
    pub const TAIKO_ID: [u8; SAMPLE_SIZE] = [0x00, 0x00, 0xA4, 0x20, 0x01, 0x11];
    pub const TABLET_ID: [u8; SAMPLE_SIZE] = [0xFF, 0x00, 0xA4, 0x20, 0x00, 0x13];

    /// Name of a reserved family, if `identity` is one of them.
    #[must_use]
    pub fn name(identity: &[u8; SAMPLE_SIZE]) -> Option<&'static str> {
        match *identity {
            DRUMS_ID => Some("drums"),
            TURNTABLE_ID => Some("turntable"),
            TAIKO_ID => Some("taiko"),
            TABLET_ID => Some("tablet"),
            _ => None,
        }
    }
}

/// The extension controller families this crate can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionKind {
    Nunchuck,
    ClassicController,
    ClassicControllerPro,
    /// Not validated against real hardware.
    GuitarWii,
}

impl ExtensionKind {
    pub const ALL: [Self; 4] = [
        Self::Nunchuck,
        Self::ClassicController,
        Self::ClassicControllerPro,
        Self::GuitarWii,
    ];

    /// Matches an observed identity against the known signatures.
    ///
    /// All six bytes must be equal, so the handle byte of the Classic Controller Pro is
    /// never confused with the plain Classic Controller.
    #[must_use]
    pub fn from_identity(identity: &[u8; SAMPLE_SIZE]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.identity() == identity)
    }

    #[must_use]
    pub const fn identity(&self) -> &'static [u8; SAMPLE_SIZE] {
        match self {
            Self::Nunchuck => &NUNCHUCK_ID,
            Self::ClassicController => &CLASSIC_CONTROLLER_ID,
            Self::ClassicControllerPro => &CLASSIC_CONTROLLER_PRO_ID,
            Self::GuitarWii => &GUITAR_ID,
        }
    }
}

/// A decoded sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    Nunchuck(NunchuckReport),
    /// Shared by the Classic Controller and the Classic Controller Pro.
    Classic(ClassicReport),
    Guitar(GuitarReport),
}

impl Report {
    /// Decodes `raw` with the layout of `kind`.
    #[must_use]
    pub fn decode(kind: ExtensionKind, raw: &RawSample) -> Self {
        match kind {
            ExtensionKind::Nunchuck => Self::Nunchuck(NunchuckReport::from(*raw)),
            ExtensionKind::ClassicController | ExtensionKind::ClassicControllerPro => {
                Self::Classic(ClassicReport::from(*raw))
            }
            ExtensionKind::GuitarWii => Self::Guitar(GuitarReport::from(*raw)),
        }
    }

    #[must_use]
    pub const fn as_nunchuck(&self) -> Option<&NunchuckReport> {
        match self {
            Self::Nunchuck(report) => Some(report),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_classic(&self) -> Option<&ClassicReport> {
        match self {
            Self::Classic(report) => Some(report),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_guitar(&self) -> Option<&GuitarReport> {
        match self {
            Self::Guitar(report) => Some(report),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identify_nunchuck() {
        assert_eq!(
            ExtensionKind::from_identity(&[0x00, 0x00, 0xA4, 0x20, 0x00, 0x00]),
            Some(ExtensionKind::Nunchuck)
        );
    }

    #[test]
    fn test_classic_pro_is_distinct() {
        assert_eq!(
            ExtensionKind::from_identity(&[0x01, 0x00, 0xA4, 0x20, 0x01, 0x01]),
            Some(ExtensionKind::ClassicControllerPro)
        );
        assert_eq!(
            ExtensionKind::from_identity(&[0x00, 0x00, 0xA4, 0x20, 0x01, 0x01]),
            Some(ExtensionKind::ClassicController)
        );
    }

    #[test]
    fn test_unknown_identity() {
        assert_eq!(ExtensionKind::from_identity(&[0xFF; 6]), None);
        assert_eq!(ExtensionKind::from_identity(&[0; 6]), None);
        // Drums share the guitar signature except for byte 0
        assert_eq!(ExtensionKind::from_identity(&reserved::DRUMS_ID), None);
        assert_eq!(reserved::name(&reserved::DRUMS_ID), Some("drums"));
    }

    #[test]
    fn test_identity_round_trip() {
        for kind in ExtensionKind::ALL {
            assert_eq!(ExtensionKind::from_identity(kind.identity()), Some(kind));
        }
    }

    #[test]
    fn test_decode_dispatch() {
        let raw = RawSample([0x80; 6]);

        assert!(Report::decode(ExtensionKind::Nunchuck, &raw)
            .as_nunchuck()
            .is_some());
        assert!(Report::decode(ExtensionKind::ClassicControllerPro, &raw)
            .as_classic()
            .is_some());
        assert!(Report::decode(ExtensionKind::GuitarWii, &raw)
            .as_guitar()
            .is_some());
    }
}
