#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]

mod calibration;
mod device;
pub mod extensions;
pub mod input;
pub mod output;
mod result;
pub mod simple_io;

pub use calibration::{normalize, NunchuckCalibration, StickCalibration};
pub use device::DEFAULT_SETTLE_US;

/// TWI slave address shared by every Wii extension controller.
pub const EXTENSION_ADDRESS: u8 = 0x52;

/// Length of a polled sample and of an identity signature.
pub const SAMPLE_SIZE: usize = 6;

pub mod prelude {
    pub use crate::calibration::NunchuckCalibration;
    pub use crate::device::{Attachment, BusConfig, HostReset, PinSet, Timing};
    pub use crate::extensions::{
        ClassicButtons, ClassicReport, ExtensionKind, GuitarButtons, GuitarReport,
        NunchuckReport, Report,
    };
    pub use crate::input::RawSample;
    pub use crate::result::*;
    pub use crate::{DEFAULT_SETTLE_US, EXTENSION_ADDRESS, SAMPLE_SIZE};
}
