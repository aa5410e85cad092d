use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::{debug, error, trace, warn};

use crate::calibration::{NunchuckCalibration, CALIBRATION_SIZE};
use crate::extensions::{reserved, ExtensionKind, Report};
use crate::input::RawSample;
use crate::output::{Command, CALIBRATION_REGISTER, IDENTITY_REGISTER, SAMPLE_REGISTER};
use crate::result::{AttachmentError, AttachmentResult};
use crate::simple_io;
use crate::SAMPLE_SIZE;

/// Settle time between selecting a register and reading it back.
pub const DEFAULT_SETTLE_US: u32 = 200;

/// Clock and data pins a bus controller is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinSet {
    scl: u8,
    sda: u8,
}

impl PinSet {
    #[must_use]
    pub const fn new(scl: u8, sda: u8) -> Self {
        Self { scl, sda }
    }

    #[must_use]
    pub const fn scl(&self) -> u8 {
        self.scl
    }

    #[must_use]
    pub const fn sda(&self) -> u8 {
        self.sda
    }
}

impl Default for PinSet {
    fn default() -> Self {
        Self::new(16, 17)
    }
}

/// Which bus controller and pins an attachment hangs off.
///
/// Hosts with several bus controllers can drive one attachment per bus.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BusConfig {
    bus: u8,
    pins: PinSet,
}

impl BusConfig {
    #[must_use]
    pub const fn new(bus: u8, pins: PinSet) -> Self {
        Self { bus, pins }
    }

    #[must_use]
    pub const fn bus(&self) -> u8 {
        self.bus
    }

    #[must_use]
    pub const fn pins(&self) -> PinSet {
        self.pins
    }
}

/// Delays required by the controller firmware.
///
/// These depend on the host clock and are supplied by the integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub settle_us: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            settle_us: DEFAULT_SETTLE_US,
        }
    }
}

/// Hard reset of the host controller, used for recovery only.
pub trait HostReset {
    fn reset(&mut self);
}

/// An `Attachment` communicates with one extension controller on one bus.
pub struct Attachment<I2C, D> {
    i2c: I2C,
    delay: D,
    config: BusConfig,
    timing: Timing,
    kind: Option<ExtensionKind>,
    identity: [u8; SAMPLE_SIZE],
    raw: RawSample,
    report: Option<Report>,
}

impl<I2C: I2c, D: DelayNs> Attachment<I2C, D> {
    /// Creates an attachment that still has to be identified.
    #[must_use]
    pub fn new(i2c: I2C, delay: D, config: BusConfig) -> Self {
        Self {
            i2c,
            delay,
            config,
            timing: Timing::default(),
            kind: None,
            identity: [0u8; SAMPLE_SIZE],
            raw: RawSample::default(),
            report: None,
        }
    }

    /// Creates an attachment that is known to be `kind` without identifying it.
    #[must_use]
    pub fn with_kind(i2c: I2C, delay: D, config: BusConfig, kind: ExtensionKind) -> Self {
        let mut attachment = Self::new(i2c, delay, config);
        attachment.kind = Some(kind);
        attachment
    }

    #[must_use]
    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &BusConfig {
        &self.config
    }

    #[must_use]
    pub const fn timing(&self) -> Timing {
        self.timing
    }

    /// Returns the family, once identified.
    #[must_use]
    pub const fn kind(&self) -> Option<ExtensionKind> {
        self.kind
    }

    /// Returns the identity bytes of the last successful identification, zeroed before that.
    #[must_use]
    pub const fn identity(&self) -> &[u8; SAMPLE_SIZE] {
        &self.identity
    }

    /// Returns the raw bytes of the last successful poll.
    #[must_use]
    pub const fn raw(&self) -> &RawSample {
        &self.raw
    }

    /// Returns the report decoded from `raw`, `None` while the family is unknown.
    #[must_use]
    pub const fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    /// Reads the identity of the attached controller.
    ///
    /// Returns `None` if the identity matches no supported family. The family is fixed by the
    /// first successful match. The stored identity only changes on a match.
    ///
    /// # Errors
    ///
    /// This function will return an error if communication failed or a different family than
    /// the fixed one answers.
    pub fn identify(&mut self) -> AttachmentResult<Option<ExtensionKind>, I2C::Error> {
        let identity: [u8; SAMPLE_SIZE] = simple_io::read_block(
            &mut self.i2c,
            &mut self.delay,
            self.timing,
            IDENTITY_REGISTER,
        )?;

        let Some(found) = ExtensionKind::from_identity(&identity) else {
            match reserved::name(&identity) {
                Some(name) => warn!("bus {}: unsupported {name} attachment", self.config.bus),
                None => warn!("bus {}: unknown attachment {identity:02X?}", self.config.bus),
            }
            return Ok(None);
        };

        match self.kind {
            Some(expected) if expected != found => {
                warn!(
                    "bus {}: expected {expected:?} but {found:?} answered",
                    self.config.bus
                );
                Err(AttachmentError::FamilyChanged { expected, found })
            }
            _ => {
                debug!("bus {}: identified {found:?}", self.config.bus);
                self.identity = identity;
                self.kind = Some(found);
                Ok(Some(found))
            }
        }
    }

    /// Starts the attachment unencrypted. Must run once before the first poll.
    ///
    /// # Errors
    ///
    /// This function will return an error if the bus rejected a write.
    pub fn init(&mut self) -> AttachmentResult<(), I2C::Error> {
        simple_io::write_sequence(
            &mut self.i2c,
            &mut self.delay,
            self.timing,
            &Command::DISABLE_ENCRYPTION,
        )?;
        debug!("bus {}: attachment initialized", self.config.bus);
        Ok(())
    }

    /// Repeats the init sequence after the controller was unplugged and plugged in again, then
    /// checks that the same family answers.
    ///
    /// # Errors
    ///
    /// This function will return an error if communication failed or another family was
    /// plugged in.
    pub fn reinit(&mut self) -> AttachmentResult<Option<ExtensionKind>, I2C::Error> {
        self.init()?;
        self.identify()
    }

    /// Reads a new sample and decodes it.
    ///
    /// Raw sample and report are only replaced when the read succeeds. Calls must be spaced
    /// out as the controller requires, polling faster returns stale data.
    ///
    /// # Errors
    ///
    /// This function will return an error if communication failed.
    pub fn poll(&mut self) -> AttachmentResult<Option<Report>, I2C::Error> {
        let data: [u8; SAMPLE_SIZE] = simple_io::read_block(
            &mut self.i2c,
            &mut self.delay,
            self.timing,
            SAMPLE_REGISTER,
        )?;
        let raw = RawSample(data);
        trace!("bus {}: sample {:02X?}", self.config.bus, raw.bytes());

        self.raw = raw;
        self.report = self.kind.map(|kind| Report::decode(kind, &raw));
        Ok(self.report)
    }

    /// Polls and resets the host when the bus fails.
    ///
    /// # Errors
    ///
    /// This function will return the poll error if the reset returns.
    pub fn poll_or_reset<R: HostReset>(
        &mut self,
        reset: &mut R,
    ) -> AttachmentResult<Option<Report>, I2C::Error> {
        let result = self.poll();
        if let Err(err) = &result {
            error!("bus {}: poll failed, resetting host: {err:?}", self.config.bus);
            reset.reset();
        }
        result
    }

    /// Reads the factory calibration of a Nunchuck.
    ///
    /// # Errors
    ///
    /// This function will return an error if the attachment is not a Nunchuck, communication
    /// failed or the checksum does not match.
    pub fn read_nunchuck_calibration(
        &mut self,
    ) -> AttachmentResult<NunchuckCalibration, I2C::Error> {
        match self.kind {
            Some(ExtensionKind::Nunchuck) => {}
            Some(other) => return Err(AttachmentError::Unsupported(other)),
            None => return Err(AttachmentError::Unidentified),
        }

        let data: [u8; CALIBRATION_SIZE] = simple_io::read_block(
            &mut self.i2c,
            &mut self.delay,
            self.timing,
            CALIBRATION_REGISTER,
        )?;
        NunchuckCalibration::parse(&data).ok_or(AttachmentError::InvalidChecksum)
    }

    /// Gives back the bus and delay.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}
