//! Recording bus and delay doubles for driving an `Attachment` without hardware.

#![allow(dead_code)]

use std::collections::VecDeque;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};
use wii_attachment::prelude::HostReset;

/// Routes the driver's `log` output to the test harness, visible with `--nocapture`.
pub fn init_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}

/// Answers reads from a queue and records every write.
#[derive(Debug, Default)]
pub struct MockBus {
    pub writes: Vec<(u8, Vec<u8>)>,
    pub responses: VecDeque<Vec<u8>>,
    pub reject_writes: bool,
}

impl MockBus {
    pub fn with_responses<const N: usize>(responses: [&[u8]; N]) -> Self {
        Self {
            responses: responses.iter().map(|r| r.to_vec()).collect(),
            ..Self::default()
        }
    }

    pub fn written(&self) -> Vec<Vec<u8>> {
        self.writes.iter().map(|(_, bytes)| bytes.clone()).collect()
    }
}

impl ErrorType for MockBus {
    type Error = ErrorKind;
}

impl I2c for MockBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for operation in operations {
            match operation {
                Operation::Write(bytes) => {
                    if self.reject_writes {
                        return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
                    }
                    self.writes.push((address, bytes.to_vec()));
                }
                Operation::Read(buffer) => {
                    let response = self.responses.pop_front().ok_or(ErrorKind::Other)?;
                    if response.len() != buffer.len() {
                        return Err(ErrorKind::Other);
                    }
                    buffer.copy_from_slice(&response);
                }
            }
        }
        Ok(())
    }
}

/// Sums up all requested delays.
#[derive(Debug, Default)]
pub struct MockDelay {
    pub total_ns: u64,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

#[derive(Debug, Default)]
pub struct CountingReset {
    pub resets: usize,
}

impl HostReset for CountingReset {
    fn reset(&mut self) {
        self.resets += 1;
    }
}

/// Builds a Nunchuck calibration block with valid checksum bytes.
pub fn calibration_block(payload: [u8; 14]) -> [u8; 16] {
    let mut block = [0u8; 16];
    block[..14].copy_from_slice(&payload);
    let sum = payload.iter().fold(0x55u8, |sum, byte| sum.wrapping_add(*byte));
    block[14] = sum;
    block[15] = sum.wrapping_add(0x55);
    block
}
