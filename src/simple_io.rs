use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::output::Command;
use crate::prelude::*;

/// Sends a command to the extension controller.
pub fn write_command<I2C: I2c>(
    i2c: &mut I2C,
    command: Command,
) -> AttachmentResult<(), I2C::Error> {
    let (buffer, size) = command.to_array();
    i2c.write(EXTENSION_ADDRESS, &buffer[..size])
        .map_err(AttachmentError::Bus)
}

/// Selects `register`, waits for the controller to settle and reads `N` bytes from it.
///
/// The returned block is only produced when both transfers succeed.
pub fn read_block<I2C: I2c, D: DelayNs, const N: usize>(
    i2c: &mut I2C,
    delay: &mut D,
    timing: Timing,
    register: u8,
) -> AttachmentResult<[u8; N], I2C::Error> {
    write_command(i2c, Command::SelectRegister(register))?;
    delay.delay_us(timing.settle_us);

    let mut buffer = [0u8; N];
    i2c.read(EXTENSION_ADDRESS, &mut buffer)
        .map_err(AttachmentError::Bus)?;
    Ok(buffer)
}

/// Writes every command in order, waiting the settle time after each.
pub fn write_sequence<I2C: I2c, D: DelayNs>(
    i2c: &mut I2C,
    delay: &mut D,
    timing: Timing,
    commands: &[Command],
) -> AttachmentResult<(), I2C::Error> {
    for command in commands {
        write_command(i2c, *command)?;
        delay.delay_us(timing.settle_us);
    }
    Ok(())
}
