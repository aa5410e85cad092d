/// Register holding the six-byte input sample.
pub const SAMPLE_REGISTER: u8 = 0x00;
/// Start of the sixteen-byte factory calibration block.
pub const CALIBRATION_REGISTER: u8 = 0x20;
/// First control register of the unencrypted activation sequence.
pub const INIT_REGISTER_1: u8 = 0xF0;
/// Second control register of the unencrypted activation sequence.
pub const INIT_REGISTER_2: u8 = 0xFB;
/// Start of the six identity bytes.
pub const IDENTITY_REGISTER: u8 = 0xFA;

const INIT_VALUE_1: u8 = 0x55;
const INIT_VALUE_2: u8 = 0x00;

pub const COMMAND_BUFFER_SIZE: usize = 2;

/// A command represents the data sent from the host to the extension controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the register pointer to the start of a block that is read next.
    ///
    /// WiiBrew Documentation: https://www.wiibrew.org/wiki/Wiimote/Extension_Controllers
    SelectRegister(u8),
    /// Write a single byte to a control register.
    WriteRegister(u8, u8),
}

impl Command {
    /// Both halves of the sequence that starts the attachment unencrypted.
    ///
    /// WiiBrew Documentation: https://www.wiibrew.org/wiki/Wiimote/Extension_Controllers#The_New_Way
    pub const DISABLE_ENCRYPTION: [Self; 2] = [
        Self::WriteRegister(INIT_REGISTER_1, INIT_VALUE_1),
        Self::WriteRegister(INIT_REGISTER_2, INIT_VALUE_2),
    ];

    pub const REQUEST_SAMPLE: Self = Self::SelectRegister(SAMPLE_REGISTER);
    pub const REQUEST_IDENTITY: Self = Self::SelectRegister(IDENTITY_REGISTER);
    pub const REQUEST_CALIBRATION: Self = Self::SelectRegister(CALIBRATION_REGISTER);

    /// Converts the command to a byte array.
    ///
    /// Returns a tuple containing the byte array and the actual length of the data.
    #[must_use]
    pub fn to_array(&self) -> ([u8; COMMAND_BUFFER_SIZE], usize) {
        let mut buffer = [0u8; COMMAND_BUFFER_SIZE];
        let length = self.fill_buffer(&mut buffer);
        (buffer, length)
    }

    /// Fills an existing buffer with the command bytes.
    ///
    /// Returns the actual length of the data.
    pub fn fill_buffer(&self, buffer: &mut [u8; COMMAND_BUFFER_SIZE]) -> usize {
        match *self {
            Self::SelectRegister(register) => {
                buffer[0] = register;
                1
            }
            Self::WriteRegister(register, value) => {
                buffer[0] = register;
                buffer[1] = value;
                2
            }
        }
    }
}
