//! RISC-V M-Extension Function Code (funct7).

/// `funct7` value marking an M-extension operation.
pub const M_EXTENSION: u32 = 0b0000001;
