pub const KILOBYTE_SIZE: usize = 1024;
pub const HEADER_SIZE: usize = 16;
pub const TRAINER_SIZE: usize = 512;
pub const PRG_ROM_PAGE_SIZE: usize = 16 * KILOBYTE_SIZE;
pub const CHR_ROM_PAGE_SIZE: usize = 8 * KILOBYTE_SIZE;
pub const PRG_RAM_PAGE_SIZE: usize = 8 * KILOBYTE_SIZE;

/// "NES" followed by MS-DOS end-of-file.
pub const MAGIC: [u8; 4] = [0x4E, 0x45, 0x53, 0x1A];

/// Size of the NMI/RESET/IRQ table at the end of PRG ROM.
pub const INTERRUPT_VECTORS_SIZE: usize = 6;

/// Parsed view over the 16 byte iNES header.
///
/// An invalid magic number does not stop parsing. It is reported through `magic_valid` and the
/// caller decides how strict to be about it.
///
/// Reference: https://wiki.nesdev.com/w/index.php/INES
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct HeaderFields {
    // Whether bytes 0..4 hold "NES\x1A".
    pub magic_valid: bool,
    // Number of 16 KB pages of PRG (Program) ROM.
    pub prg_rom_banks: u8,
    // Number of 8 KB pages of CHR (Character) ROM.
    pub chr_rom_banks: u8,
    // The nametable mirroring mode.
    pub mirroring: Mirroring,
    // Whether a 512 byte trainer sits between the header and PRG ROM.
    pub has_trainer: bool,
    // Mapper number, assembled from the high nibbles of flags 6 and 7.
    pub mapper_number: u8,
    // Number of 8 KB pages of PRG (Program) RAM.
    pub prg_ram_banks: u8,
    // The TV system the cartridge targets.
    pub region: Region,
}

impl HeaderFields {
    pub fn trainer_len(&self) -> usize {
        if self.has_trainer {
            TRAINER_SIZE
        } else {
            0
        }
    }

    pub fn prg_rom_len(&self) -> usize {
        self.prg_rom_banks as usize * PRG_ROM_PAGE_SIZE
    }

    pub fn chr_rom_len(&self) -> usize {
        self.chr_rom_banks as usize * CHR_ROM_PAGE_SIZE
    }

    pub fn prg_ram_len(&self) -> usize {
        self.prg_ram_banks as usize * PRG_RAM_PAGE_SIZE
    }

    /// Offset of the first PRG ROM byte in the image.
    pub fn prg_rom_offset(&self) -> usize {
        HEADER_SIZE + self.trainer_len()
    }

    /// Offset of the first CHR ROM byte in the image.
    pub fn chr_rom_offset(&self) -> usize {
        self.prg_rom_offset() + self.prg_rom_len()
    }

    /// The minimum number of bytes an image with this header must contain.
    pub fn image_len(&self) -> usize {
        self.chr_rom_offset() + self.chr_rom_len()
    }
}

/// Definition of possible nametable mirror modes.
///
/// Reference: https://wiki.nesdev.com/w/index.php/Mirroring#Nametable_Mirroring
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Mirroring {
    Horizontal,
    Vertical,
}

/// Definition of possible TV systems.
///
/// Reference: https://wiki.nesdev.com/w/index.php/INES#Flags_9
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Region {
    NTSC,
    PAL,
}

/// The three 16-bit addresses the CPU reads from $FFFA-$FFFF.
///
/// Reference: https://wiki.nesdev.com/w/index.php/CPU_memory_map
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct InterruptVectors {
    pub nmi: u16,
    pub reset: u16,
    pub irq: u16,
}

impl InterruptVectors {
    /// Little-endian NMI, RESET, IRQ/BRK.
    pub fn to_bytes(self) -> [u8; INTERRUPT_VECTORS_SIZE] {
        let [nmi_lo, nmi_hi] = self.nmi.to_le_bytes();
        let [reset_lo, reset_hi] = self.reset.to_le_bytes();
        let [irq_lo, irq_hi] = self.irq.to_le_bytes();
        [nmi_lo, nmi_hi, reset_lo, reset_hi, irq_lo, irq_hi]
    }

    pub fn from_bytes(bytes: [u8; INTERRUPT_VECTORS_SIZE]) -> Self {
        InterruptVectors {
            nmi: u16::from_le_bytes([bytes[0], bytes[1]]),
            reset: u16::from_le_bytes([bytes[2], bytes[3]]),
            irq: u16::from_le_bytes([bytes[4], bytes[5]]),
        }
    }
}

impl Default for InterruptVectors {
    /// RESET and IRQ/BRK both point at $8000, where mapper 0 places the first PRG ROM byte.
    fn default() -> Self {
        InterruptVectors {
            nmi: 0x0000,
            reset: 0x8000,
            irq: 0x8000,
        }
    }
}

/// A loaded cartridge image. Built once by `reader::load` and never mutated afterwards.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Cartridge {
    pub(crate) header: [u8; HEADER_SIZE],
    pub(crate) fields: HeaderFields,
    pub(crate) trainer: Option<Vec<u8>>,
    pub(crate) prg_rom: Vec<u8>,
    pub(crate) chr_rom: Vec<u8>,
}

impl Cartridge {
    /// The verbatim header block.
    pub fn raw_header(&self) -> &[u8; HEADER_SIZE] {
        &self.header
    }

    pub fn header(&self) -> &HeaderFields {
        &self.fields
    }

    pub fn trainer(&self) -> Option<&[u8]> {
        self.trainer.as_deref()
    }

    pub fn prg_rom(&self) -> &[u8] {
        &self.prg_rom
    }

    pub fn chr_rom(&self) -> &[u8] {
        &self.chr_rom
    }

    /// Reads the vector table from the last 6 bytes of PRG ROM.
    pub fn interrupt_vectors(&self) -> Option<InterruptVectors> {
        let start = self.prg_rom.len().checked_sub(INTERRUPT_VECTORS_SIZE)?;
        let mut table = [0u8; INTERRUPT_VECTORS_SIZE];
        table.copy_from_slice(&self.prg_rom[start..]);
        Some(InterruptVectors::from_bytes(table))
    }
}
