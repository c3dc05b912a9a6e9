use crate::error::{Error, Result};
use crate::rom::{header::build_header, model::*};
use std::iter;
use tracing::debug;

/// Plays a tone on the first square wave channel, then spins forever.
///
/// Mapper 0 maps the first PRG ROM byte to $8000, so the jump target is absolute.
///
/// Reference: https://wiki.nesdev.com/w/index.php/APU#Registers
pub const DEFAULT_PAYLOAD: [u8; 28] = [
    0xA9, 0x01,       // 8000: LDA #$01
    0x8D, 0x15, 0x40, // 8002: STA $4015 (enable square 1)
    0xA9, 0xE5,       // 8005: LDA #$E5
    0x8D, 0x01, 0x40, // 8007: STA $4001 (length counter)
    0xA9, 0x33,       // 800A: LDA #$33
    0x8D, 0x02, 0x40, // 800C: STA $4002 (timer low)
    0xA9, 0x02,       // 800F: LDA #$02
    0x8D, 0x03, 0x40, // 8011: STA $4003 (timer high)
    0xA9, 0xA2,       // 8014: LDA #$A2
    0x8D, 0x00, 0x40, // 8016: STA $4000 (volume)
    0x4C, 0x19, 0x80, // 8019: JMP $8019
];

/// Synthesizes mapper 0 cartridge images.
///
/// The default is the layout of a plain NROM board like SMB1: 2 x 16 KB of PRG ROM and
/// 1 x 8 KB of CHR ROM, carrying `DEFAULT_PAYLOAD`.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct RomWriter {
    pub prg_rom_banks: u8,
    pub chr_rom_banks: u8,
    pub payload: Vec<u8>,
    pub vectors: InterruptVectors,
}

impl RomWriter {
    pub fn new() -> RomWriter {
        RomWriter {
            prg_rom_banks: 2,
            chr_rom_banks: 1,
            payload: DEFAULT_PAYLOAD.to_vec(),
            vectors: InterruptVectors::default(),
        }
    }

    pub fn banks(mut self, prg_rom_banks: u8, chr_rom_banks: u8) -> RomWriter {
        self.prg_rom_banks = prg_rom_banks;
        self.chr_rom_banks = chr_rom_banks;
        self
    }

    pub fn payload(mut self, payload: &[u8]) -> RomWriter {
        self.payload = payload.to_vec();
        self
    }

    pub fn vectors(mut self, vectors: InterruptVectors) -> RomWriter {
        self.vectors = vectors;
        self
    }

    /// Bytes of PRG ROM left for the payload once the vector table is placed.
    pub fn payload_capacity(&self) -> usize {
        (self.prg_rom_banks as usize * PRG_ROM_PAGE_SIZE).saturating_sub(INTERRUPT_VECTORS_SIZE)
    }

    /// PRG ROM is the payload, zero padding, then the vector table in the last 6 bytes.
    fn prg_rom(&self) -> Result<Vec<u8>> {
        let prg_rom_len = self.prg_rom_banks as usize * PRG_ROM_PAGE_SIZE;
        if self.payload.len() + INTERRUPT_VECTORS_SIZE > prg_rom_len {
            return Err(Error::PayloadTooLarge {
                payload: self.payload.len(),
                capacity: self.payload_capacity(),
            });
        }

        let padding = prg_rom_len - self.payload.len() - INTERRUPT_VECTORS_SIZE;
        let mut prg_rom = Vec::with_capacity(prg_rom_len);
        prg_rom.extend_from_slice(&self.payload);
        prg_rom.extend(iter::repeat(0x00).take(padding));
        prg_rom.extend_from_slice(&self.vectors.to_bytes());

        Ok(prg_rom)
    }

    /// Produces the complete image: header, PRG ROM, then blank CHR ROM.
    pub fn write(&self) -> Result<Vec<u8>> {
        let prg_rom = self.prg_rom()?;
        let chr_rom_len = self.chr_rom_banks as usize * CHR_ROM_PAGE_SIZE;

        let mut image = Vec::with_capacity(HEADER_SIZE + prg_rom.len() + chr_rom_len);
        image.extend_from_slice(&build_header(self.prg_rom_banks, self.chr_rom_banks));
        image.extend_from_slice(&prg_rom);
        image.resize(image.len() + chr_rom_len, 0x00);

        debug!(
            "wrote {} byte image: {} x 16 KB prg rom, {} x 8 KB chr rom, {} byte payload",
            image.len(),
            self.prg_rom_banks,
            self.chr_rom_banks,
            self.payload.len()
        );

        Ok(image)
    }
}

impl Default for RomWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a mapper 0 image around `payload` with the default interrupt vectors.
pub fn write(prg_rom_banks: u8, chr_rom_banks: u8, payload: &[u8]) -> Result<Vec<u8>> {
    RomWriter::new()
        .banks(prg_rom_banks, chr_rom_banks)
        .payload(payload)
        .write()
}
