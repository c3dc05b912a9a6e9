use crate::error::{Error, Result};
use crate::rom::model::*;
use nom::{
    IResult,
    bytes::complete::take,
    number::complete::be_u8,
};
use tracing::{trace, warn};

bitflags! {
    struct Flags6: u8 {
        const VERTICAL_MIRRORING = 1 as u8;
        const TRAINER_EXISTS = (1 << 2) as u8;
    }
}

impl Flags6 {
    fn mirroring(self) -> Mirroring {
        if self.contains(Flags6::VERTICAL_MIRRORING) {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        }
    }
}

bitflags! {
    struct Flags9: u8 {
        const PAL = 1 as u8;
    }
}

impl Flags9 {
    fn region(self) -> Region {
        // Bit 0 clear is NTSC. Some dumps in the wild disagree with emulators here, but the
        // header is taken at its word.
        if self.contains(Flags9::PAL) {
            Region::PAL
        } else {
            Region::NTSC
        }
    }
}

/// Assembles the mapper number from flags 6 and flags 7.
///
/// The low nibble of the mapper number lives in the high nibble of flags 6, and the high nibble
/// of the mapper number lives in the high nibble of flags 7. The low nibbles of both flag bytes
/// carry unrelated bits and are discarded.
pub fn mapper_number(flags6: u8, flags7: u8) -> u8 {
    (flags6 >> 4) | (flags7 & 0xF0)
}

fn ines_header(input: &[u8]) -> IResult<&[u8], HeaderFields> {
    let (i, magic) = take(MAGIC.len())(input)?;
    let (i, prg_rom_banks) = be_u8(i)?;
    let (i, chr_rom_banks) = be_u8(i)?;
    let (i, flags6) = be_u8(i)?;
    let (i, flags7) = be_u8(i)?;
    let (i, prg_ram_banks) = be_u8(i)?;
    let (i, flags9) = be_u8(i)?;

    // Bytes 10-15 are either iNES 2.0 extensions or ripper signatures. Neither is read.
    let (i, _) = take(HEADER_SIZE - 10)(i)?;

    let known_flags6 = Flags6::from_bits_truncate(flags6);

    Ok((i, HeaderFields {
        magic_valid: magic == &MAGIC[..],
        prg_rom_banks,
        chr_rom_banks,
        mirroring: known_flags6.mirroring(),
        has_trainer: known_flags6.contains(Flags6::TRAINER_EXISTS),
        mapper_number: mapper_number(flags6, flags7),
        prg_ram_banks,
        region: Flags9::from_bits_truncate(flags9).region(),
    }))
}

/// Interprets the first 16 bytes of `bytes` as an iNES header.
///
/// Anything past byte 16 is ignored. A bad magic number is reported through
/// `HeaderFields::magic_valid` rather than as an error.
pub fn parse_header(bytes: &[u8]) -> Result<HeaderFields> {
    let truncated = Error::TruncatedInput {
        expected: HEADER_SIZE,
        actual: bytes.len(),
    };
    if bytes.len() < HEADER_SIZE {
        return Err(truncated);
    }

    let (_, fields) = ines_header(&bytes[..HEADER_SIZE]).map_err(|_| truncated)?;
    if !fields.magic_valid {
        warn!("invalid nes magic number: {:02X?}", &bytes[..MAGIC.len()]);
    }
    trace!("parsed header {:?}", fields);

    Ok(fields)
}

/// Produces a header for a mapper 0 cartridge with the given page counts.
///
/// All other flags are left clear: horizontal mirroring, no trainer, no PRG RAM, NTSC.
pub fn build_header(prg_rom_banks: u8, chr_rom_banks: u8) -> [u8; HEADER_SIZE] {
    let mut header = [0u8; HEADER_SIZE];
    header[..MAGIC.len()].copy_from_slice(&MAGIC);
    header[4] = prg_rom_banks;
    header[5] = chr_rom_banks;
    header
}
