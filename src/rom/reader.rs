use crate::error::{Error, Result};
use crate::rom::{header::parse_header, model::*};
use nom::{
    IResult,
    bytes::complete::take,
    combinator::cond,
};
use tracing::{debug, trace};

type Regions<'a> = (&'a [u8], Option<&'a [u8]>, &'a [u8], &'a [u8]);

fn cartridge_regions<'a>(input: &'a [u8], fields: &HeaderFields) -> IResult<&'a [u8], Regions<'a>> {
    let (i, header) = take(HEADER_SIZE)(input)?;
    let (i, trainer) = cond(fields.has_trainer, take(TRAINER_SIZE))(i)?;
    let (i, prg_rom) = take(fields.prg_rom_len())(i)?;
    let (i, chr_rom) = take(fields.chr_rom_len())(i)?;

    Ok((i, (header, trainer, prg_rom, chr_rom)))
}

/// Splits an iNES image into its header, trainer, PRG ROM and CHR ROM.
///
/// The buffer must be at least as long as its header says it is. Anything after CHR ROM is
/// ignored.
pub fn load(bytes: &[u8]) -> Result<Cartridge> {
    let fields = parse_header(bytes)?;

    let truncated = Error::TruncatedInput {
        expected: fields.image_len(),
        actual: bytes.len(),
    };
    if bytes.len() < fields.image_len() {
        return Err(truncated);
    }

    let (rest, (header, trainer, prg_rom, chr_rom)) =
        cartridge_regions(bytes, &fields).map_err(|_| truncated)?;

    trace!(
        "prg rom at 0x{:X}, chr rom at 0x{:X}",
        fields.prg_rom_offset(),
        fields.chr_rom_offset()
    );
    if !rest.is_empty() {
        trace!("ignoring {} trailing bytes", rest.len());
    }
    debug!(
        "loaded cartridge: mapper {}, {} x 16 KB prg rom, {} x 8 KB chr rom",
        fields.mapper_number, fields.prg_rom_banks, fields.chr_rom_banks
    );

    let mut raw_header = [0u8; HEADER_SIZE];
    raw_header.copy_from_slice(header);

    Ok(Cartridge {
        header: raw_header,
        fields,
        trainer: trainer.map(<[u8]>::to_vec),
        prg_rom: prg_rom.to_vec(),
        chr_rom: chr_rom.to_vec(),
    })
}

impl Cartridge {
    pub fn from_bytes(bytes: &[u8]) -> Result<Cartridge> {
        load(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expectest::prelude::*;

    fn image(prg_banks: u8, chr_banks: u8, flags6: u8) -> Vec<u8> {
        let mut data = vec![0x4E, 0x45, 0x53, 0x1A, prg_banks, chr_banks, flags6];
        data.resize(HEADER_SIZE, 0x00);
        if flags6 & 0b100 != 0 {
            data.extend(std::iter::repeat(0x77).take(TRAINER_SIZE));
        }
        data.extend(std::iter::repeat(0x11).take(prg_banks as usize * PRG_ROM_PAGE_SIZE));
        data.extend(std::iter::repeat(0x22).take(chr_banks as usize * CHR_ROM_PAGE_SIZE));
        data
    }

    #[test]
    fn regions() {
        let cart = load(&image(1, 2, 0x00)).unwrap();

        expect!(cart.raw_header()[4]).to(be_eq(1));
        expect!(cart.trainer().is_none()).to(be_true());
        expect!(cart.prg_rom().len()).to(be_eq(16384));
        expect!(cart.chr_rom().len()).to(be_eq(16384));
        expect!(cart.prg_rom().iter().all(|&b| b == 0x11)).to(be_true());
        expect!(cart.chr_rom().iter().all(|&b| b == 0x22)).to(be_true());
    }

    #[test]
    fn trainer_precedes_prg_rom() {
        let data = image(1, 1, 0b100);
        let cart = load(&data).unwrap();

        expect!(cart.trainer().map(|t| t.len())).to(be_eq(Some(512)));
        expect!(cart.trainer().unwrap().iter().all(|&b| b == 0x77)).to(be_true());
        expect!(cart.prg_rom()).to(be_eq(&data[528..528 + 16384]));
        expect!(cart.chr_rom()).to(be_eq(&data[528 + 16384..]));
    }

    #[test]
    fn short_chr_rom() {
        let mut data = image(1, 1, 0x00);
        data.pop();

        expect!(load(&data).unwrap_err()).to(be_eq(Error::TruncatedInput {
            expected: 16 + 16384 + 8192,
            actual: 16 + 16384 + 8192 - 1,
        }));
    }

    #[test]
    fn missing_trainer() {
        // Header claims a trainer, but the data was laid out without one.
        let mut data = image(1, 0, 0x00);
        data[6] = 0b100;

        expect!(load(&data).is_err()).to(be_true());
    }

    #[test]
    fn header_only() {
        let cart = load(&image(0, 0, 0x00)).unwrap();

        expect!(cart.prg_rom().is_empty()).to(be_true());
        expect!(cart.chr_rom().is_empty()).to(be_true());
        expect!(cart.interrupt_vectors().is_none()).to(be_true());
    }
}
