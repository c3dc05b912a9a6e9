use inesrom::{write, Error, RomWriter, DEFAULT_PAYLOAD};
use expectest::prelude::*;

const VECTORS: [u8; 6] = [0x00, 0x00, 0x00, 0x80, 0x00, 0x80];

// Two PRG banks end at 16 + 32768; the vector table is the last 6 bytes of that.
const PRG_ROM_END: usize = 16 + 32768;

#[test]
fn lda_jmp_payload() {
    let image = write(2, 1, &[0xA9, 0x01, 0x4C, 0x00, 0x80]).unwrap();

    expect!(image.len()).to(be_eq(40976));
    expect!(&image[0..4]).to(be_eq(&b"NES\x1A"[..]));
    expect!(image[4]).to(be_eq(2));
    expect!(image[5]).to(be_eq(1));
    expect!(image[6..16].iter().all(|&b| b == 0x00)).to(be_true());
    expect!(&image[16..21]).to(be_eq(&[0xA9, 0x01, 0x4C, 0x00, 0x80][..]));
    expect!(image[21..PRG_ROM_END - 6].iter().all(|&b| b == 0x00)).to(be_true());
    expect!(&image[PRG_ROM_END - 6..PRG_ROM_END]).to(be_eq(&VECTORS[..]));
    expect!(image[PRG_ROM_END..].iter().all(|&b| b == 0x00)).to(be_true());
}

#[test]
fn two_byte_payload_is_zero_padded() {
    let image = write(2, 1, &[0xA9, 0x01]).unwrap();

    expect!(image.len()).to(be_eq(40976));
    expect!(&image[16..18]).to(be_eq(&[0xA9, 0x01][..]));
    expect!(image[18..PRG_ROM_END - 6].iter().all(|&b| b == 0x00)).to(be_true());
    expect!(&image[PRG_ROM_END - 6..PRG_ROM_END]).to(be_eq(&VECTORS[..]));
    expect!(image[PRG_ROM_END..40976].iter().all(|&b| b == 0x00)).to(be_true());
}

#[test]
fn vectors_end_the_file_without_chr_rom() {
    let image = write(2, 0, &[0xA9, 0x01]).unwrap();

    expect!(image.len()).to(be_eq(PRG_ROM_END));
    expect!(&image[image.len() - 6..]).to(be_eq(&VECTORS[..]));
}

#[test]
fn payload_fills_prg_rom_exactly() {
    let payload = vec![0xEA; 32762];
    let image = write(2, 1, &payload).unwrap();

    expect!(image.len()).to(be_eq(40976));
    expect!(image[16..16 + 32762].iter().all(|&b| b == 0xEA)).to(be_true());
    expect!(&image[16 + 32762..PRG_ROM_END]).to(be_eq(&VECTORS[..]));
}

#[test]
fn payload_one_byte_short_of_full() {
    let image = write(2, 1, &vec![0xEA; 32761]).unwrap();

    expect!(image[16 + 32761]).to(be_eq(0x00));
    expect!(&image[16 + 32762..PRG_ROM_END]).to(be_eq(&VECTORS[..]));
}

#[test]
fn payload_overlaps_vectors() {
    let payload = vec![0xEA; 32763];

    expect!(write(2, 1, &payload).unwrap_err()).to(be_eq(Error::PayloadTooLarge {
        payload: 32763,
        capacity: 32762,
    }));
}

#[test]
fn payload_larger_than_prg_rom() {
    expect!(write(1, 1, &vec![0x00; 20000]).is_err()).to(be_true());
}

#[test]
fn defaults() {
    let writer = RomWriter::default();

    expect!(writer.prg_rom_banks).to(be_eq(2));
    expect!(writer.chr_rom_banks).to(be_eq(1));
    expect!(writer.payload.clone()).to(be_eq(DEFAULT_PAYLOAD.to_vec()));

    let image = writer.write().unwrap();
    expect!(image.clone()).to(be_eq(write(2, 1, &DEFAULT_PAYLOAD).unwrap()));
    expect!(image).to(be_eq(writer.write().unwrap()));
}
