#[macro_use]
extern crate bitflags;

pub mod error;
pub mod rom;

pub use error::{Error, Result};
pub use rom::{
    header::{build_header, mapper_number, parse_header},
    model::{Cartridge, HeaderFields, InterruptVectors, Mirroring, Region},
    reader::load,
    report::hex_dump,
    writer::{write, RomWriter, DEFAULT_PAYLOAD},
};
