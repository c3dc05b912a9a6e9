use crate::rom::model::*;
use std::fmt;

impl fmt::Display for Mirroring {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mirroring::Horizontal => write!(f, "Horizontal"),
            Mirroring::Vertical => write!(f, "Vertical"),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Region::NTSC => write!(f, "NTSC"),
            Region::PAL => write!(f, "PAL"),
        }
    }
}

impl fmt::Display for HeaderFields {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.magic_valid {
            writeln!(f, "- Valid NES magic number.")?;
        } else {
            writeln!(f, "- Invalid NES magic number!")?;
        }
        writeln!(
            f,
            "- PRG ROM: {} x 16 KB = {} bytes",
            self.prg_rom_banks,
            self.prg_rom_len()
        )?;
        writeln!(
            f,
            "- CHR ROM: {} x 8 KB = {} KB",
            self.chr_rom_banks,
            self.chr_rom_len() / KILOBYTE_SIZE
        )?;
        writeln!(
            f,
            "- PRG RAM: {} x 8 KB = {} KB",
            self.prg_ram_banks,
            self.prg_ram_len() / KILOBYTE_SIZE
        )?;
        writeln!(f, "- Mirroring mode: {}", self.mirroring)?;
        writeln!(f, "- Trainer: {}", if self.has_trainer { "Yes" } else { "No" })?;
        writeln!(f, "- Mapper number: {}", self.mapper_number)?;
        write!(f, "- Region: {}", self.region)
    }
}

impl fmt::Display for Cartridge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Header: {}", hex_dump(self.raw_header(), HEADER_SIZE, None).trim_end())?;
        write!(f, "{}", self.header())?;
        if let Some(vectors) = self.interrupt_vectors() {
            write!(
                f,
                "\n- Vectors: NMI ${:04X}, RESET ${:04X}, IRQ/BRK ${:04X}",
                vectors.nmi, vectors.reset, vectors.irq
            )?;
        }
        Ok(())
    }
}

/// Renders `bytes` as upper-case hex, `bytes_per_line` to a line, stopping after `limit` bytes.
///
/// Each byte is followed by a space and every full line by a newline, so the output lines up
/// with the memory viewers most emulators ship.
pub fn hex_dump(bytes: &[u8], bytes_per_line: usize, limit: Option<usize>) -> String {
    let len = limit.map_or(bytes.len(), |limit| limit.min(bytes.len()));
    let per_line = bytes_per_line.max(1);

    let mut out = String::with_capacity(len * 3 + len / per_line);
    for (i, byte) in bytes[..len].iter().enumerate() {
        out.push_str(&format!("{:02X} ", byte));
        if i % per_line == per_line - 1 {
            out.push('\n');
        }
    }
    out
}
