use anyhow::{bail, Context, Result};
use inesrom::{hex_dump, Cartridge, RomWriter};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

const USAGE: &str = "usage:
    inesrom inspect <rom> [preview-bytes]
    inesrom generate <rom> [prg-banks] [chr-banks]";

const DEFAULT_PREVIEW_BYTES: usize = 64;

#[derive(PartialEq, Debug)]
enum Command {
    Inspect {
        path: PathBuf,
        preview: usize,
    },
    Generate {
        path: PathBuf,
        prg_rom_banks: u8,
        chr_rom_banks: u8,
    },
}

impl Command {
    /// Parses everything after the program name.
    fn from_args(args: &[String]) -> Result<Command> {
        let (command, path) = match (args.get(0), args.get(1)) {
            (Some(command), Some(path)) => (command.as_str(), PathBuf::from(path)),
            _ => bail!("missing arguments\n{}", USAGE),
        };

        match command {
            "inspect" => Ok(Command::Inspect {
                path,
                preview: arg_or(args.get(2), DEFAULT_PREVIEW_BYTES, "preview size")?,
            }),
            "generate" => Ok(Command::Generate {
                path,
                prg_rom_banks: arg_or(args.get(2), 2, "prg bank count")?,
                chr_rom_banks: arg_or(args.get(3), 1, "chr bank count")?,
            }),
            other => bail!("unknown command `{}`\n{}", other, USAGE),
        }
    }

    fn run(&self) -> Result<()> {
        match self {
            Command::Inspect { path, preview } => inspect(path, *preview),
            Command::Generate {
                path,
                prg_rom_banks,
                chr_rom_banks,
            } => generate(path, *prg_rom_banks, *chr_rom_banks),
        }
    }
}

fn arg_or<T: std::str::FromStr>(arg: Option<&String>, default: T, name: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match arg {
        Some(value) => value.parse().with_context(|| format!("invalid {}: {}", name, value)),
        None => Ok(default),
    }
}

fn inspect(path: &Path, preview: usize) -> Result<()> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read rom {:?}", path))?;
    let cart = Cartridge::from_bytes(&bytes).with_context(|| format!("failed to load {:?}", path))?;

    println!("{}", cart);
    println!("\nFirst {} bytes of PRG ROM:", preview);
    print!("{}", hex_dump(cart.prg_rom(), 16, Some(preview)));
    println!("\nFirst {} bytes of CHR ROM:", preview);
    print!("{}", hex_dump(cart.chr_rom(), 16, Some(preview)));

    Ok(())
}

fn generate(path: &Path, prg_rom_banks: u8, chr_rom_banks: u8) -> Result<()> {
    let image = RomWriter::new().banks(prg_rom_banks, chr_rom_banks).write()?;
    std::fs::write(path, &image).with_context(|| format!("failed to write rom {:?}", path))?;
    info!("wrote {} bytes to {:?}", image.len(), path);

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    Command::from_args(&args)?.run()
}
