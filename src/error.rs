use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while reading or synthesizing an iNES image.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// The buffer ends before the header, trainer, PRG ROM or CHR ROM it describes.
    #[error("truncated rom image (expected at least {expected} bytes, found {actual})")]
    TruncatedInput { expected: usize, actual: usize },
    /// The payload leaves no room for the interrupt vector table at the end of PRG ROM.
    #[error("payload of {payload} bytes does not fit in {capacity} bytes of PRG ROM")]
    PayloadTooLarge { payload: usize, capacity: usize },
}
