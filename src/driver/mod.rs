use thiserror::Error;

pub mod terminal;

/// Something that presents a game to a player and feeds their actions back into it.
pub trait Driver {
    /// Play until the player quits.
    fn play(&mut self) -> Result<(), DriverError>;
}

/// Failure modes for drivers.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("terminal i/o failed")]
    Io(#[from] std::io::Error),
}
