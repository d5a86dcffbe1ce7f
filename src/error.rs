use std::{io, path::PathBuf};

use eller::GeneratorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error; {0}")]
    Io(#[from] io::Error),
    #[error("Invalid settings file ({0:?}); {1}")]
    Settings(PathBuf, ron::error::SpannedError),
    #[error("Cannot serialize settings; {0}")]
    SettingsSer(#[from] ron::Error),
    #[error("Generator error; {0}")]
    Generator(#[from] GeneratorError),
    #[error("Logger error; {0}")]
    Logger(#[from] log::SetLoggerError),
}
