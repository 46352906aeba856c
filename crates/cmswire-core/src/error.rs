use crate::{
    client::{ClientError, ConfigError, TransportError},
    model::ModelError,
    read::ReadError,
    registry::RegistryError,
    write::WriteError,
};
use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///
/// Crate-level error; every module error folds into it unchanged.
/// Use `class()` to branch on the kind of failure without matching every
/// module variant.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl Error {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Model(_) | Self::Config(_) | Self::Client(_) => ErrorClass::Configuration,
            Self::Registry(err) => err.class(),
            Self::Write(err) => err.class(),
            Self::Read(err) => err.class(),
            Self::Transport(_) => ErrorClass::Transport,
        }
    }
}

///
/// ErrorClass
///
/// Coarse failure taxonomy.
/// Configuration errors are programming mistakes and should fail fast;
/// the others depend on data or the network.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Configuration,
    Encode,
    Decode,
    UnknownDiscriminator,
    Transport,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Configuration => "configuration",
            Self::Encode => "encode",
            Self::Decode => "decode",
            Self::UnknownDiscriminator => "unknown_discriminator",
            Self::Transport => "transport",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///
