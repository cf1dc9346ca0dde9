use std::io;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("missing port argument")]
    MissingPort,

    #[error("invalid port {0:?}: no leading digits")]
    InvalidPort(String),

    #[error("port {0} is out of range (expected 1-65535)")]
    PortOutOfRange(String),

    #[error("failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
