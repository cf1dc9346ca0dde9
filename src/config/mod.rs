use crate::error::{Error, Result};
use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};

/// A listening port, parsed once at startup. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Port(u16);

impl Port {
    pub fn new(port: u16) -> Option<Self> {
        if port == 0 { None } else { Some(Self(port)) }
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Which body the server answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyVariant {
    /// `{"msg": "Hello World"}`
    Fixed,
    /// `{"msg": "Hello World", "port": "<port>"}`
    WithPort,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: Port,
    pub variant: BodyVariant,
}

impl Config {
    pub fn new(port: Port, variant: BodyVariant) -> Self {
        Self { port, variant }
    }

    /// Builds the config from process arguments. The first item is the
    /// program name; the port is the first positional argument after it.
    pub fn from_args<I, S>(args: I, variant: BodyVariant) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let arg = args.into_iter().nth(1).ok_or(Error::MissingPort)?;
        let port = parse_port(arg.as_ref())?;
        Ok(Self::new(port, variant))
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::LOCALHOST, self.port.get()))
    }
}

/// Parses a port with integer-prefix semantics: leading whitespace and an
/// optional sign are skipped, digits are read up to the first non-digit and
/// the rest is ignored.
pub fn parse_port(arg: &str) -> Result<Port> {
    let trimmed = arg.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return Err(Error::InvalidPort(arg.to_string()));
    }

    let out_of_range = || {
        let shown = if negative {
            format!("-{digits}")
        } else {
            digits.to_string()
        };
        Error::PortOutOfRange(shown)
    };

    if negative {
        // "-0" still parses to zero
        return Err(out_of_range());
    }

    digits
        .parse::<u16>()
        .ok()
        .and_then(Port::new)
        .ok_or_else(out_of_range)
}
