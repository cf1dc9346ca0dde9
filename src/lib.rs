//! A tiny HTTP/1.1 server that answers every request with the same JSON
//! document and logs the requested path.

pub mod config;
pub mod error;
pub mod handler;
pub mod logging;
pub mod server;

pub use config::{BodyVariant, Config, Port};
pub use error::{Error, Result};
pub use handler::Greeting;
pub use server::Server;

pub use logging::init as init_tracing;

/// Reads the port from the process arguments, binds and serves forever.
pub async fn run(variant: BodyVariant) -> Result<()> {
    let config = Config::from_args(std::env::args(), variant)?;
    let server = Server::bind(config).await?;
    server.run().await;
    Ok(())
}
