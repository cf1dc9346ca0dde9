use crate::config::Config;
use crate::error::{Error, Result};
use crate::handler::Greeting;
use hyper::Request;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info};

pub struct Server {
    listener: TcpListener,
    greeting: Arc<Greeting>,
}

impl Server {
    /// Binds `127.0.0.1:<port>`. Fails if the port is taken or not allowed;
    /// there is no retry and no fallback port.
    pub async fn bind(config: Config) -> Result<Self> {
        let addr = config.listen_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| Error::Bind { addr, source })?;
        info!("Server running at http://{}", addr);

        Ok(Self {
            listener,
            greeting: Arc::new(Greeting::new(&config)),
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub async fn run(self) {
        loop {
            match self.listener.accept().await {
                Ok((stream, peer_addr)) => {
                    debug!("New connection from {}", peer_addr);
                    let greeting = self.greeting.clone();

                    tokio::spawn(async move {
                        if let Err(e) = serve_connection(stream, greeting).await {
                            debug!("Connection from {} ended with error: {}", peer_addr, e);
                        }
                    });
                }
                Err(e) => {
                    error!("Failed to accept connection: {}", e);
                }
            }
        }
    }
}

async fn serve_connection(stream: TcpStream, greeting: Arc<Greeting>) -> hyper::Result<()> {
    let service = service_fn(move |req: Request<Incoming>| {
        future::ready(Ok::<_, Infallible>(greeting.handle(&req)))
    });

    http1::Builder::new()
        .keep_alive(true)
        .serve_connection(TokioIo::new(stream), service)
        .await
}
