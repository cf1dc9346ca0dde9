use crate::config::{BodyVariant, Config};
use http::header::{CONTENT_TYPE, HeaderValue};
use http::{Request, Response};
use http_body_util::Full;
use hyper::body::Bytes;
use tracing::info;

/// Answers every request with the same JSON document.
///
/// The body is rendered once when the greeting is built, so the port it
/// carries is the one the server was started with.
#[derive(Debug, Clone)]
pub struct Greeting {
    body: Bytes,
}

impl Greeting {
    pub fn new(config: &Config) -> Self {
        let body = match config.variant {
            BodyVariant::Fixed => "{\"msg\": \"Hello World\"}\n".to_string(),
            BodyVariant::WithPort => {
                format!("{{\"msg\": \"Hello World\", \"port\": \"{}\"}}\n", config.port)
            }
        };

        Self {
            body: Bytes::from(body),
        }
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Builds the 200 response. Method, headers and body of `req` are ignored.
    pub fn respond<B>(&self, _req: &Request<B>) -> Response<Full<Bytes>> {
        let mut res = Response::new(Full::new(self.body.clone()));
        res.headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        res
    }

    /// Logs the request target, then responds.
    pub fn handle<B>(&self, req: &Request<B>) -> Response<Full<Bytes>> {
        info!("request from {}", req.uri());
        self.respond(req)
    }
}
