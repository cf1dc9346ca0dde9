use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

/// Request and startup lines only; connection events stay at `debug`.
pub const DEFAULT_FILTER: &str = "warn,hello_json=info";

/// Plain message lines: no timestamp, level, target or color codes, so each
/// event reads exactly like `request from /foo?x=1`.
pub fn subscriber<W>(writer: W, filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .without_time()
        .with_level(false)
        .with_target(false)
        .with_ansi(false)
        .finish()
}

/// Installs the stdout subscriber. `RUST_LOG` overrides the default filter.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    subscriber(std::io::stdout, filter).init();
}

#[cfg(test)]
pub(crate) mod capture {
    use super::{DEFAULT_FILTER, subscriber};
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing::Subscriber;
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt::MakeWriter;

    /// In-memory sink for the production line format.
    #[derive(Clone, Default)]
    pub(crate) struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        pub(crate) fn subscriber(&self) -> impl Subscriber + Send + Sync + 'static {
            subscriber(self.clone(), EnvFilter::new(DEFAULT_FILTER))
        }

        pub(crate) fn raw(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }

        pub(crate) fn lines(&self) -> Vec<String> {
            self.raw().lines().map(str::to_string).collect()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }
}
