use anyhow::{Context, Result};
use hello_json::BodyVariant;

#[tokio::main]
async fn main() -> Result<()> {
    hello_json::init_tracing();

    hello_json::run(BodyVariant::Fixed)
        .await
        .context("hello-json-fixed failed to start")
}
