#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ovrsee_pricing::server::run().await
}
