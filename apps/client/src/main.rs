#[tokio::main]
async fn main() -> anyhow::Result<()> {
    flashquiz_client::run().await
}
