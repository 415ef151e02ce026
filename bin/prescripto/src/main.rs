#[tokio::main]
async fn main() -> eyre::Result<()> {
    prescripto::run().await
}
