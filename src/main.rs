#[tokio::main]
async fn main() -> Result<(), vaidya::StartupError> {
    vaidya::run().await
}
