//! CI/CD pipeline demo service.

use release_demo::{cli, Variant};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    cli::run(Variant::Pipeline).await?;
    Ok(())
}
