//! Blue/green release demo service.
//!
//! Reports `APP_COLOR` and `APP_VERSION` from `/health` and `/` so a traffic
//! switch between environments can be observed.

use release_demo::{cli, Variant};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    cli::run(Variant::BlueGreen).await?;
    Ok(())
}
