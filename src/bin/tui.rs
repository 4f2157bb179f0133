use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    colormind::tui::run().await
}
