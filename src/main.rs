#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout belongs to the menu.
    env_logger::init();

    linbar::run::run(None).await
}
