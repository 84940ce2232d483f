mod platform;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = platform::config::Config::from_env()?;
    bot_logging::initialize(&config.log_destination, config.log_level);
    platform::app::run(config).await
}
