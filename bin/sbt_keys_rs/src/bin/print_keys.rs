use sbt_keys_rs::{constants::PrintKeysConfig, core::run};
use sbt_keys_utils::log::setup_logger;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    setup_logger(None)?;

    let config = PrintKeysConfig::from_env();
    let stdout = std::io::stdout();
    run(&config, &mut stdout.lock())?;
    Ok(())
}
