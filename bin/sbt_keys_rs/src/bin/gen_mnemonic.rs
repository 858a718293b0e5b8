use sbt_keys_utils::{log::setup_logger, utils::random_mnemonic_phrase};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    setup_logger(None)?;

    let phrase = random_mnemonic_phrase()?;
    log::debug!("mnemonic generated");
    println!("{}", phrase);
    Ok(())
}
