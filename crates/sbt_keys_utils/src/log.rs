use std::str::FromStr;

use fern::colors::{Color, ColoredLevelConfig};

use crate::env::get_env;

/// Crates whose records follow `CARGO_LOG_LEVEL`; everything else stays at `Warn`.
const WORKSPACE_TARGETS: [&str; 2] = ["sbt_keys_utils", "sbt_keys_rs"];

/// Install a colored `fern` logger on stderr.
///
/// Stdout is reserved for the program output (mnemonic, keys), so log records
/// never interleave with it.
pub fn setup_logger(
    levels: Option<Vec<(String, log::LevelFilter)>>,
) -> Result<(), log::SetLoggerError> {
    let colors = ColoredLevelConfig {
        trace: Color::Cyan,
        debug: Color::Magenta,
        info: Color::Green,
        warn: Color::Red,
        error: Color::BrightRed,
    };

    let cargo_log_level = parse_level(&get_env("CARGO_LOG_LEVEL", "WARN"));

    let mut dispatch = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{}[{}] {}",
                chrono::Local::now().format("[%H:%M:%S.%f]"),
                colors.color(record.level()),
                message
            ))
        })
        .chain(std::io::stderr())
        .level(log::LevelFilter::Warn);
    for target in WORKSPACE_TARGETS {
        dispatch = dispatch.level_for(target, cargo_log_level);
    }
    if let Some(bin_name) = current_bin_name() {
        dispatch = dispatch.level_for(bin_name, cargo_log_level);
    }
    if let Some(levels) = levels {
        for (module, level) in levels {
            dispatch = dispatch.level_for(module, level);
        }
    }

    dispatch.apply()?;
    Ok(())
}

fn parse_level(level: &str) -> log::LevelFilter {
    log::LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("CARGO_LOG_LEVEL {:?} invalid, using WARN", level);
        log::LevelFilter::Warn
    })
}

fn current_bin_name() -> Option<String> {
    std::env::current_exe()
        .ok()?
        .file_stem()?
        .to_str()?
        .to_owned()
        .into()
}
