use std::{env, path::PathBuf};

use anyhow::{Result, anyhow};

pub const DEFAULT_CONFIG_PATH: &str = "./pcbuild.jsonc";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` was given; the file must exist.
    Explicit(PathBuf),
    /// Default location; defaults apply when the file is absent.
    Default(PathBuf),
}

pub fn config_source_from_args() -> Result<ConfigSource> {
    parse_config_source(env::args().skip(1))
}

fn parse_config_source<I>(mut args: I) -> Result<ConfigSource>
where
    I: Iterator<Item = String>,
{
    let mut config_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("missing value for --config"))?;
                config_path = Some(PathBuf::from(value));
            }
            other => {
                return Err(anyhow!(
                    "unknown argument: {other}. usage: pcbuild [--config <path>]"
                ));
            }
        }
    }

    Ok(match config_path {
        Some(path) => ConfigSource::Explicit(path),
        None => ConfigSource::Default(PathBuf::from(DEFAULT_CONFIG_PATH)),
    })
}
