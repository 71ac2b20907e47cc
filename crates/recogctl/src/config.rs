//! Run configuration resolved from CLI flags with interactive
//! fallbacks for anything the flags left out.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_DELAY_SECS: u64 = 1;

/// Everything one run needs, resolved up front and passed down
/// explicitly.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_file: PathBuf,
    pub platform_url: String,
    pub odin_id: String,
    pub bot_name: Option<String>,
    pub delay_secs: u64,
}

impl RunConfig {
    pub fn resolve(
        input_file: Option<PathBuf>,
        platform_url: Option<String>,
        odin_id: Option<String>,
        bot_name: Option<String>,
        delay: Option<u64>,
    ) -> Result<Self> {
        let input_file = match input_file {
            Some(path) => path,
            None => PathBuf::from(prompt("Provide path to input csv file")?),
        };
        let platform_url = match platform_url {
            Some(url) => url,
            None => prompt("Provide platform url")?,
        };
        let odin_id = match odin_id {
            Some(id) => id,
            None => prompt("Provide bot odin id")?,
        };

        Ok(Self {
            input_file,
            platform_url,
            odin_id,
            bot_name: bot_name.filter(|name| !name.is_empty()),
            delay_secs: delay.unwrap_or(DEFAULT_DELAY_SECS),
        })
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{}: ", message);
    io::stdout().flush().context("Failed to flush stdout")?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}
