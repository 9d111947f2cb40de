use crate::measurement::{parse_number, Tokens};
use crate::ErrorBox;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

pub mod app;
pub mod file;

const CONFIG_ENV: &str = "ABTRACK_CONFIG";
const DEFAULT_LOOKAHEAD: f64 = 5.0;
const DEFAULT_INPUT: &str = "measurements.txt";
const DEFAULT_OUTPUT: &str = "tracker_output.csv";

pub fn load() -> Result<app::Config, ErrorBox> {
    let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let file_config = read(explicit.as_deref())?;

    // one token stream for both prompts, "0.5 0.1" on a single line answers both
    let mut answers = Tokens::new(io::stdin().lock());
    parse(&file_config, |name| ask(name, &mut answers, &mut io::stdout()))
}

/// Config file content: the explicit file if given, which then must exist, else the user's
/// XDG config, else the bundled default.
fn read(explicit: Option<&Path>) -> Result<String, ErrorBox> {
    if let Some(path) = explicit {
        log::debug!("Reading config from {}", path.display());
        return fs::read_to_string(path)
            .map_err(|e| format!("Unable to read '{}': {e}", path.display()).into());
    }

    Ok(xdg::BaseDirectories::with_prefix("abtrack")
        .ok()
        .and_then(|dirs| dirs.find_config_file("config.toml"))
        .and_then(|path| fs::read_to_string(path).ok())
        .unwrap_or_else(|| include_str!("../../config.toml").to_string()))
}

/// Parses the TOML config, asking for any gain the file leaves out.
pub fn parse<F>(content: &str, mut ask_gain: F) -> Result<app::Config, ErrorBox>
where
    F: FnMut(&str) -> Result<f64, ErrorBox>,
{
    let cfg: file::Config = toml::from_str(content)?;

    let mut gain = |value: Option<f64>, name: &str| -> Result<f64, ErrorBox> {
        let value = match value {
            Some(value) => value,
            None => ask_gain(name)?,
        };

        if !(0.0..=1.0).contains(&value) {
            log::warn!("Gain {name} = {value} is outside of [0, 1], the filter may diverge");
        }

        Ok(value)
    };

    let alpha = gain(cfg.tracker.alpha, "alpha")?;
    let beta = gain(cfg.tracker.beta, "beta")?;

    Ok(app::Config {
        tracker: app::Tracker {
            alpha,
            beta,
            lookahead: cfg.tracker.lookahead.unwrap_or(DEFAULT_LOOKAHEAD),
        },
        input: cfg.input.path.unwrap_or_else(|| DEFAULT_INPUT.into()).into(),
        output: cfg.output.path.unwrap_or_else(|| DEFAULT_OUTPUT.into()).into(),
    })
}

fn ask<R: BufRead, W: Write>(
    name: &str,
    answers: &mut Tokens<R>,
    output: &mut W,
) -> Result<f64, ErrorBox> {
    write!(output, "{name}: ")?;
    output.flush()?;

    let Some(token) = answers.next_token()? else {
        return Err(format!("No value given for {name}").into());
    };

    parse_number(&token).ok_or_else(|| {
        format!("Invalid {name} '{}'", String::from_utf8_lossy(&token)).into()
    })
}
