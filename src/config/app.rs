use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Tracker {
    pub alpha: f64,
    pub beta: f64,
    pub lookahead: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub tracker: Tracker,
    pub input: PathBuf,
    pub output: PathBuf,
}
