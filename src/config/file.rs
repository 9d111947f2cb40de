use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Tracker {
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    pub lookahead: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Input {
    pub path: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Output {
    pub path: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub tracker: Tracker,
    pub input: Input,
    pub output: Output,
}
