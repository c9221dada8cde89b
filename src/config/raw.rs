use crate::output::OutputFormat;
use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = include_str!("eventmap.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub dataset: Option<Dataset>,
    pub search: Option<Search>,
    pub types: Option<Types>,
    pub output: Option<Output>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Dataset {
    pub path: PathBuf,
}

impl Default for Dataset {
    fn default() -> Self {
        Config::default().dataset.expect("Dataset configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Search {
    pub radius_km: f64,
    #[serde(default)]
    pub ongoing: bool,
    #[serde(default)]
    pub long_term: bool,
}

impl Default for Search {
    fn default() -> Self {
        Config::default().search.expect("Search configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Types {
    pub hierarchy: Option<PathBuf>,
    pub fallback_type: Option<String>,
}

impl Default for Types {
    fn default() -> Self {
        Config::default().types.expect("Types configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Output {
    pub format: OutputFormat,
}

impl Default for Output {
    fn default() -> Self {
        Config::default().output.expect("Output configuration")
    }
}
