use crate::output::OutputFormat;
use anyhow::{anyhow, Result};
use eventmap_core::usecases::DEFAULT_FALLBACK_TYPE;
use eventmap_entities::geo::Distance;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "eventmap.toml";

const ENV_NAME_DATASET: &str = "EVENTMAP_DATASET";

pub struct Config {
    pub dataset: Dataset,
    pub search: Search,
    pub types: Types,
    pub output: Output,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(path) = env::var(ENV_NAME_DATASET) {
            cfg.dataset.path = path.into();
        }
        Ok(cfg)
    }
}

pub struct Dataset {
    /// JSON file with the generated events dataset.
    pub path: PathBuf,
}

/// Defaults of the search criteria.
pub struct Search {
    pub radius: Distance,
    pub ongoing: bool,
    pub long_term: bool,
}

pub struct Types {
    /// JSON file with the event type hierarchy.
    pub hierarchy: Option<PathBuf>,
    pub fallback_type: String,
}

pub struct Output {
    pub format: OutputFormat,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            dataset,
            search,
            types,
            output,
        } = from;

        let raw::Dataset { path } = dataset.unwrap_or_default();
        let dataset = Dataset { path };

        let raw::Search {
            radius_km,
            ongoing,
            long_term,
        } = search.unwrap_or_default();
        if !(radius_km.is_finite() && radius_km > 0.0) {
            return Err(anyhow!("Invalid search radius: {radius_km} km"));
        }
        let search = Search {
            radius: Distance::from_kilometers(radius_km),
            ongoing,
            long_term,
        };

        let raw::Types {
            hierarchy,
            fallback_type,
        } = types.unwrap_or_default();
        let types = Types {
            hierarchy,
            fallback_type: fallback_type
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FALLBACK_TYPE.to_owned()),
        };

        let raw::Output { format } = output.unwrap_or_default();
        let output = Output { format };

        Ok(Self {
            dataset,
            search,
            types,
            output,
        })
    }
}
