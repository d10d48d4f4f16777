use crate::Result;
use crate::evaluation::EvaluationStrategyConfig;
use crate::indicators::SumPolicy;
use crate::metrics::MetricType;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

const LOG_TARGET: &str = "    config";

/// File names looked up under the project root, in order.
const CONFIG_FILE_NAMES: [&str; 4] = ["lca.toml", "lca.yml", "lca.yaml", "lca.json"];

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How per-unit factors are turned into absolute values
    #[serde(default)]
    pub evaluation: EvaluationStrategyConfig,

    /// How sums treat modules reported by only some of the summed results
    #[serde(default)]
    pub sum_policy: SumPolicy,

    /// Metric types to evaluate; empty means all
    #[serde(default)]
    pub metric_filter: Vec<MetricType>,
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, the first of `lca.toml`, `lca.yml`, `lca.yaml` and `lca.json`
    /// found under `root` is used.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated
    pub fn load(root: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let mut found = None;
            for name in CONFIG_FILE_NAMES {
                let path = root.join(name);
                match fs::read_to_string(&path) {
                    Ok(text) => {
                        found = Some((path, text));
                        break;
                    }
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e).into_app_err_with(|| format!("reading configuration file '{path}'")),
                }
            }

            let Some(found) = found else {
                return Ok(Self::default());
            };
            found
        };

        let config = Self::parse(&final_path, &text)?;
        config
            .validate()
            .map_err(|e| app_err!("invalid configuration file '{final_path}': {e}"))?;

        Ok(config)
    }

    fn parse(path: &Utf8Path, text: &str) -> Result<Self> {
        let extension = path.extension().unwrap_or_default();
        let config = match extension {
            "toml" => toml::from_str(text).into_app_err_with(|| format!("parsing TOML configuration file '{path}'"))?,
            "yml" | "yaml" => serde_yaml::from_str(text).into_app_err_with(|| format!("parsing YAML configuration file '{path}'"))?,
            "json" => serde_json::from_str(text).into_app_err_with(|| format!("parsing JSON configuration file '{path}'"))?,
            _ => return Err(app_err!("unsupported configuration file extension: '{extension}'")),
        };
        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if allocation parameters are negative or not finite
    pub fn validate(&self) -> Result<()> {
        self.evaluation.validate()?;

        if let Some(duplicate) = self
            .metric_filter
            .iter()
            .enumerate()
            .find_map(|(i, metric_type)| self.metric_filter[..i].contains(metric_type).then_some(metric_type))
        {
            log::warn!(target: LOG_TARGET, "{duplicate} is listed more than once in metric_filter");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            evaluation: EvaluationStrategyConfig::Default,
            sum_policy: SumPolicy::IntersectionOnly,
            metric_filter: Vec::new(),
        }
    }
}
