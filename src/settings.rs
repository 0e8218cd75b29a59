use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::elements::{PlotArea, ScaleKind, SeriesColor};
use crate::error::SettingsError;

pub const ENV_APP_ENVIRONMENT: &str = "APP_ENVIRONMENT";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotSettings {
    #[serde(default)]
    pub chart: ChartSettings,

    /// Sources in overlay order; the first is the primary series.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<SeriesSetting>,
}

/// One benchmark CSV source and how its series is tagged on the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSetting {
    pub name: String,
    pub color: SeriesColor,
    pub path: PathBuf,
}

/// Which loaded series bound the shared axis domains.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainReference {
    /// Only the first series; comparison series falling outside are drawn off-axis.
    Primary,
    All,
}

impl Default for DomainReference {
    fn default() -> Self {
        Self::Primary
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostTick {
    pub value: f64,
    pub label: String,
}

/// Right-hand axis labelling two fixed seconds values with what the run costs at that duration.
/// This is a two-point lookup, not a scale of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostAxisSetting {
    pub title: String,
    pub lower: CostTick,
    pub upper: CostTick,
}

impl CostAxisSetting {
    pub fn new(title: impl Into<String>, lower: (f64, &str), upper: (f64, &str)) -> Self {
        Self {
            title: title.into(),
            lower: CostTick { value: lower.0, label: lower.1.to_string() },
            upper: CostTick { value: upper.0, label: upper.1.to_string() },
        }
    }

    pub fn ticks(&self) -> [&CostTick; 2] {
        [&self.lower, &self.upper]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSettings {
    #[serde(default)]
    pub area: PlotArea,

    #[serde(default)]
    pub scale: ScaleKind,

    #[serde(default)]
    pub domain_reference: DomainReference,

    #[serde(default = "ChartSettings::default_dot_radius")]
    pub dot_radius: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_axis: Option<CostAxisSetting>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            area: PlotArea::default(),
            scale: ScaleKind::default(),
            domain_reference: DomainReference::default(),
            dot_radius: Self::default_dot_radius(),
            cost_axis: None,
        }
    }
}

impl ChartSettings {
    pub const fn default_dot_radius() -> f64 {
        4.
    }
}

/// Loads plot settings from the `configuration` directory under the current working directory.
/// The environment is chosen by the `APP_ENVIRONMENT` envvar, defaulting to `local`.
pub fn load_settings(explicit: Option<&Path>) -> Result<PlotSettings, SettingsError> {
    let base_path = std::env::current_dir()?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var(ENV_APP_ENVIRONMENT)
        .unwrap_or_else(|_| "local".into())
        .try_into()?;

    load_settings_from(&configuration_directory, environment, explicit)
}

/// Layers settings sources, later ones overriding earlier: `base`, then the environment file,
/// then the `explicit` file when given, then `APP_`-prefixed environment variables with `__`
/// separating nested keys (e.g. `APP_CHART__DOT_RADIUS=6`).
#[tracing::instrument(level = "debug")]
pub fn load_settings_from(
    configuration_directory: &Path, environment: Environment, explicit: Option<&Path>,
) -> Result<PlotSettings, SettingsError> {
    let mut builder = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base")).required(false))
        .add_source(config::File::from(configuration_directory.join(environment.as_ref())).required(false));

    if let Some(path) = explicit {
        builder = builder.add_source(config::File::from(path).required(true));
    }

    let settings: PlotSettings = builder
        .add_source(config::Environment::with_prefix("app").prefix_separator("_").separator("__"))
        .build()?
        .try_deserialize()?;

    tracing::info!(?settings, "plot settings loaded");
    Ok(settings)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl AsRef<str> for Environment {
    fn as_ref(&self) -> &str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = SettingsError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(SettingsError::Bootstrap {
                message: "unrecognized environment".to_string(),
                setting: format!("{}={}", ENV_APP_ENVIRONMENT, other),
            }),
        }
    }
}
