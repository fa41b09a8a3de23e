use {
    color_eyre::Report,
    eyre::WrapErr,
    geometry_lite::CameraConeParameters,
    nalgebra::{Matrix4, Vector4},
    std::path::{Path, PathBuf},
};

#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    pub transforms: Vec<TransformEntry>,

    #[serde(default)]
    pub cone: Option<ConeConfig>,
}

/// Named matrix to decompose.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct TransformEntry {
    pub name: String,

    /// Matrix columns, each one is `(x, y, z, w)`.
    pub columns: [[f32; 4]; 4],
}

impl TransformEntry {
    pub fn matrix(&self) -> Matrix4<f32> {
        Matrix4::from_columns(&[
            Vector4::from(self.columns[0]),
            Vector4::from(self.columns[1]),
            Vector4::from(self.columns[2]),
            Vector4::from(self.columns[3]),
        ])
    }
}

/// Camera cone to sample around.
#[derive(Clone, Copy, Debug, serde::Deserialize)]
pub struct ConeConfig {
    pub parameters: CameraConeParameters,

    /// Number of camera positions over full turn.
    #[serde(default = "default_steps")]
    pub steps: u32,

    #[serde(default = "default_height")]
    pub height: f32,
}

impl Config {
    pub fn load_default() -> Result<Self, Report> {
        let path = std::env::var("GEOMETRY_INSPECT_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./inspect.ron"));

        Self::load(&path)
    }

    #[tracing::instrument]
    pub fn load(path: &Path) -> Result<Self, Report> {
        let text = std::fs::read_to_string(path).wrap_err_with(|| {
            format!("Failed to read config '{}'", path.display())
        })?;

        Self::parse(&text).wrap_err_with(|| {
            format!("Failed to parse config '{}'", path.display())
        })
    }

    pub fn parse(text: &str) -> Result<Self, Report> {
        let config = ron::from_str(text)?;
        Ok(config)
    }
}

fn default_steps() -> u32 {
    8
}

fn default_height() -> f32 {
    0.5
}
