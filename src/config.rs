use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ApproxError, Result};

/// Width of the three hidden layers when none is given.
pub const DEFAULT_HIDDEN_DIM: usize = 8;

/// Shape and seeding of a `HatApproxNet`.
///
/// Holds no parameters, only what is needed to construct a fresh network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApproxConfig {
    #[serde(default = "default_hidden_dim")]
    pub hidden_dim: usize,
    /// When set, parameters are drawn from a `StdRng` seeded with this value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_hidden_dim() -> usize {
    DEFAULT_HIDDEN_DIM
}

impl Default for ApproxConfig {
    fn default() -> Self {
        ApproxConfig {
            hidden_dim: DEFAULT_HIDDEN_DIM,
            seed: None,
        }
    }
}

impl ApproxConfig {
    pub fn validate(&self) -> Result<()> {
        if self.hidden_dim == 0 {
            return Err(ApproxError::InvalidHiddenDim(self.hidden_dim));
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads and validates a config previously written by `save_json` (or by hand).
    pub fn load_json(path: impl AsRef<Path>) -> Result<ApproxConfig> {
        let path = path.as_ref();
        log::trace!("loading config from {}", path.display());
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: ApproxConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}
