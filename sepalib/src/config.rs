//! Настройки сборки документа. Читаются из YAML, флаги CLI их перекрывают.
//!
//! ```yaml
//! control_sum: recomputed   # trusted | recomputed
//! indent: 2
//! ```

use crate::error::{Result, SepaError};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Откуда берётся CtrlSum в GrpHdr и PmtInf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlSumPolicy {
    /// Итог вызывающего как есть, без сверки с платежами.
    #[default]
    Trusted,
    /// Арифметическая сумма платежей.
    Recomputed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildOptions {
    pub control_sum: ControlSumPolicy,
    /// Ширина отступа в выходном XML, 0 — одной строкой.
    pub indent: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            control_sum: ControlSumPolicy::Trusted,
            indent: 2,
        }
    }
}

impl BuildOptions {
    pub fn from_reader<R: Read>(r: R) -> Result<Self> {
        serde_yaml::from_reader(r).map_err(|e| SepaError::Config(e.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| SepaError::Config(format!("{}: {e}", path.display())))?;
        Self::from_reader(file)
    }
}
