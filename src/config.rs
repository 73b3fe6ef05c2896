use crate::error::{ReadinessError, Result};
use crate::types::config::ReadinessConfig;
use std::path::{Path, PathBuf};
use toml::{Table, Value};
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "readiness.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".readiness/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/readiness/config.toml";

/// Loads `readiness.toml` from `root`, layered over the user's global file
/// and under `.readiness/local.toml`. Returns `None` when the project file is
/// absent; the other layers alone never form a config.
pub fn load_config(root: &Path) -> Result<Option<ReadinessConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<ReadinessConfig>> {
    let project = root.join(DEFAULT_CONFIG_FILE);
    if !project.is_file() {
        debug!(path = %project.display(), "no project config");
        return Ok(None);
    }

    let layers = global_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain([project, root.join(DEFAULT_LOCAL_FILE)])
        .filter(|path| path.is_file());

    let mut merged = Table::new();
    for path in layers {
        debug!(path = %path.display(), "applying config layer");
        overlay(&mut merged, read_layer(&path)?);
    }

    let cfg: ReadinessConfig = Value::Table(merged)
        .try_into()
        .map_err(|e: toml::de::Error| ReadinessError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn read_layer(path: &Path) -> Result<Table> {
    let content = std::fs::read_to_string(path)?;
    content
        .parse::<Table>()
        .map_err(|e| ReadinessError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Applies `layer` on top of `base`. Sub-tables such as `[store]` merge key
/// by key; any other value, arrays included, replaces the lower layer's.
fn overlay(base: &mut Table, layer: Table) {
    for (key, value) in layer {
        match value {
            Value::Table(upper) => match base.get_mut(&key) {
                Some(Value::Table(lower)) => overlay(lower, upper),
                _ => {
                    base.insert(key, Value::Table(upper));
                }
            },
            value => {
                base.insert(key, value);
            }
        }
    }
}
