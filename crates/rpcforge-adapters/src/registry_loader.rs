//! TOML project registry loader.
//!
//! Reads `[projects.<id>]` tables:
//!
//! ```toml
//! [projects.refundcore]
//! constants_type = "com.acme.refundcore.biz.constants.RefundServiceConstants"
//! constants_file = "app/biz/src/main/java/com/acme/refundcore/biz/constants/RefundServiceConstants.java"
//! service_proxy  = "com.acme.refundcore.facade.RefundServiceProxy"
//! core_proxy     = "com.acme.refundcore.biz.gateway.RefundCoreProxyService"
//! ```
//!
//! Missing keys default to blank. Other top-level tables are ignored, so the
//! same file can be the application config.

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;
use tracing::{debug, instrument};

use rpcforge_core::{
    domain::{ProjectDescriptor, ProjectRegistry},
    error::{ForgeError, ForgeResult},
};

#[derive(Debug, Default, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    projects: BTreeMap<String, ProjectDescriptor>,
}

/// Build a registry from TOML text.
pub fn parse_registry(text: &str) -> ForgeResult<ProjectRegistry> {
    let file: RegistryFile = toml::from_str(text)
        .map_err(|e| ForgeError::configuration(format!("invalid project registry: {e}")))?;
    Ok(into_registry(file.projects))
}

/// Build a registry from a TOML file.
#[instrument(fields(path = %path.display()))]
pub fn load_registry(path: &Path) -> ForgeResult<ProjectRegistry> {
    let text = fs::read_to_string(path).map_err(|e| {
        ForgeError::configuration(format!(
            "cannot read project registry {}: {e}",
            path.display()
        ))
    })?;
    let registry = parse_registry(&text)?;
    debug!(count = registry.len(), "loaded project registry");
    Ok(registry)
}

/// Attach each table key as the descriptor's `project_id`.
pub fn into_registry(projects: BTreeMap<String, ProjectDescriptor>) -> ProjectRegistry {
    projects
        .into_iter()
        .map(|(id, mut descriptor)| {
            descriptor.project_id = id;
            descriptor
        })
        .collect()
}
