//! Inspection of existing interface declarations.
//!
//! Pure text helpers; directory scanning lives in
//! `application::services::facade_resolver`.

use serde::Serialize;
use std::path::PathBuf;

use super::naming::to_pascal_case;

const FACADE_SUFFIX: &str = "Facade";
const CONFIG_SUFFIX: &str = "config";

/// An existing interface file that already declares the route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacadeMatch {
    pub file_path: PathBuf,
    /// `None` when the file has no package statement.
    pub namespace: Option<String>,
    pub type_name: String,
}

impl FacadeMatch {
    /// Type name with a trailing `Facade` removed.
    pub fn base_name(&self) -> &str {
        self.type_name
            .strip_suffix(FACADE_SUFFIX)
            .unwrap_or(&self.type_name)
    }
}

/// Outcome of looking for an interface that owns a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum FacadeResolution {
    Matched(FacadeMatch),
    NotFound,
}

impl FacadeResolution {
    pub fn matched(&self) -> Option<&FacadeMatch> {
        match self {
            Self::Matched(m) => Some(m),
            Self::NotFound => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }
}

/// Annotation literal that binds a route.
pub fn route_annotation(route_path: &str) -> String {
    format!("@Path(\"{route_path}\")")
}

/// Exact literal match, no normalisation of slashes or case.
pub fn declares_route(content: &str, route_path: &str) -> bool {
    content.contains(&route_annotation(route_path))
}

/// Namespace from the first line starting with `package `, without the
/// terminating `;`.
pub fn extract_package(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let rest = line.trim().strip_prefix("package ")?;
        let rest = rest.trim();
        Some(rest.strip_suffix(';').unwrap_or(rest).trim().to_string())
    })
}

/// Base name for a route with no existing interface: a trailing lower-case
/// `config` is dropped before Pascal-casing.
pub fn synthesized_base_name(route_path: &str) -> String {
    let stem = route_path.strip_suffix(CONFIG_SUFFIX).unwrap_or(route_path);
    to_pascal_case(stem)
}

pub fn interface_name_for(base_name: &str) -> String {
    format!("{base_name}{FACADE_SUFFIX}")
}
