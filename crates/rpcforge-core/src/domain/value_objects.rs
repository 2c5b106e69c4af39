//! Domain value objects: ArtifactKind and DuplicatePolicy.
//!
//! # Design
//!
//! Pure value types: `Copy` and compared by value.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ArtifactKind ─────────────────────────────────────────────────────────────

/// One kind of source artifact touched by a scaffolding run.
///
/// The first eight kinds are always rendered as fresh files. The remaining
/// kinds either patch an existing hand-written file or, for the interface
/// and implementation, fall back to a fresh file when none exists yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    RequestDto,
    ResponseDto,
    RequestVo,
    ResponseVo,
    Validator,
    Mapper,
    Converter,
    Manager,
    Interface,
    Implementation,
    Constants,
    ServiceRegistration,
}

impl ArtifactKind {
    /// Kinds that are always generated from a template into a new file.
    pub const NEW_FILE_KINDS: [Self; 8] = [
        Self::RequestDto,
        Self::ResponseDto,
        Self::RequestVo,
        Self::ResponseVo,
        Self::Validator,
        Self::Mapper,
        Self::Converter,
        Self::Manager,
    ];

    pub const ALL: [Self; 12] = [
        Self::RequestDto,
        Self::ResponseDto,
        Self::RequestVo,
        Self::ResponseVo,
        Self::Validator,
        Self::Mapper,
        Self::Converter,
        Self::Manager,
        Self::Interface,
        Self::Implementation,
        Self::Constants,
        Self::ServiceRegistration,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RequestDto => "request-dto",
            Self::ResponseDto => "response-dto",
            Self::RequestVo => "request-vo",
            Self::ResponseVo => "response-vo",
            Self::Validator => "validator",
            Self::Mapper => "mapper",
            Self::Converter => "converter",
            Self::Manager => "manager",
            Self::Interface => "interface",
            Self::Implementation => "implementation",
            Self::Constants => "constants",
            Self::ServiceRegistration => "service-registration",
        }
    }

    /// Template used when this kind is written as a fresh file.
    ///
    /// `None` for kinds that are only ever patched.
    pub const fn template_id(&self) -> Option<&'static str> {
        match self {
            Self::RequestDto => Some("requestDTO"),
            Self::ResponseDto => Some("responseDTO"),
            Self::RequestVo => Some("requestVO"),
            Self::ResponseVo => Some("responseVO"),
            Self::Validator => Some("validator"),
            Self::Mapper => Some("facadeMapper"),
            Self::Converter => Some("converter"),
            Self::Manager => Some("manager"),
            Self::Interface => Some("facade"),
            Self::Implementation => Some("facadeImpl"),
            Self::Constants | Self::ServiceRegistration => None,
        }
    }

    pub const fn is_new_file(&self) -> bool {
        matches!(
            self,
            Self::RequestDto
                | Self::ResponseDto
                | Self::RequestVo
                | Self::ResponseVo
                | Self::Validator
                | Self::Mapper
                | Self::Converter
                | Self::Manager
        )
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| DomainError::UnknownArtifactKind(s.to_string()))
    }
}

// ── DuplicatePolicy ──────────────────────────────────────────────────────────

/// What to do when a patched file already declares the member being added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Leave the file untouched and report the step as skipped.
    #[default]
    Skip,
    /// Append the declaration again, producing a duplicate member.
    Append,
    /// Abort the patch with a structural error.
    Reject,
}

impl DuplicatePolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Skip => "skip",
            Self::Append => "append",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DuplicatePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "append" => Ok(Self::Append),
            "reject" | "error" => Ok(Self::Reject),
            other => Err(DomainError::UnknownDuplicatePolicy(other.to_string())),
        }
    }
}
