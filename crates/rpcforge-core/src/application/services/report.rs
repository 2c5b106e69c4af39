//! Per-run outcome report.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use uuid::Uuid;

use crate::domain::{ArtifactKind, MethodSpecification};

/// What happened to one artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "kebab-case")]
pub enum ArtifactOutcome {
    Created,
    Patched,
    Skipped(String),
    Failed(String),
}

impl ArtifactOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Patched => "patched",
            Self::Skipped(_) => "skipped",
            Self::Failed(_) => "failed",
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Skipped(reason) | Self::Failed(reason) => Some(reason),
            Self::Created | Self::Patched => None,
        }
    }
}

impl fmt::Display for ArtifactOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason() {
            Some(reason) => write!(f, "{} ({reason})", self.label()),
            None => f.write_str(self.label()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactReport {
    pub kind: ArtifactKind,
    /// Relative to the run root.
    pub path: PathBuf,
    pub outcome: ArtifactOutcome,
}

/// Aggregated outcome of one scaffolding run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub spec: MethodSpecification,
    pub interface_name: String,
    pub interface_matched: bool,
    pub dry_run: bool,
    pub artifacts: Vec<ArtifactReport>,
}

impl RunReport {
    pub fn new(spec: MethodSpecification, interface_name: String, interface_matched: bool, dry_run: bool) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            spec,
            interface_name,
            interface_matched,
            dry_run,
            artifacts: Vec::new(),
        }
    }

    pub fn record(&mut self, kind: ArtifactKind, path: impl Into<PathBuf>, outcome: ArtifactOutcome) {
        self.artifacts.push(ArtifactReport {
            kind,
            path: path.into(),
            outcome,
        });
    }

    pub fn outcome_of(&self, kind: ArtifactKind) -> Option<&ArtifactOutcome> {
        self.artifacts
            .iter()
            .find(|a| a.kind == kind)
            .map(|a| &a.outcome)
    }

    fn count(&self, label: &str) -> usize {
        self.artifacts
            .iter()
            .filter(|a| a.outcome.label() == label)
            .count()
    }

    pub fn created(&self) -> usize {
        self.count("created")
    }

    pub fn patched(&self) -> usize {
        self.count("patched")
    }

    pub fn skipped(&self) -> usize {
        self.count("skipped")
    }

    pub fn failed(&self) -> usize {
        self.count("failed")
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_outcome() {
        let spec = MethodSpecification::new("p", "r", "m", "a").unwrap();
        let mut report = RunReport::new(spec, "RFacade".into(), false, false);
        report.record(ArtifactKind::RequestDto, "a", ArtifactOutcome::Created);
        report.record(ArtifactKind::ResponseDto, "b", ArtifactOutcome::Failed("no template".into()));
        report.record(ArtifactKind::Constants, "c", ArtifactOutcome::Skipped("absent".into()));

        assert_eq!(report.created(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.patched(), 0);
        assert!(report.has_failures());
        assert_eq!(
            report.outcome_of(ArtifactKind::ResponseDto).map(ToString::to_string),
            Some("failed (no template)".into())
        );
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let json = serde_json::to_string(&ArtifactOutcome::Skipped("exists".into())).unwrap();
        assert_eq!(json, r#"{"status":"skipped","reason":"exists"}"#);
        let json = serde_json::to_string(&ArtifactOutcome::Created).unwrap();
        assert_eq!(json, r#"{"status":"created"}"#);
    }
}
