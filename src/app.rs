//! The fix operation: load, substitute, save, confirm

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::{config::FixConfig, document::Document, prd_fixes::PRD_FIXES};

/// Printed once the document has been written back
pub const CONFIRMATION: &str = "✅ PRD.md 格式已修复！";

/// Outcome of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixReport {
    /// Document that was rewritten
    pub path: PathBuf,
    /// Whether any substitution changed the content
    pub changed: bool,
}

/// Application state
pub struct FixApp {
    /// Application configuration
    pub config: FixConfig,
}

impl FixApp {
    pub fn new(config: FixConfig) -> Self {
        Self { config }
    }

    /// Fix the configured document in place and write the confirmation to `out`
    pub fn run(&self, out: &mut impl Write) -> Result<FixReport> {
        let path = &self.config.document_path;

        let mut doc = Document::open(path)?;
        doc.apply(PRD_FIXES);
        if !doc.modified {
            tracing::info!("No known formatting issues found in {}", path.display());
        }
        doc.save()?;

        writeln!(out, "{}", CONFIRMATION).context("Failed to write confirmation")?;

        Ok(FixReport {
            path: doc.path,
            changed: doc.modified,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_for(path: PathBuf) -> FixApp {
        FixApp::new(FixConfig {
            document_path: path,
        })
    }

    #[test]
    fn test_run_fixes_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("PRD.md");
        std::fs::write(&path, "#### 2.4 敌人系统\n\n#### 2.4 敌人系统\n||| 蝙蝠 | 1 |\n").unwrap();

        let mut out = Vec::new();
        let report = app_for(path.clone()).run(&mut out).unwrap();

        assert!(report.changed);
        assert_eq!(report.path, path);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "#### 2.4 敌人系统\n|| 蝙蝠 | 1 |\n"
        );
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", CONFIRMATION));
    }

    #[test]
    fn test_run_on_clean_document_still_confirms() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("PRD.md");
        let clean = "# 功夫大师\n\n| 怪物 | 生命值 |\n";
        std::fs::write(&path, clean).unwrap();

        let mut out = Vec::new();
        let report = app_for(path.clone()).run(&mut out).unwrap();

        assert!(!report.changed);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), clean);
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", CONFIRMATION));
    }

    #[test]
    fn test_run_missing_document_fails_without_confirmation() {
        let dir = tempfile::tempdir().unwrap();

        let mut out = Vec::new();
        let result = app_for(dir.path().join("PRD.md")).run(&mut out);

        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
