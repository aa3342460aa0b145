//! The generated project's `package.json` model.
//!
//! The manifest is accumulated in memory during composition and written to
//! disk exactly once at the end of a run. `BTreeMap`s keep the serialized
//! output deterministic regardless of the order in which features recorded
//! their entries.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which dependency table an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    Runtime,
    Development,
}

/// In-memory `package.json` for the generated project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub private: bool,
    pub scripts: BTreeMap<String, String>,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
}

impl Manifest {
    /// Fresh manifest for a new project; all tables start empty.
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            name: project_name.into(),
            version: "0.1.0".into(),
            private: true,
            scripts: BTreeMap::new(),
            dependencies: BTreeMap::new(),
            dev_dependencies: BTreeMap::new(),
        }
    }

    /// Record a dependency, first write wins.
    ///
    /// The dependency set is append-only: a feature activating later in the
    /// composition order never overwrites a version already recorded by an
    /// earlier feature. Returns `true` if the entry was inserted.
    pub fn record_dependency(
        &mut self,
        kind: DependencyKind,
        package: impl Into<String>,
        version: impl Into<String>,
    ) -> bool {
        let table = match kind {
            DependencyKind::Runtime => &mut self.dependencies,
            DependencyKind::Development => &mut self.dev_dependencies,
        };
        let package = package.into();
        if table.contains_key(&package) {
            return false;
        }
        table.insert(package, version.into());
        true
    }

    /// Set (insert or replace) a script entry. Scripts are never removed.
    pub fn set_script(&mut self, name: impl Into<String>, command: impl Into<String>) {
        self.scripts.insert(name.into(), command.into());
    }

    /// Serialize as pretty-printed JSON with a trailing newline, ready to be
    /// written as `package.json`.
    pub fn to_json(&self) -> String {
        // BTreeMap-backed fields make this deterministic; serde_json cannot
        // fail on this shape.
        let mut out = serde_json::to_string_pretty(self).unwrap_or_default();
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_dependency_first_write_wins() {
        let mut m = Manifest::new("demo");
        assert!(m.record_dependency(DependencyKind::Runtime, "react", "19.0.0"));
        assert!(!m.record_dependency(DependencyKind::Runtime, "react", "latest"));
        assert_eq!(m.dependencies.get("react").map(String::as_str), Some("19.0.0"));
    }

    #[test]
    fn runtime_and_dev_tables_are_independent() {
        let mut m = Manifest::new("demo");
        m.record_dependency(DependencyKind::Runtime, "react", "19.0.0");
        m.record_dependency(DependencyKind::Development, "typescript", "5.6.0");
        assert_eq!(m.dependencies.len(), 1);
        assert_eq!(m.dev_dependencies.len(), 1);
        assert!(!m.dependencies.contains_key("typescript"));
    }

    #[test]
    fn set_script_replaces_but_never_removes() {
        let mut m = Manifest::new("demo");
        m.set_script("start", "react-scripts start");
        m.set_script("storybook", "storybook dev -p 6006");
        m.set_script("start", "react-scripts start");
        assert_eq!(m.scripts.len(), 2);
    }

    #[test]
    fn to_json_uses_camel_case_dev_dependencies() {
        let mut m = Manifest::new("demo");
        m.record_dependency(DependencyKind::Development, "typescript", "latest");
        let json = m.to_json();
        assert!(json.contains("\"devDependencies\""));
        assert!(json.contains("\"private\": true"));
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn to_json_is_deterministic_across_insertion_orders() {
        let mut a = Manifest::new("demo");
        a.record_dependency(DependencyKind::Runtime, "react", "1");
        a.record_dependency(DependencyKind::Runtime, "antd", "1");

        let mut b = Manifest::new("demo");
        b.record_dependency(DependencyKind::Runtime, "antd", "1");
        b.record_dependency(DependencyKind::Runtime, "react", "1");

        assert_eq!(a.to_json(), b.to_json());
    }
}
