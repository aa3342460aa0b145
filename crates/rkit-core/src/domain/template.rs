//! Template trees and the render context.
//!
//! A [`TemplateTree`] is a declarative set of files and directories to be
//! emitted under a mount point. Content is always run through
//! [`RenderContext::render`]; files without placeholders pass through
//! unchanged.
//!
//! ## Built-in variables
//!
//! | Variable | Example | Source |
//! |----------|---------|--------|
//! | `PROJECT_NAME` | "my demo app" | User input |
//! | `PROJECT_NAME_KEBAB` | "my-demo-app" | Computed |
//! | `PROJECT_NAME_PASCAL` | "MyDemoApp" | Computed |

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;
use crate::domain::options::OptionSet;

// ── TemplateTreeId ───────────────────────────────────────────────────────────

/// Names the fixed set of template trees the composer can request.
///
/// Every tree a [`crate::domain::CompositionStep`] references must resolve in
/// the configured store; a miss is a fatal generation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateTreeId {
    Base,
    MuiComponents,
    AntdComponents,
    CssComponents,
    ReactQueryExamples,
    SwrExamples,
    RouterWiring,
    ReduxStore,
    JotaiStore,
    StorybookConfig,
    StorybookStories,
}

impl TemplateTreeId {
    /// Directory name used by the filesystem template store.
    pub const fn dir_name(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::MuiComponents => "components-mui",
            Self::AntdComponents => "components-antd",
            Self::CssComponents => "components-css",
            Self::ReactQueryExamples => "fetch-react-query",
            Self::SwrExamples => "fetch-swr",
            Self::RouterWiring => "router",
            Self::ReduxStore => "store-redux",
            Self::JotaiStore => "store-jotai",
            Self::StorybookConfig => "storybook-config",
            Self::StorybookStories => "storybook-stories",
        }
    }

    /// All tree ids, in composition order. Used by stores to verify
    /// completeness and by tests to iterate the whole set.
    pub const ALL: [TemplateTreeId; 11] = [
        Self::Base,
        Self::MuiComponents,
        Self::AntdComponents,
        Self::CssComponents,
        Self::ReactQueryExamples,
        Self::SwrExamples,
        Self::RouterWiring,
        Self::ReduxStore,
        Self::JotaiStore,
        Self::StorybookConfig,
        Self::StorybookStories,
    ];
}

impl fmt::Display for TemplateTreeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

// ── Tree nodes ───────────────────────────────────────────────────────────────

/// File or directory content source.
///
/// `Static` references compile-time strings (built-in trees) without
/// allocation; `Owned` carries filesystem-loaded content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Static(&'static str),
    Owned(String),
}

impl TemplateSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }
}

/// A single file to emit, path relative to the tree's mount point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: TemplateSource,
}

impl FileSpec {
    pub fn new(path: impl Into<PathBuf>, content: TemplateSource) -> Self {
        Self {
            path: path.into(),
            content,
        }
    }
}

/// A directory to create even when no file lives in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySpec {
    pub path: PathBuf,
}

impl DirectorySpec {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateNode {
    File(FileSpec),
    Directory(DirectorySpec),
}

// ── TemplateTree ─────────────────────────────────────────────────────────────

/// A named, validated set of template nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateTree {
    pub id: TemplateTreeId,
    pub nodes: Vec<TemplateNode>,
}

impl TemplateTree {
    pub fn new(id: TemplateTreeId) -> Self {
        Self {
            id,
            nodes: Vec::new(),
        }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: TemplateSource) -> Self {
        self.nodes
            .push(TemplateNode::File(FileSpec::new(path, content)));
        self
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.nodes
            .push(TemplateNode::Directory(DirectorySpec::new(path)));
        self
    }

    pub fn files(&self) -> impl Iterator<Item = &FileSpec> {
        self.nodes.iter().filter_map(|n| match n {
            TemplateNode::File(f) => Some(f),
            _ => None,
        })
    }

    /// Validate tree invariants: non-empty, unique relative paths.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.nodes.is_empty() {
            return Err(DomainError::EmptyTemplate {
                tree: self.id.to_string(),
            });
        }

        let mut seen = HashSet::new();
        for node in &self.nodes {
            let path = match node {
                TemplateNode::File(f) => &f.path,
                TemplateNode::Directory(d) => &d.path,
            };
            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    tree: self.id.to_string(),
                    path: path.display().to_string(),
                });
            }
            if !seen.insert(path.clone()) {
                return Err(DomainError::DuplicatePath {
                    tree: self.id.to_string(),
                    path: path.display().to_string(),
                });
            }
        }
        Ok(())
    }
}

// ── RenderContext ────────────────────────────────────────────────────────────

/// Variable substitution context for template content.
///
/// Immutable after creation; all derived casings are computed once at
/// construction. Unknown placeholders are left verbatim.
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(project_name: impl Into<String>) -> Self {
        let name = project_name.into();
        let mut vars = HashMap::new();
        vars.insert("PROJECT_NAME".to_string(), name.clone());
        vars.insert("PROJECT_NAME_KEBAB".to_string(), to_kebab_case(&name));
        vars.insert("PROJECT_NAME_PASCAL".to_string(), to_pascal_case(&name));
        Self { variables: vars }
    }

    /// Context derived from a full option set (name plus feature flags, so
    /// templates can mention the selected stack in e.g. the README).
    pub fn for_options(options: &OptionSet) -> Self {
        Self::new(options.name.as_str())
            .with_variable("UI_LIBRARY", options.ui_library.as_str())
            .with_variable("STATE_MANAGEMENT", options.state_management.as_str())
            .with_variable("DATA_FETCHING", options.data_fetching.as_str())
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every `{{VARIABLE}}` placeholder. Linear scan per variable;
    /// adequate for template-sized inputs.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }

    /// Render a file spec's path (paths may contain placeholders too).
    pub fn render_path(&self, path: &Path) -> PathBuf {
        PathBuf::from(self.render(&path.to_string_lossy()))
    }
}

// ── case conversion helpers ──────────────────────────────────────────────────

fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .into_iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::new();
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Split on explicit separators (`_`, `-`, whitespace), camelCase
/// transitions, and acronym boundaries (`HTTPServer` → `http`, `server`).
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(next) = chars.peek() {
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}
