//! The composition plan: which template trees a given [`OptionSet`] mounts
//! where, and which npm packages each feature records.
//!
//! # Design
//!
//! Instead of nested conditionals, the plan is a small ordered list of
//! steps produced once per run by [`CompositionPlan::for_options`]. Each
//! step is a pure function of the option set, which makes the composition
//! order auditable and each activation rule independently testable.
//!
//! The one genuinely branching rule lives here: data-fetching example
//! components mount under the router's page tree when routing is active,
//! otherwise under the generic components tree.

use crate::domain::{
    options::OptionSet,
    template::TemplateTreeId,
    value_objects::{DataFetching, StateManagement, UiLibrary},
};

// ── package matrices ─────────────────────────────────────────────────────────

const BASE_RUNTIME: &[&str] = &["react", "react-dom", "react-scripts"];
const BASE_DEV: &[&str] = &["typescript", "@types/react", "@types/react-dom"];

const MUI_RUNTIME: &[&str] = &["@mui/material", "@emotion/react", "@emotion/styled"];
const ANTD_RUNTIME: &[&str] = &["antd"];

const REACT_QUERY_RUNTIME: &[&str] = &["@tanstack/react-query"];
const SWR_RUNTIME: &[&str] = &["swr"];

const ROUTER_RUNTIME: &[&str] = &["react-router-dom"];

const REDUX_RUNTIME: &[&str] = &["@reduxjs/toolkit", "react-redux"];
const JOTAI_RUNTIME: &[&str] = &["jotai"];

const STORYBOOK_DEV: &[&str] = &[
    "storybook",
    "@storybook/react",
    "@storybook/react-webpack5",
    "@storybook/preset-create-react-app",
    "@storybook/addon-essentials",
    "@storybook/addon-interactions",
    "@storybook/addon-links",
    "@storybook/addon-onboarding",
    "@storybook/blocks",
    "@storybook/test",
    "eslint-plugin-storybook",
    "prop-types",
    "webpack",
    "babel-plugin-named-exports-order",
];

const BASE_SCRIPTS: &[(&str, &str)] = &[
    ("start", "react-scripts start"),
    ("build", "react-scripts build"),
    ("test", "react-scripts test"),
    ("eject", "react-scripts eject"),
];

const STORYBOOK_SCRIPTS: &[(&str, &str)] = &[
    ("storybook", "storybook dev -p 6006"),
    ("build-storybook", "storybook build"),
];

// ── steps ────────────────────────────────────────────────────────────────────

/// One conditionally-activated layer: a template tree, where it mounts, and
/// the dependency/script entries its activation records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositionStep {
    pub tree: TemplateTreeId,
    /// Mount point relative to the project root ("" mounts at the root).
    pub mount: &'static str,
    pub runtime_packages: &'static [&'static str],
    pub dev_packages: &'static [&'static str],
    pub scripts: &'static [(&'static str, &'static str)],
}

impl CompositionStep {
    const fn new(tree: TemplateTreeId, mount: &'static str) -> Self {
        Self {
            tree,
            mount,
            runtime_packages: &[],
            dev_packages: &[],
            scripts: &[],
        }
    }

    const fn runtime(mut self, packages: &'static [&'static str]) -> Self {
        self.runtime_packages = packages;
        self
    }

    const fn dev(mut self, packages: &'static [&'static str]) -> Self {
        self.dev_packages = packages;
        self
    }

    const fn scripts(mut self, scripts: &'static [(&'static str, &'static str)]) -> Self {
        self.scripts = scripts;
        self
    }
}

// ── plan ─────────────────────────────────────────────────────────────────────

/// The ordered list of steps for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionPlan {
    pub steps: Vec<CompositionStep>,
    /// Manifest scripts applied unconditionally after all steps.
    pub final_scripts: &'static [(&'static str, &'static str)],
}

impl CompositionPlan {
    /// Evaluate every activation predicate once, in the fixed order:
    /// base, UI library, data fetching, router, state management, Storybook.
    ///
    /// Re-planning an identical option set yields an identical plan.
    pub fn for_options(options: &OptionSet) -> Self {
        let mut steps = Vec::with_capacity(7);

        // 1. Base tree, always.
        steps.push(
            CompositionStep::new(TemplateTreeId::Base, "")
                .runtime(BASE_RUNTIME)
                .dev(BASE_DEV),
        );

        // 2. UI library components. No library still gets a component tree,
        //    just a plain-CSS one with nothing to record.
        match options.ui_library {
            UiLibrary::Mui => steps.push(
                CompositionStep::new(TemplateTreeId::MuiComponents, "src").runtime(MUI_RUNTIME),
            ),
            UiLibrary::Antd => steps.push(
                CompositionStep::new(TemplateTreeId::AntdComponents, "src").runtime(ANTD_RUNTIME),
            ),
            UiLibrary::None => {
                steps.push(CompositionStep::new(TemplateTreeId::CssComponents, "src"));
            }
        }

        // 3. Data-fetching examples. Routed projects get them as pages;
        //    everything else gets plain components.
        let fetch_mount = if options.router {
            "src/pages"
        } else {
            "src/components"
        };
        match options.data_fetching {
            DataFetching::ReactQuery => steps.push(
                CompositionStep::new(TemplateTreeId::ReactQueryExamples, fetch_mount)
                    .runtime(REACT_QUERY_RUNTIME),
            ),
            DataFetching::Swr => steps.push(
                CompositionStep::new(TemplateTreeId::SwrExamples, fetch_mount)
                    .runtime(SWR_RUNTIME),
            ),
            DataFetching::None => {}
        }

        // 4. Router wiring and navigation bar.
        if options.router {
            steps.push(
                CompositionStep::new(TemplateTreeId::RouterWiring, "src").runtime(ROUTER_RUNTIME),
            );
        }

        // 5. State-management store.
        match options.state_management {
            StateManagement::Redux => steps.push(
                CompositionStep::new(TemplateTreeId::ReduxStore, "src/store")
                    .runtime(REDUX_RUNTIME),
            ),
            StateManagement::Jotai => steps.push(
                CompositionStep::new(TemplateTreeId::JotaiStore, "src/store")
                    .runtime(JOTAI_RUNTIME),
            ),
            StateManagement::None => {}
        }

        // 6. Storybook config + example stories.
        if options.storybook {
            steps.push(
                CompositionStep::new(TemplateTreeId::StorybookConfig, ".storybook")
                    .dev(STORYBOOK_DEV)
                    .scripts(STORYBOOK_SCRIPTS),
            );
            steps.push(CompositionStep::new(
                TemplateTreeId::StorybookStories,
                "src/stories",
            ));
        }

        // 7. react-scripts entries, always last.
        Self {
            steps,
            final_scripts: BASE_SCRIPTS,
        }
    }

    /// Every package name the plan will record, in activation order.
    /// Useful for `--dry-run` display and tests.
    pub fn all_packages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.steps.iter().flat_map(|s| {
            s.runtime_packages
                .iter()
                .chain(s.dev_packages.iter())
                .copied()
        })
    }
}
