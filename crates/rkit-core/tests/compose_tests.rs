//! Integration tests for rkit-core.
//!
//! The three driven ports are faked in-process here so the composition
//! pipeline can be exercised without touching the real filesystem or the
//! npm registry.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use rkit_core::{
    application::{
        ApplicationError, ComposeService,
        ports::{FALLBACK_VERSION, FileEmitter, ResolveError, TemplateStore, VersionResolver},
    },
    domain::{
        DataFetching, OptionSet, StateManagement, TemplateSource, TemplateTree, TemplateTreeId,
        UiLibrary,
    },
    error::{RkitError, RkitResult},
};

// ─── fakes ───────────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
struct MemoryEmitter {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
    dirs: Arc<Mutex<BTreeSet<PathBuf>>>,
}

impl MemoryEmitter {
    fn read(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }

    fn file_paths(&self) -> Vec<PathBuf> {
        self.files.lock().unwrap().keys().cloned().collect()
    }
}

impl FileEmitter for MemoryEmitter {
    fn create_dir_all(&self, path: &Path) -> RkitResult<()> {
        self.dirs.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> RkitResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path)
            || self.files.lock().unwrap().contains_key(path)
    }

    fn remove_dir_all(&self, path: &Path) -> RkitResult<()> {
        self.dirs.lock().unwrap().retain(|d| !d.starts_with(path));
        self.files.lock().unwrap().retain(|f, _| !f.starts_with(path));
        Ok(())
    }
}

struct FixedResolver(HashMap<&'static str, &'static str>);

impl FixedResolver {
    fn with_react() -> Self {
        let mut versions = HashMap::new();
        versions.insert("react", "19.0.0");
        versions.insert("react-dom", "19.0.0");
        Self(versions)
    }
}

impl VersionResolver for FixedResolver {
    fn latest(&self, package: &str) -> Result<String, ResolveError> {
        self.0
            .get(package)
            .map(|v| (*v).to_string())
            .ok_or_else(|| ResolveError {
                package: package.into(),
                reason: "not in fixture".into(),
            })
    }
}

/// Minimal one-file-per-tree store: enough structure to observe mount
/// points and rendering without dragging the full built-in trees in.
struct TinyStore;

impl TemplateStore for TinyStore {
    fn get(&self, id: TemplateTreeId) -> RkitResult<TemplateTree> {
        let tree = match id {
            TemplateTreeId::Base => TemplateTree::new(id)
                .with_file(
                    "README.md",
                    TemplateSource::Static("# {{PROJECT_NAME}}\n"),
                )
                .with_file("src/index.tsx", TemplateSource::Static("// entry\n")),
            TemplateTreeId::RouterWiring => TemplateTree::new(id)
                .with_file("routes.tsx", TemplateSource::Static("// routes\n")),
            other => TemplateTree::new(other).with_file(
                "index.ts",
                TemplateSource::Static("// {{PROJECT_NAME_PASCAL}}\n"),
            ),
        };
        Ok(tree)
    }
}

fn service(emitter: &MemoryEmitter) -> ComposeService {
    ComposeService::new(
        Box::new(TinyStore),
        Box::new(emitter.clone()),
        Box::new(FixedResolver::with_react()),
    )
}

fn options(
    ui: UiLibrary,
    router: bool,
    state: StateManagement,
    fetch: DataFetching,
    storybook: bool,
) -> OptionSet {
    OptionSet::new("demo", ui, router, state, fetch, storybook).unwrap()
}

// ─── tests ───────────────────────────────────────────────────────────────────

#[test]
fn minimal_run_writes_base_manifest() {
    let emitter = MemoryEmitter::default();
    let report = service(&emitter)
        .generate(
            &options(
                UiLibrary::None,
                false,
                StateManagement::None,
                DataFetching::None,
                false,
            ),
            "/out/demo",
        )
        .unwrap();

    let manifest = emitter.read("/out/demo/package.json").unwrap();
    let json: serde_json::Value = serde_json::from_str(&manifest).unwrap();

    assert_eq!(json["name"], "demo");
    assert_eq!(json["private"], true);
    assert_eq!(json["dependencies"]["react"], "19.0.0");
    // not in the resolver fixture, so the named fallback applies
    assert_eq!(json["dependencies"]["react-scripts"], FALLBACK_VERSION);
    assert_eq!(json["devDependencies"]["typescript"], FALLBACK_VERSION);
    assert_eq!(json["scripts"]["start"], "react-scripts start");
    assert_eq!(json["scripts"]["eject"], "react-scripts eject");
    assert_eq!(json["scripts"].as_object().unwrap().len(), 4);

    // base tree files + css fallback components + package.json
    assert_eq!(report.files_written, 4);
    assert_eq!(report.dependencies, 3);
    assert_eq!(report.dev_dependencies, 3);
}

#[test]
fn no_ui_library_still_mounts_fallback_components_without_packages() {
    let emitter = MemoryEmitter::default();
    service(&emitter)
        .generate(
            &options(
                UiLibrary::None,
                false,
                StateManagement::None,
                DataFetching::None,
                false,
            ),
            "/out/demo",
        )
        .unwrap();

    // the css component tree lands under src but records no dependencies
    assert!(emitter.read("/out/demo/src/index.ts").is_some());
    let json: serde_json::Value =
        serde_json::from_str(&emitter.read("/out/demo/package.json").unwrap()).unwrap();
    assert_eq!(json["dependencies"].as_object().unwrap().len(), 3);
}

#[test]
fn base_readme_renders_project_name() {
    let emitter = MemoryEmitter::default();
    service(&emitter)
        .generate(
            &options(
                UiLibrary::None,
                false,
                StateManagement::None,
                DataFetching::None,
                false,
            ),
            "/out/demo",
        )
        .unwrap();
    assert_eq!(emitter.read("/out/demo/README.md").unwrap(), "# demo\n");
}

#[test]
fn mui_router_redux_combination() {
    let emitter = MemoryEmitter::default();
    service(&emitter)
        .generate(
            &options(
                UiLibrary::Mui,
                true,
                StateManagement::Redux,
                DataFetching::None,
                false,
            ),
            "/out/demo",
        )
        .unwrap();

    assert!(emitter.read("/out/demo/src/index.ts").is_some()); // mui components
    assert!(emitter.read("/out/demo/src/routes.tsx").is_some());
    assert!(emitter.read("/out/demo/src/store/index.ts").is_some());

    let json: serde_json::Value =
        serde_json::from_str(&emitter.read("/out/demo/package.json").unwrap()).unwrap();
    for pkg in [
        "@mui/material",
        "@emotion/react",
        "@emotion/styled",
        "react-router-dom",
        "@reduxjs/toolkit",
        "react-redux",
    ] {
        assert_eq!(json["dependencies"][pkg], FALLBACK_VERSION, "missing {pkg}");
    }
    // no storybook, no fetch layer
    assert!(json["scripts"].get("storybook").is_none());
    assert!(json["dependencies"].get("swr").is_none());
    assert!(
        !emitter
            .file_paths()
            .iter()
            .any(|p| p.starts_with("/out/demo/.storybook"))
    );
}

#[test]
fn fetch_examples_land_in_pages_only_with_router() {
    for (router, expected) in [
        (true, "/out/demo/src/pages/index.ts"),
        (false, "/out/demo/src/components/index.ts"),
    ] {
        let emitter = MemoryEmitter::default();
        service(&emitter)
            .generate(
                &options(
                    UiLibrary::None,
                    router,
                    StateManagement::None,
                    DataFetching::ReactQuery,
                    false,
                ),
                "/out/demo",
            )
            .unwrap();
        assert!(
            emitter.read(expected).is_some(),
            "router={router}: expected {expected}, got {:?}",
            emitter.file_paths()
        );
    }
}

#[test]
fn storybook_adds_scripts_and_dev_packages() {
    let emitter = MemoryEmitter::default();
    service(&emitter)
        .generate(
            &options(
                UiLibrary::None,
                false,
                StateManagement::None,
                DataFetching::None,
                true,
            ),
            "/out/demo",
        )
        .unwrap();

    assert!(emitter.read("/out/demo/.storybook/index.ts").is_some());
    assert!(emitter.read("/out/demo/src/stories/index.ts").is_some());

    let json: serde_json::Value =
        serde_json::from_str(&emitter.read("/out/demo/package.json").unwrap()).unwrap();
    assert_eq!(json["scripts"]["storybook"], "storybook dev -p 6006");
    assert_eq!(json["scripts"]["build-storybook"], "storybook build");
    // 3 base dev packages + 14 storybook dev packages
    assert_eq!(json["devDependencies"].as_object().unwrap().len(), 17);
}

#[test]
fn existing_target_directory_is_rejected() {
    let emitter = MemoryEmitter::default();
    emitter.create_dir_all(Path::new("/out/demo")).unwrap();

    let err = service(&emitter)
        .generate(
            &options(
                UiLibrary::None,
                false,
                StateManagement::None,
                DataFetching::None,
                false,
            ),
            "/out/demo",
        )
        .unwrap_err();
    assert!(matches!(
        err,
        RkitError::Application(ApplicationError::ProjectExists { .. })
    ));
}

#[test]
fn identical_options_produce_identical_manifests() {
    let opts = options(
        UiLibrary::Antd,
        true,
        StateManagement::Jotai,
        DataFetching::Swr,
        true,
    );

    let run = |dir: &str| {
        let emitter = MemoryEmitter::default();
        service(&emitter).generate(&opts, dir).unwrap();
        emitter.read(&format!("{dir}/package.json")).unwrap()
    };

    assert_eq!(run("/a/demo"), run("/b/demo"));
}

#[test]
fn manifest_preview_matches_real_run() {
    let opts = options(
        UiLibrary::Mui,
        false,
        StateManagement::Redux,
        DataFetching::Swr,
        false,
    );
    let emitter = MemoryEmitter::default();
    let svc = service(&emitter);

    let preview = svc.resolve_dependencies(&opts);
    svc.generate(&opts, "/out/demo").unwrap();

    assert_eq!(
        preview.to_json(),
        emitter.read("/out/demo/package.json").unwrap()
    );
}
