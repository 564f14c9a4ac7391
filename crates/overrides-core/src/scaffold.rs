//! First-run project setup
//!
//! Runs once, when a project has no override store yet. Creates the store
//! with its first record and wires the apply step into the project's npm
//! scripts and development proxy. Targets that do not exist are skipped.

use overrides_fs::{Error as FsError, JsonDocument, NormalizedPath, ProjectLayout, ProjectPath, io};
use serde_json::{Map, Value};

use crate::documents::save_store;
use crate::{OverrideStore, Result};

/// Script run before the dev server starts.
pub const APPLY_START_SCRIPT: &str = "overrides apply-manifest start";

/// Script run after a production build.
pub const APPLY_BUILD_SCRIPT: &str = "overrides apply-manifest build";

/// Line in `src/setupProxy.js` that receives the staging manifest hook.
pub const PROXY_PATTERN: &str = "const config = { manifest };";

const PROXY_REPLACEMENT: &str = "\
const stagedManifestPath = require('path').join(__dirname, 'manifest.tmp.json');
const config = {
  manifest: require('fs').existsSync(stagedManifestPath) ? require(stagedManifestPath) : manifest,
};";

/// An npm lifecycle script inserted next to the script it wraps.
struct ScriptHook {
    name: &'static str,
    after: &'static str,
    command: &'static str,
}

const SCRIPT_HOOKS: [ScriptHook; 2] = [
    ScriptHook {
        name: "prestart",
        after: "start",
        command: APPLY_START_SCRIPT,
    },
    ScriptHook {
        name: "postbuild",
        after: "build",
        command: APPLY_BUILD_SCRIPT,
    },
];

/// What first-run setup changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// The created store document
    pub store: NormalizedPath,
    /// npm scripts added to `package.json`
    pub scripts_added: Vec<String>,
    /// Whether `src/setupProxy.js` was patched
    pub proxy_patched: bool,
}

/// A rendered target edit, written only after the store is saved.
struct PendingEdit {
    path: NormalizedPath,
    content: String,
}

/// Create the store with its first record and wire the build hooks.
///
/// Target edits are computed before anything is written. An unreadable or
/// unparsable `package.json` is skipped, so the store is never left behind
/// by a failed setup.
pub fn setup(layout: &ProjectLayout, id: &str, description: &str) -> Result<ScaffoldReport> {
    let mut store = OverrideStore::new();
    store.add(id, description)?;

    let (package_edit, scripts_added) = plan_package_scripts(layout)?;
    let proxy_edit = plan_setup_proxy(layout)?;

    save_store(layout, &store)?;
    tracing::info!(path = %layout.override_store(), "Created override store");

    if let Some(edit) = package_edit {
        io::write_text(&edit.path, &edit.content)?;
        tracing::info!(path = %edit.path, scripts = ?scripts_added, "Added npm script hooks");
    }
    let proxy_patched = proxy_edit.is_some();
    if let Some(edit) = proxy_edit {
        io::write_text(&edit.path, &edit.content)?;
        tracing::info!(path = %edit.path, "Patched development proxy");
    }

    Ok(ScaffoldReport {
        store: layout.override_store(),
        scripts_added,
        proxy_patched,
    })
}

/// Render `package.json` with the apply hooks, leaving existing scripts alone.
fn plan_package_scripts(layout: &ProjectLayout) -> Result<(Option<PendingEdit>, Vec<String>)> {
    let path = layout.path(ProjectPath::PackageJson);
    let doc = JsonDocument::new();

    let mut package: Value = match doc.load(&path) {
        Ok(package) => package,
        Err(e) if e.is_not_found() => {
            tracing::warn!(%path, "No package.json; skipping script hooks");
            return Ok((None, Vec::new()));
        }
        Err(FsError::Parse { message, .. }) => {
            tracing::warn!(%path, %message, "package.json is not valid JSON; skipping script hooks");
            return Ok((None, Vec::new()));
        }
        Err(e) => return Err(e.into()),
    };

    let Some(scripts) = package.get_mut("scripts").and_then(Value::as_object_mut) else {
        tracing::warn!(%path, "package.json has no scripts object; skipping script hooks");
        return Ok((None, Vec::new()));
    };

    let (wired, added) = insert_hooks(std::mem::take(scripts));
    *scripts = wired;

    if added.is_empty() {
        return Ok((None, added));
    }
    let content = doc.render(&path, &package)?;
    Ok((Some(PendingEdit { path, content }), added))
}

/// Insert each missing hook right after the script it wraps, or at the end
/// when that script is absent.
fn insert_hooks(scripts: Map<String, Value>) -> (Map<String, Value>, Vec<String>) {
    let pending: Vec<&ScriptHook> = SCRIPT_HOOKS
        .iter()
        .filter(|hook| !scripts.contains_key(hook.name))
        .collect();

    let mut wired = Map::new();
    let mut added: Vec<String> = Vec::new();
    for (key, value) in scripts {
        let anchor = key.clone();
        wired.insert(key, value);
        for hook in pending.iter().filter(|hook| hook.after == anchor) {
            wired.insert(hook.name.to_string(), Value::from(hook.command));
            added.push(hook.name.to_string());
        }
    }
    for hook in pending {
        if !added.iter().any(|name| name == hook.name) {
            wired.insert(hook.name.to_string(), Value::from(hook.command));
            added.push(hook.name.to_string());
        }
    }
    (wired, added)
}

/// Point the dev proxy at the staging manifest when it exists.
fn plan_setup_proxy(layout: &ProjectLayout) -> Result<Option<PendingEdit>> {
    let path = layout.path(ProjectPath::SetupProxy);
    let source = match io::read_text(&path) {
        Ok(source) => source,
        Err(e) if e.is_not_found() => {
            tracing::warn!(%path, "No setupProxy.js; skipping proxy hook");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    if !source.contains(PROXY_PATTERN) {
        tracing::warn!(%path, pattern = PROXY_PATTERN, "Proxy hook pattern not found");
        return Ok(None);
    }

    let content = source.replacen(PROXY_PATTERN, PROXY_REPLACEMENT, 1);
    Ok(Some(PendingEdit { path, content }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn keys(map: &Map<String, Value>) -> Vec<&str> {
        map.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_hooks_follow_their_scripts() {
        let scripts = json!({"start": "react-scripts start", "build": "react-scripts build", "test": "jest"});
        let (wired, added) = insert_hooks(scripts.as_object().unwrap().clone());

        assert_eq!(keys(&wired), vec!["start", "prestart", "build", "postbuild", "test"]);
        assert_eq!(added, vec!["prestart", "postbuild"]);
        assert_eq!(wired["prestart"], json!(APPLY_START_SCRIPT));
    }

    #[test]
    fn test_hooks_appended_without_anchor() {
        let scripts = json!({"lint": "eslint ."});
        let (wired, _) = insert_hooks(scripts.as_object().unwrap().clone());

        assert_eq!(keys(&wired), vec!["lint", "prestart", "postbuild"]);
    }

    #[test]
    fn test_existing_hooks_not_overwritten() {
        let scripts = json!({"start": "vite", "prestart": "echo custom"});
        let (wired, added) = insert_hooks(scripts.as_object().unwrap().clone());

        assert_eq!(wired["prestart"], json!("echo custom"));
        assert_eq!(added, vec!["postbuild"]);
    }

    #[test]
    fn test_proxy_replacement_keeps_config_binding() {
        assert!(PROXY_REPLACEMENT.contains("const config = {"));
        assert!(PROXY_REPLACEMENT.contains("manifest.tmp.json"));
        assert!(!PROXY_REPLACEMENT.contains(PROXY_PATTERN));
    }
}
