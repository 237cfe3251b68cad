use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};

/// Write `<artifact>.provenance.json` next to a JSON artifact.
///
/// Records the library version, git commit, callsite, the command's params and
/// the artifact path, so a result file can be traced back to the run that made it.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, command: &str, params: Value) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    ensure_parent(&provenance_path)?;

    let callsite = Location::caller();
    let doc = json!({
        "command": command,
        "hullcmp_version": hullcmp::VERSION,
        "code_rev": code_rev(),
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "params": params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

/// Serialize `value` as pretty JSON to `path`, creating parent directories.
pub fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    let mut name = stem;
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Build revision from `GIT_COMMIT` (compile time, then runtime), else `"unknown"`.
fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_name_follows_artifact_stem() {
        assert_eq!(
            provenance_path(Path::new("out/hulls.json")),
            Path::new("out/hulls.provenance.json")
        );
        assert_eq!(
            provenance_path(Path::new("report")),
            Path::new("report.provenance.json")
        );
    }

    #[test]
    fn code_rev_falls_back_without_git_commit() {
        let rev = code_rev();
        assert!(!rev.is_empty());
        if option_env!("GIT_COMMIT").is_none() && std::env::var("GIT_COMMIT").is_err() {
            assert_eq!(rev, "unknown");
        }
    }

    #[test]
    fn write_json_and_sidecar() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("nested").join("bench.json");
        write_json(&artifact, &json!({"rows": []})).unwrap();
        let prov_path = write_sidecar(&artifact, "bench", json!({"trials": 3})).unwrap();
        assert!(artifact.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["command"], "bench");
        assert_eq!(parsed["params"]["trials"], 3);
        assert_eq!(parsed["hullcmp_version"], hullcmp::VERSION);
        assert!(parsed["code_rev"].is_string());
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
    }
}
