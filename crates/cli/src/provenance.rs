use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What went into a batch: the parameter file, its parsed header, and the files produced.
pub struct Payload {
    pub input: PathBuf,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Payload {
    pub fn new(input: impl Into<PathBuf>, params: Value) -> Self {
        Self {
            input: input.into(),
            params,
            outputs: Vec::new(),
        }
    }
}

/// Write `<artifact stem>.provenance.json` next to `artifact`, recording the
/// git commit, library version, callsite, input file, parameters and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let mut outputs = vec![artifact.to_string_lossy().into_owned()];
    outputs.extend(payload.outputs);
    let doc = json!({
        "code_rev": current_git_rev(),
        "jagpad_version": jagpad::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "input": payload.input.to_string_lossy(),
        "params": payload.params,
        "outputs": outputs
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("summary"));
    let mut name = stem;
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit of the running build: `GIT_COMMIT` at compile or run time, else `git rev-parse`.
pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_replaces_extension() {
        let base = Path::new("/tmp/output/summary.csv");
        assert_eq!(
            provenance_path(base),
            Path::new("/tmp/output/summary.provenance.json")
        );
    }

    #[test]
    fn sidecar_lists_summary_first_then_stars() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("summary.csv");
        fs::write(&artifact, "radius\n").unwrap();
        let mut payload = Payload::new("pads.txt", json!({"resolution": 1.0}));
        payload.outputs.push("10.0.svg".to_string());

        let prov_path = write_sidecar(&artifact, payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["outputs"][1], "10.0.svg");
        assert_eq!(parsed["input"], "pads.txt");
        assert_eq!(parsed["params"]["resolution"], 1.0);
        assert_eq!(parsed["jagpad_version"], jagpad::VERSION);
    }
}
