//! Bundle `starter-cli` into a single executable under `dist/`.
//!
//! The `dist` cargo profile optimizes for size and writes debug info to a
//! packed sidecar file instead of the binary. This module runs that build and
//! copies the results into the output directory.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::run_cargo;

/// Name of the binary being bundled.
pub const BIN_NAME: &str = "starter-cli";

/// Cargo profile used for bundling.
pub const PROFILE: &str = "dist";

/// Options for a bundling run.
pub struct DistConfig {
    /// Directory the artifact is copied into.
    pub out_dir: PathBuf,
}

/// Build the binary with the `dist` profile and copy it to `out_dir`.
pub fn run(config: DistConfig) -> Result<()> {
    println!("Building {}...", BIN_NAME);

    let status = run_cargo(&["build", "--profile", PROFILE, "--bin", BIN_NAME])?;
    if !status.success() {
        bail!("Build failed");
    }

    let target_dir = cargo_target_dir()?.join(PROFILE);
    let artifact = bundle(&target_dir, &config.out_dir)?;

    println!("Wrote {}", artifact.display());
    println!("Build complete");
    Ok(())
}

/// Ask cargo where build output goes, so `CARGO_TARGET_DIR` and
/// `build.target-dir` are honored.
fn cargo_target_dir() -> Result<PathBuf> {
    let output = Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("Failed to run 'cargo metadata'")?;

    if !output.status.success() {
        bail!("cargo metadata failed");
    }

    let metadata = String::from_utf8(output.stdout).context("Invalid UTF-8 in cargo output")?;
    target_dir_from_metadata(&metadata)
}

/// Extract `target_directory` from `cargo metadata` JSON.
fn target_dir_from_metadata(metadata: &str) -> Result<PathBuf> {
    let value: serde_json::Value =
        serde_json::from_str(metadata).context("Invalid JSON from cargo metadata")?;

    value
        .get("target_directory")
        .and_then(|v| v.as_str())
        .map(PathBuf::from)
        .context("cargo metadata has no target_directory")
}

/// Copy the built binary and any debug-info sidecar from `target_dir` into
/// `out_dir`, returning the path of the copied binary.
pub fn bundle(target_dir: &Path, out_dir: &Path) -> Result<PathBuf> {
    let binary = target_dir.join(binary_file_name());
    if !binary.is_file() {
        bail!("Built binary not found at {}", binary.display());
    }

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let dest = out_dir.join(binary_file_name());
    fs::copy(&binary, &dest).with_context(|| format!("Failed to copy {}", binary.display()))?;
    make_executable(&dest)?;

    for sidecar in sidecar_names() {
        let src = target_dir.join(&sidecar);
        if src.is_file() {
            fs::copy(&src, out_dir.join(&sidecar))
                .with_context(|| format!("Failed to copy {}", src.display()))?;
        } else if src.is_dir() {
            copy_dir(&src, &out_dir.join(&sidecar))?;
        }
    }

    Ok(dest)
}

/// File name of the binary on the host platform.
fn binary_file_name() -> String {
    format!("{}{}", BIN_NAME, std::env::consts::EXE_SUFFIX)
}

/// Debug-info files `split-debuginfo = "packed"` may produce, per platform.
fn sidecar_names() -> Vec<String> {
    vec![
        format!("{}.dwp", BIN_NAME),
        format!("{}.dSYM", BIN_NAME),
        format!("{}.pdb", BIN_NAME.replace('-', "_")),
    ]
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(perms.mode() | 0o755);
    fs::set_permissions(path, perms)
        .with_context(|| format!("Failed to mark {} executable", path.display()))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Recursively copy a directory (macOS `.dSYM` bundles are directories).
fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
