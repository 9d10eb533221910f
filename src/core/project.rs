//! Project resolution.
//!
//! A project is either named by its package (resolved against the source
//! roots) or found from a directory, usually the working directory.

use serde::Serialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::defaults::Defaults;
use crate::error::{Error, Result};
use crate::license::{self, License};
use crate::paths;

/// Directory names recognised as the command directory, in priority order.
const CMD_DIR_NAMES: &[&str] = &["cmd", "cmds", "command", "commands"];

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub name: String,
    pub abs_path: PathBuf,
    cmd_path: PathBuf,
    license: License,
}

impl Project {
    /// Resolve a project from a package name such as `github.com/acme/tool`.
    pub fn from_package(name: &str, defaults: &Defaults) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::validation_invalid_argument(
                "package",
                "Package name cannot be empty",
                None,
                None,
            ));
        }

        let path = Path::new(name);
        let abs_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            let roots = source_roots(defaults)?;
            roots
                .iter()
                .map(|root| root.join(name))
                .find(|candidate| candidate.is_dir())
                .or_else(|| roots.first().map(|root| root.join(name)))
                .ok_or_else(|| Error::project_not_found(name, None))?
        };

        Self::build(name.to_string(), abs_path, defaults)
    }

    /// Resolve the project rooted at `dir`, which must be an existing absolute path.
    pub fn from_path(dir: &Path, defaults: &Defaults) -> Result<Self> {
        if !dir.is_absolute() {
            return Err(Error::validation_invalid_argument(
                "path",
                "Project path must be absolute",
                Some(dir.display().to_string()),
                None,
            ));
        }

        if !dir.is_dir() {
            let display = dir.display().to_string();
            return Err(Error::project_not_found(display.clone(), Some(display)));
        }

        let roots = source_roots(defaults).unwrap_or_default();
        let name = package_name_under(dir, &roots)
            .or_else(|| {
                dir.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| dir.display().to_string());

        Self::build(name, dir.to_path_buf(), defaults)
    }

    fn build(name: String, abs_path: PathBuf, defaults: &Defaults) -> Result<Self> {
        let license = license::resolve(defaults)?;
        let cmd_path = find_cmd_dir(&abs_path);

        Ok(Self {
            name,
            abs_path,
            cmd_path,
            license,
        })
    }

    /// Directory that holds command source files.
    pub fn cmd_path(&self) -> &Path {
        &self.cmd_path
    }

    pub fn license(&self) -> &License {
        &self.license
    }
}

/// Source roots: configured roots, else `$GOPATH/src` entries, else `~/go/src`.
pub fn source_roots(defaults: &Defaults) -> Result<Vec<PathBuf>> {
    if !defaults.source_roots.is_empty() {
        return Ok(defaults
            .source_roots
            .iter()
            .map(|root| PathBuf::from(shellexpand::tilde(root).into_owned()))
            .collect());
    }

    if let Some(gopath) = env::var_os("GOPATH") {
        let roots: Vec<PathBuf> = env::split_paths(&gopath)
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| p.join("src"))
            .collect();
        if !roots.is_empty() {
            return Ok(roots);
        }
    }

    Ok(vec![paths::default_source_root()?])
}

/// Slash-separated path of `dir` relative to the first root containing it.
fn package_name_under(dir: &Path, roots: &[PathBuf]) -> Option<String> {
    roots.iter().find_map(|root| {
        let rel = dir.strip_prefix(root).ok()?;
        let parts: Vec<String> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("/"))
        }
    })
}

fn find_cmd_dir(root: &Path) -> PathBuf {
    if let Ok(entries) = fs::read_dir(root) {
        let mut dirs: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .collect();
        dirs.sort();

        for candidate in CMD_DIR_NAMES {
            if let Some(found) = dirs.iter().find(|d| d.eq_ignore_ascii_case(candidate)) {
                return root.join(found);
            }
        }
    }

    root.join(CMD_DIR_NAMES[0])
}
