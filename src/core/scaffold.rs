//! Command file generation.
//!
//! `emit` renders a command skeleton for one sanitized name and writes it;
//! `add_command` is the full `goman add` operation on top of it.

use chrono::Datelike;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::defaults::Defaults;
use crate::error::{Error, ErrorCode, Result};
use crate::identifier;
use crate::project::Project;
use crate::utils::template::{self, TemplateVars};
use crate::utils::{io, validation};

/// Built-in skeleton for a new command file.
pub const COMMAND_TEMPLATE: &str = r#"{{copyright}}
{{license}}

package {{cmdPackage}}

import (
	"fmt"

	"github.com/govenue/goman"
)

// {{cmdName}}Cmd represents the {{cmdName}} command
var {{cmdName}}Cmd = &goman.Command{
	Use:   "{{cmdName}}",
	Short: "A brief description of your command",
	Long: `A longer description that spans multiple lines and likely contains examples
and usage of using your command. For example:

goman is a CLI library for Go that empowers applications.
This application is a tool to generate the needed files
to quickly create a goman application.`,
	Run: func(cmd *goman.Command, args []string) {
		fmt.Println("{{cmdName}} called")
	},
}

func init() {
	{{parentName}}.AddCommand({{cmdName}}Cmd)

	// Here you will define your flags and configuration settings.

	// goman supports Persistent Flags which will work for this command
	// and all subcommands, e.g.:
	// {{cmdName}}Cmd.PersistentFlags().String("foo", "", "A help for foo")

	// goman supports local flags which will only run when this command
	// is called directly, e.g.:
	// {{cmdName}}Cmd.Flags().BoolP("toggle", "t", false, "Help message for toggle")
}
"#;

/// Everything one command file is rendered from. Lives for a single `emit` call.
#[derive(Debug, Clone)]
pub struct EmissionContext<'a> {
    pub identifier: &'a str,
    pub parent_name: &'a str,
    /// Uncommented license header; omitted from the output when empty.
    pub license_header: &'a str,
    /// Uncommented copyright line.
    pub copyright_line: &'a str,
    /// Replace an existing file at the target path.
    pub force: bool,
}

/// `Copyright © <year> <author>` for the current local year.
pub fn copyright_line(author: &str) -> String {
    let year = chrono::Local::now().year();
    format!("Copyright © {} {}", year, author.trim())
}

/// Package of a file: the name of the directory it lives in.
pub fn package_name_for(target_path: &Path) -> Result<String> {
    target_path
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            Error::validation_invalid_argument(
                "path",
                "Target path has no parent directory to take the package name from",
                Some(target_path.display().to_string()),
                None,
            )
        })
}

/// Render `template` for `context` and create the file at `target_path`.
///
/// Nothing is written unless rendering succeeds.
pub fn emit(context: &EmissionContext<'_>, target_path: &Path, template: &str) -> Result<()> {
    let package = package_name_for(target_path)?;

    let license = if context.license_header.trim().is_empty() {
        String::new()
    } else {
        template::comment(context.license_header)
    };

    let variables: HashMap<&str, String> = HashMap::from([
        (TemplateVars::COPYRIGHT, template::comment(context.copyright_line)),
        (TemplateVars::LICENSE, license),
        (TemplateVars::CMD_PACKAGE, package),
        (TemplateVars::PARENT_NAME, context.parent_name.to_string()),
        (TemplateVars::CMD_NAME, context.identifier.to_string()),
    ]);

    let rendered = template::render_strict(template, &variables)?;

    let operation = format!("write {}", target_path.display());
    if context.force {
        io::write_file(target_path, &rendered, &operation)
    } else {
        io::write_new_file(target_path, &rendered, &operation)
    }
}

/// Input for one `add` operation.
#[derive(Debug, Clone, Default)]
pub struct AddRequest {
    pub name: String,
    /// Parent command variable; falls back to `Defaults::parent`.
    pub parent: Option<String>,
    pub force: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddResult {
    pub name: String,
    pub identifier: String,
    pub path: PathBuf,
    pub package: String,
    pub parent: String,
    pub project: String,
    pub license: String,
    pub overwritten: bool,
    pub message: String,
}

/// The configured template file, or the built-in skeleton when none is set.
fn load_template(defaults: &Defaults) -> Result<(String, Option<PathBuf>)> {
    let Some(path) = &defaults.command_template else {
        return Ok((COMMAND_TEMPLATE.to_string(), None));
    };

    let path = PathBuf::from(shellexpand::tilde(path).into_owned());
    let content = io::read_file(&path, &format!("read template {}", path.display()))?;
    if !template::is_present(&content, TemplateVars::CMD_NAME) {
        log_status!(
            "add",
            "Template {} never references {{{{cmdName}}}}",
            path.display()
        );
    }

    Ok((content, Some(path)))
}

/// Add a command named `request.name` to `project`.
pub fn add_command(
    request: &AddRequest,
    project: &Project,
    defaults: &Defaults,
) -> Result<AddResult> {
    let sanitized = identifier::sanitize(&request.name);
    let cmd_name =
        validation::require_non_empty(&sanitized, "name", "Command name has no usable characters")?;
    let cmd_name = validation::require_plain_name(cmd_name, "name")?;

    let parent = request.parent.as_deref().unwrap_or(&defaults.parent);
    identifier::validate_parent_name(parent)?;

    let path = project.cmd_path().join(format!("{}.go", cmd_name));
    let package = package_name_for(&path)?;
    let overwritten = request.force && path.exists();

    let (template, template_path) = load_template(defaults)?;
    let copyright = copyright_line(&defaults.author);
    let license = project.license();

    let context = EmissionContext {
        identifier: cmd_name,
        parent_name: parent,
        license_header: &license.header,
        copyright_line: &copyright,
        force: request.force,
    };

    log_status!("add", "Writing {} ({} license)", path.display(), license.name);
    emit(&context, &path, &template).map_err(|mut err| {
        if let (ErrorCode::TemplateRenderFailed, Some(source)) = (err.code, &template_path) {
            err.details["template"] = Value::String(source.display().to_string());
        }
        err
    })?;

    Ok(AddResult {
        name: request.name.clone(),
        identifier: cmd_name.to_string(),
        message: format!("{} created at {}", cmd_name, path.display()),
        path,
        package,
        parent: parent.to_string(),
        project: project.name.clone(),
        license: license.name.clone(),
        overwritten,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn context<'a>(identifier: &'a str, license_header: &'a str) -> EmissionContext<'a> {
        EmissionContext {
            identifier,
            parent_name: "rootCmd",
            license_header,
            copyright_line: "Copyright © 2026 Jane Doe",
            force: false,
        }
    }

    #[test]
    fn package_name_is_parent_dir() {
        let name = package_name_for(Path::new("/src/acme/tool/cmd/serve.go")).unwrap();
        assert_eq!(name, "cmd");
    }

    #[test]
    fn package_name_requires_parent_dir() {
        assert!(package_name_for(Path::new("serve.go")).is_err());
    }

    #[test]
    fn copyright_line_uses_author_and_year() {
        let line = copyright_line(" Jane Doe <jane@example.com> ");
        let year = chrono::Local::now().year();
        assert_eq!(line, format!("Copyright © {} Jane Doe <jane@example.com>", year));
    }

    #[test]
    fn emit_renders_builtin_template() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("commands").join("myServer.go");

        emit(&context("myServer", "Line one\nLine two"), &path, COMMAND_TEMPLATE).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(
            "// Copyright © 2026 Jane Doe\n// Line one\n// Line two\n\npackage commands\n"
        ));
        assert!(content.contains("var myServerCmd = &goman.Command{"));
        assert!(content.contains("Use:   \"myServer\","));
        assert!(content.contains("fmt.Println(\"myServer called\")"));
        assert!(content.contains("rootCmd.AddCommand(myServerCmd)"));
        assert!(!content.contains("{{"));
    }

    #[test]
    fn emit_without_license_leaves_blank_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cmd").join("serve.go");

        emit(&context("serve", ""), &path, COMMAND_TEMPLATE).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("// Copyright © 2026 Jane Doe\n\n\npackage cmd\n"));
    }

    #[test]
    fn emit_render_error_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cmd").join("serve.go");

        let err = emit(&context("serve", ""), &path, "package {{cmdPackage}} {{unknown}}")
            .unwrap_err();
        assert_eq!(err.code.as_str(), "template.render_failed");
        assert!(!path.exists());
    }

    #[test]
    fn emit_refuses_existing_file_unless_forced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cmd").join("serve.go");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "keep me").unwrap();

        let err = emit(&context("serve", ""), &path, COMMAND_TEMPLATE).unwrap_err();
        assert_eq!(err.code.as_str(), "scaffold.file_exists");
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");

        let forced = EmissionContext {
            force: true,
            ..context("serve", "")
        };
        emit(&forced, &path, COMMAND_TEMPLATE).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("var serveCmd"));
    }

    #[test]
    fn add_command_uses_sanitized_name_and_custom_parent() {
        let dir = TempDir::new().unwrap();
        let defaults = Defaults {
            license: "none".to_string(),
            ..Defaults::default()
        };
        let project = Project::from_path(dir.path(), &defaults).unwrap();

        let request = AddRequest {
            name: "db_dump".to_string(),
            parent: Some("adminCmd".to_string()),
            force: false,
        };
        let result = add_command(&request, &project, &defaults).unwrap();

        assert_eq!(result.identifier, "dbDump");
        assert_eq!(result.path, dir.path().join("cmd").join("dbDump.go"));
        assert_eq!(result.package, "cmd");
        assert_eq!(result.license, "none");
        assert!(!result.overwritten);

        let content = fs::read_to_string(&result.path).unwrap();
        assert!(content.contains("adminCmd.AddCommand(dbDumpCmd)"));
    }

    #[test]
    fn add_command_rejects_name_without_characters() {
        let dir = TempDir::new().unwrap();
        let defaults = Defaults::default();
        let project = Project::from_path(dir.path(), &defaults).unwrap();

        let request = AddRequest {
            name: "--".to_string(),
            ..AddRequest::default()
        };
        let err = add_command(&request, &project, &defaults).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
        assert!(!dir.path().join("cmd").exists());
    }

    #[test]
    fn add_command_rejects_invalid_parent() {
        let dir = TempDir::new().unwrap();
        let defaults = Defaults::default();
        let project = Project::from_path(dir.path(), &defaults).unwrap();

        let request = AddRequest {
            name: "serve".to_string(),
            parent: Some("root-cmd".to_string()),
            force: false,
        };
        assert!(add_command(&request, &project, &defaults).is_err());
    }

    #[test]
    fn add_command_registers_with_package_qualified_parent() {
        let dir = TempDir::new().unwrap();
        let defaults = Defaults::default();
        let project = Project::from_path(dir.path(), &defaults).unwrap();

        let request = AddRequest {
            name: "serve".to_string(),
            parent: Some("cmd.RootCmd".to_string()),
            force: false,
        };
        let result = add_command(&request, &project, &defaults).unwrap();

        let content = fs::read_to_string(&result.path).unwrap();
        assert!(content.contains("cmd.RootCmd.AddCommand(serveCmd)"));
    }

    #[test]
    fn add_command_reads_configured_template() {
        let dir = TempDir::new().unwrap();
        let template_path = dir.path().join("cmd.tmpl");
        fs::write(
            &template_path,
            "package {{cmdPackage}}\n// {{cmdName}} -> {{parentName}}\n",
        )
        .unwrap();

        let project_dir = dir.path().join("tool");
        fs::create_dir(&project_dir).unwrap();

        let defaults = Defaults {
            command_template: Some(template_path.display().to_string()),
            ..Defaults::default()
        };
        let project = Project::from_path(&project_dir, &defaults).unwrap();

        let request = AddRequest {
            name: "sync-all".to_string(),
            ..AddRequest::default()
        };
        let result = add_command(&request, &project, &defaults).unwrap();

        assert_eq!(
            fs::read_to_string(&result.path).unwrap(),
            "package cmd\n// syncAll -> rootCmd\n"
        );
    }

    #[test]
    fn add_command_render_error_names_template_file() {
        let dir = TempDir::new().unwrap();
        let template_path = dir.path().join("broken.tmpl");
        fs::write(&template_path, "package {{cmdPackage}} // {{author}}\n").unwrap();

        let defaults = Defaults {
            command_template: Some(template_path.display().to_string()),
            ..Defaults::default()
        };
        let project = Project::from_path(dir.path(), &defaults).unwrap();

        let request = AddRequest {
            name: "serve".to_string(),
            ..AddRequest::default()
        };
        let err = add_command(&request, &project, &defaults).unwrap_err();

        assert_eq!(err.code, ErrorCode::TemplateRenderFailed);
        assert_eq!(err.details["missing"], serde_json::json!(["author"]));
        assert_eq!(err.details["template"], template_path.display().to_string());
        assert!(!dir.path().join("cmd").join("serve.go").exists());
    }
}
