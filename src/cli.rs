//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::error;

use crate::config::{find_config, load_file_config, FileConfig, Options, OptionsBuilder};
use crate::core::constants::{INVALID_CONFIG_RC, ROLE_META};
use crate::core::error::MockError;
use crate::core::model::{ItemError, Outcome, ResultItem, ResultSet};
use crate::core::paths::{absolute, normalize_path};
use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::core::yaml::load_yaml_lenient;
use crate::mock::env::{ansible_env, shell_quote};
use crate::mock::fqrn::{role_fqrn, RoleMetadata};
use crate::mock::orchestrate::perform_mockings;
use crate::mock::stub::stub_path;

/// lintmock - prepare a mock install tree so a linter can resolve missing roles and modules.
#[derive(Parser, Debug)]
#[command(name = "lintmock")]
#[command(
    author,
    version,
    about,
    long_about = r#"lintmock builds a sandboxed cache directory that looks like an installed
set of roles, modules and collections, so a linter can analyze a project whose
dependencies are not installed.

Every command prints a ResultSet in the selected format (default: jsonl).

Examples:
    lintmock prepare --mock-role acme.tools.web --mock-module community.general.ini_file
    lintmock stub-path foo ns.coll.sub.mod
    lintmock fqrn
    lintmock env --shell
"#
)]
pub struct Cli {
    /// Root of the project being linted.
    #[arg(long, global = true, default_value = ".", value_name = "DIR")]
    pub project_dir: PathBuf,

    /// Root of the simulated install tree.
    #[arg(
        long,
        global = true,
        env = "LINTMOCK_CACHE_DIR",
        value_name = "DIR",
        long_help = "Root of the simulated install tree.\n\n\
Relative values are resolved against the project directory. When omitted, the\n\
config file value is used, else a per-project directory under the user cache."
    )]
    pub cache_dir: Option<PathBuf>,

    /// YAML config file with mock_roles / mock_modules.
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        long_help = "YAML config file providing mock_roles, mock_modules and cache_dir.\n\n\
Defaults to .ansible-lint in the project directory when that file exists."
    )]
    pub config: Option<PathBuf>,

    /// Output format (jsonl/json/md/raw).
    #[arg(long, global = true, default_value = "jsonl", value_name = "FORMAT")]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit JSON-formatted log lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create role directories, module stubs and self-links.
    #[command(
        long_about = "Run the full mocking pass:\n\
1) a directory for every mocked role\n\
2) a stub file for every mocked module\n\
3) a symlink to the project when it is a collection (galaxy.yml)\n\
4) a symlink to the project when it is a role (meta/main.yml)\n\n\
An invalid module or role name stops the run with exit status 3.\n\n\
Examples:\n\
  lintmock prepare\n\
  lintmock prepare --mock-role web --mock-module ns.coll.mod\n"
    )]
    Prepare {
        /// Extra role to mock (repeatable), appended to the config file list.
        #[arg(long = "mock-role", value_name = "ROLE")]
        mock_roles: Vec<String>,

        /// Extra module to mock (repeatable), appended to the config file list.
        #[arg(long = "mock-module", value_name = "MODULE")]
        mock_modules: Vec<String>,
    },

    /// Show where module stubs would be written, without writing them.
    StubPath {
        #[arg(value_name = "MODULE", required = true, num_args = 1..)]
        modules: Vec<String>,
    },

    /// Print the fully-qualified role name of the project.
    Fqrn,

    /// Print environment variables pointing at the mock tree.
    Env {
        /// Print `export NAME='value'` lines instead of a ResultSet.
        #[arg(long)]
        shell: bool,
    },
}

/// Build options from the config file and command-line values
fn resolve_options(
    cli: &Cli,
    mock_roles: Vec<String>,
    mock_modules: Vec<String>,
) -> Result<Options> {
    let file = match find_config(&cli.project_dir, cli.config.as_deref()) {
        Some(path) => load_file_config(&path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => FileConfig::default(),
    };

    let options = OptionsBuilder::new()
        .file_config(file)
        .cache_dir(cli.cache_dir.clone())
        .mock_roles(mock_roles)
        .mock_modules(mock_modules)
        .build(&cli.project_dir)?;
    Ok(options)
}

fn emit(result_set: &ResultSet, render_config: RenderConfig) -> Result<()> {
    let renderer = Renderer::with_config(render_config);
    renderer
        .render_to(result_set, std::io::stdout().lock())
        .context("Failed to write output")
}

/// Run the CLI, ending the process with the invalid-config status on bad configuration
pub fn run_or_exit(cli: Cli) -> Result<()> {
    match run(cli) {
        Err(err)
            if err
                .downcast_ref::<MockError>()
                .is_some_and(MockError::is_config_error) =>
        {
            error!("{}", err);
            std::process::exit(INVALID_CONFIG_RC);
        }
        other => other,
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    match &cli.command {
        Commands::Prepare {
            mock_roles,
            mock_modules,
        } => {
            let options = resolve_options(&cli, mock_roles.clone(), mock_modules.clone())?;
            let artifacts = perform_mockings(&options)?;
            let result_set: ResultSet = artifacts.iter().map(|a| a.to_result_item()).collect();
            emit(&result_set, render_config)?;
        }

        Commands::StubPath { modules } => {
            let options = resolve_options(&cli, Vec::new(), Vec::new())?;
            let mut result_set = ResultSet::new();
            for raw in modules {
                let path = stub_path(&options.cache_dir, raw)?;
                result_set.push(
                    ResultItem::file(normalize_path(&path))
                        .with_source(raw.clone())
                        .with_outcome(Outcome::Planned),
                );
            }
            emit(&result_set, render_config)?;
        }

        Commands::Fqrn => {
            let project_dir = absolute(&cli.project_dir)?;
            let meta_path = project_dir.join(ROLE_META);
            let meta = load_yaml_lenient(&meta_path).and_then(|doc| RoleMetadata::from_meta(&doc));

            let mut result_set = ResultSet::new();
            match meta {
                Some(meta) => result_set.push(ResultItem::fqrn(role_fqrn(&meta, &project_dir)?)),
                None => result_set.push(ResultItem::error(ItemError::new(
                    "NO_ROLE_META",
                    format!("{} has no galaxy_info", normalize_path(&meta_path)),
                ))),
            }
            emit(&result_set, render_config)?;
        }

        Commands::Env { shell } => {
            let options = resolve_options(&cli, Vec::new(), Vec::new())?;
            let vars = ansible_env(&options.cache_dir, |key| std::env::var(key).ok());
            if *shell {
                for (name, value) in vars {
                    println!("export {}={}", name, shell_quote(&value));
                }
            } else {
                let result_set: ResultSet = vars
                    .into_iter()
                    .map(|(name, value)| ResultItem::env(name, value))
                    .collect();
                emit(&result_set, render_config)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prepare() {
        let cli = Cli::try_parse_from([
            "lintmock",
            "--cache-dir",
            "/cache",
            "prepare",
            "--mock-role",
            "web",
            "--mock-role",
            "acme.tools.db",
            "--mock-module",
            "foo",
        ])
        .unwrap();

        assert_eq!(cli.cache_dir, Some(PathBuf::from("/cache")));
        match cli.command {
            Commands::Prepare {
                mock_roles,
                mock_modules,
            } => {
                assert_eq!(mock_roles, vec!["web", "acme.tools.db"]);
                assert_eq!(mock_modules, vec!["foo"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_stub_path_requires_module() {
        assert!(Cli::try_parse_from(["lintmock", "stub-path"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["lintmock", "env", "--shell", "-v", "--format", "raw"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.format, "raw");
        assert!(matches!(cli.command, Commands::Env { shell: true }));
    }
}
