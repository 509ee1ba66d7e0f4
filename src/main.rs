//! CLI entry point for git-tree-structure

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use git_tree_structure::{
    Error, Forest, GitPathSource, IndentStyle, ListingOptions, OutputConfig, OutputFormat,
    REPO_ROOT, Result, TreeFormatter, render,
};
use tracing::{Level, debug, error, info};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "git-tree-structure")]
#[command(about = "Generate YAML or a tree listing from a git repository's structure")]
#[command(version)]
struct Args {
    /// Directories in the repository to display (default: the whole repository)
    roots: Vec<PathBuf>,

    /// Path inside the git repository (default: current directory)
    #[arg(long = "repo", value_name = "PATH")]
    repo: Option<PathBuf>,

    /// Without ROOTS, display the --repo directory instead of the repository root
    #[arg(long = "no-repo-as-root")]
    no_repo_as_root: bool,

    /// Output file (default: print to stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "yaml")]
    format: OutputFormat,

    /// Indentation character
    #[arg(long, default_value = "spaces")]
    indent: IndentStyle,

    /// Spaces per YAML nesting level
    #[arg(long = "indent-width", default_value = "2")]
    indent_width: usize,

    /// Control color output of the tree format: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Patterns to exclude (can be used multiple times)
    #[arg(short = 'x', long = "exclude", value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Hide untracked files
    #[arg(long = "no-others")]
    no_others: bool,

    /// Hide staged files
    #[arg(long = "no-stage")]
    no_stage: bool,

    /// Show cached/tracked files
    #[arg(long)]
    cached: bool,

    /// Also show untracked files matched by .gitignore
    #[arg(long = "no-exclude-standard")]
    no_exclude_standard: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    setup_tracing(args.verbose);
    debug!("Parsed CLI arguments: {args:?}");

    if let Err(e) = run(&args) {
        error!("{e}");
        process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only the rendered structure.
fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .init();
}

fn run(args: &Args) -> Result<()> {
    let base = args.repo.clone().unwrap_or_else(|| PathBuf::from("."));
    let source = GitPathSource::discover(&base)?;
    let roots = resolve_roots(&source, &base, args)?;
    debug!("Using roots: {roots:?}");

    let options = ListingOptions {
        others: !args.no_others,
        stage: !args.no_stage,
        cached: args.cached,
        exclude_standard: !args.no_exclude_standard,
        exclude: args.exclude.clone(),
    };
    debug!("Using options: {options:?}");

    let mut forest = Forest::new();
    for root in &roots {
        forest.add_root(root);
        for path in source.list(root, &options)? {
            forest.insert_path(&path, root);
        }
    }

    let (dir_count, file_count) = forest.counts();
    debug!("{} directories, {} files", dir_count, file_count);
    if forest.is_empty() {
        info!("No matching files found in the repository with the specified options");
    }

    let config = OutputConfig {
        indent: args.indent,
        indent_width: args.indent_width,
        use_color: false,
    };

    match &args.output {
        Some(path) => {
            let content = render(&forest, args.format, &config);
            fs::write(path, content).map_err(|e| Error::io(path, e))?;
            info!("Output written to {}", path.display());
        }
        None if args.format == OutputFormat::Tree => {
            let config = OutputConfig {
                use_color: should_use_color(args.color),
                ..config
            };
            TreeFormatter::new(config)
                .print(&forest)
                .map_err(Error::Write)?;
        }
        None => {
            let content = render(&forest, args.format, &config);
            io::stdout()
                .write_all(content.as_bytes())
                .map_err(Error::Write)?;
        }
    }
    Ok(())
}

/// Turn the requested roots into repository-relative labels, keeping the
/// first occurrence of each.
fn resolve_roots(source: &GitPathSource, base: &Path, args: &Args) -> Result<Vec<String>> {
    if args.roots.is_empty() {
        let root = if args.no_repo_as_root {
            source.relative_root(base)?
        } else {
            REPO_ROOT.to_string()
        };
        debug!("No roots provided, using {}", root);
        return Ok(vec![root]);
    }

    let mut roots = Vec::new();
    for path in &args.roots {
        let root = source.relative_root(path)?;
        debug!("Resolved {} to {}", path.display(), root);
        if !roots.contains(&root) {
            roots.push(root);
        }
    }
    Ok(roots)
}
