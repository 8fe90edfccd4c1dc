mod cmd;

use clap::{Parser, Subcommand};
use speckit_core::types::DocKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "speckit",
    about = "Spec-Kit 辅助工具 — scaffold spec-driven development artifacts",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root directory
    #[arg(
        long = "project-root",
        short = 'p',
        global = true,
        default_value = ".",
        env = "SPECKIT_ROOT"
    )]
    project_root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a spec-kit project (directories + config.json)
    Init {
        /// Project name
        #[arg(long, short = 'n')]
        name: Option<String>,

        /// AI agent identifier recorded in the config
        #[arg(long, short = 'a', default_value = "claude")]
        agent: String,
    },

    /// Create a feature specification
    Spec {
        /// Feature name
        #[arg(long, short = 'n')]
        name: Option<String>,

        /// Motivation text inserted into the specification
        #[arg(long, short = 'd')]
        description: Option<String>,
    },

    /// Create an implementation plan
    Plan {
        /// Feature name
        #[arg(long, short = 'n')]
        name: Option<String>,
    },

    /// Create a task breakdown
    Tasks {
        /// Feature name
        #[arg(long, short = 'n')]
        name: Option<String>,
    },

    /// List existing feature specifications
    List,

    /// Print the AI assistant workflow for a feature
    Workflow {
        /// Feature name
        #[arg(long, short = 'n')]
        name: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = cli.project_root;

    let result = match cli.command {
        Commands::Init { name, agent } => {
            let name = require_name(name, "❌ 初始化项目需要提供项目名称 (--name)");
            cmd::init::run(&root, &name, &agent)
        }
        Commands::Spec { name, description } => {
            let name = require_name(name, "❌ 创建规范需要提供功能名称 (--name)");
            cmd::document::run(&root, DocKind::Spec, &name, description.as_deref())
        }
        Commands::Plan { name } => {
            let name = require_name(name, "❌ 创建计划需要提供功能名称 (--name)");
            cmd::document::run(&root, DocKind::Plan, &name, None)
        }
        Commands::Tasks { name } => {
            let name = require_name(name, "❌ 创建任务需要提供功能名称 (--name)");
            cmd::document::run(&root, DocKind::Tasks, &name, None)
        }
        Commands::List => cmd::list::run(&root),
        Commands::Workflow { name } => {
            let name = require_name(name, "❌ 生成工作流需要提供功能名称 (--name)");
            cmd::workflow::run(&root, &name)
        }
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

/// Usage errors are controlled exits, distinct from the `error:` crash
/// path for I/O failures.
fn require_name(name: Option<String>, message: &str) -> String {
    match name {
        Some(n) => n,
        None => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    }
}
