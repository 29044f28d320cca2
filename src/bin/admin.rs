//! CLI administration tool for napkins-web.
//!
//! Provides commands for verifying a deployment and rendering pages offline
//! without starting the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Verify config, assets and template rendering
//! cargo run --bin admin -- check
//!
//! # Same report as JSON, for CI
//! cargo run --bin admin -- check --json
//!
//! # Render a content fragment inside the full shell
//! cargo run --bin admin -- render fragment.html
//! echo "<p>maintenance</p>" | cargo run --bin admin -- render
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (see the `config` module). Everything has a default,
//! so `admin check` works out of the box against the working directory.
//!
//! # Features
//!
//! - **Deployment Checks**: Config, metadata, assets, template rendering
//! - **Offline Rendering**: Compose maintenance or export pages from stdin
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use napkins_web::assets::{AssetManifest, EXPECTED_ASSETS, STYLESHEET};
use napkins_web::config;
use napkins_web::shell::{PageShell, SiteMetadata, WIDE_BREAKPOINT_PX, wide_media_block};
use napkins_web::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// CLI tool for managing napkins-web deployments.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Verify configuration, assets and template rendering
    Check {
        /// Emit the report as JSON instead of colored text
        #[arg(long)]
        json: bool,
    },

    /// Render a content fragment inside the full shell
    Render {
        /// Fragment file; reads stdin when omitted
        file: Option<PathBuf>,
    },
}

/// Deployment check report, also serialized for `--json`.
#[derive(Serialize)]
struct CheckReport {
    status: &'static str,
    items: Vec<CheckItem>,
}

/// One verified component.
#[derive(Serialize)]
struct CheckItem {
    name: &'static str,
    ok: bool,
    detail: String,
}

impl CheckItem {
    fn pass(name: &'static str, detail: String) -> Self {
        Self {
            name,
            ok: true,
            detail,
        }
    }

    fn fail(name: &'static str, detail: String) -> Self {
        Self {
            name,
            ok: false,
            detail,
        }
    }
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { json } => run_check(json),
        Commands::Render { file } => run_render(file),
    }
}

/// Runs every deployment check and prints the report.
///
/// # Checks
///
/// 1. **config**: Environment variables load and validate
/// 2. **site metadata**: The base URL yields canonical and preview URLs
/// 3. **static assets**: Expected files are present (missing only degrades)
/// 4. **templates**: A probe fragment renders through the full shell
/// 5. **breakpoint**: The wide media block carries the layout rules
///
/// # Exit Code
///
/// Non-zero when config, metadata, rendering or the breakpoint check fail;
/// an unreadable stylesheet counts as a breakpoint failure. Missing asset
/// binaries only mark the report degraded; the site still serves without
/// them.
fn run_check(json: bool) -> Result<()> {
    let report = run_checks();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if report.status == "failed" {
        anyhow::bail!("deployment check failed");
    }

    Ok(())
}

/// Builds the check report without printing or exiting.
fn run_checks() -> CheckReport {
    let mut items: Vec<CheckItem> = Vec::new();
    let mut failed = false;

    let config = match config::load_from_env() {
        Ok(config) => {
            items.push(CheckItem::pass(
                "config",
                format!("listen {}, base {}", config.listen_addr, config.base_url),
            ));
            Some(config)
        }
        Err(e) => {
            items.push(CheckItem::fail("config", format!("{e:#}")));
            failed = true;
            None
        }
    };

    let mut shell = None;
    if let Some(config) = &config {
        match SiteMetadata::for_base(&config.base_url) {
            Ok(site) => {
                items.push(CheckItem::pass(
                    "site metadata",
                    format!("canonical {}", site.canonical_url),
                ));

                let assets = AssetManifest::resolve(config.static_dir.as_str());
                if assets.is_complete() {
                    items.push(CheckItem::pass(
                        "static assets",
                        format!("all {} expected files present", EXPECTED_ASSETS.len()),
                    ));
                } else {
                    items.push(CheckItem::fail(
                        "static assets",
                        format!("missing: {}", assets.missing().join(", ")),
                    ));
                }

                shell = Some(PageShell::new(
                    site,
                    assets,
                    config.analytics_domain.clone(),
                ));
            }
            Err(e) => {
                items.push(CheckItem::fail("site metadata", e.to_string()));
                failed = true;
            }
        }
    }

    if let Some(shell) = &shell {
        match shell.render_around("<p>admin probe</p>") {
            Ok(html) => items.push(CheckItem::pass(
                "templates",
                format!("rendered {} bytes", html.len()),
            )),
            Err(e) => {
                items.push(CheckItem::fail("templates", e.to_string()));
                failed = true;
            }
        }

        let needle = format!("(min-width: {WIDE_BREAKPOINT_PX}px)");
        match fs::read_to_string(shell.assets.root_file(STYLESHEET)) {
            Ok(css) => match wide_media_block(&css) {
                Some(block) if has_wide_layout_rules(block) => {
                    items.push(CheckItem::pass(
                        "breakpoint",
                        format!("{needle} block carries the wide layout"),
                    ));
                }
                Some(_) => {
                    items.push(CheckItem::fail(
                        "breakpoint",
                        format!("{needle} block lacks the header or footer rules"),
                    ));
                    failed = true;
                }
                None => {
                    items.push(CheckItem::fail(
                        "breakpoint",
                        format!("stylesheet has no {needle} block"),
                    ));
                    failed = true;
                }
            },
            Err(e) => {
                items.push(CheckItem::fail(
                    "breakpoint",
                    format!("stylesheet not readable: {e}"),
                ));
                failed = true;
            }
        }
    }

    let degraded = items.iter().any(|item| !item.ok);
    let status = if failed {
        "failed"
    } else if degraded {
        "degraded"
    } else {
        "ok"
    };

    CheckReport { status, items }
}

/// The wide block must reveal the header call-to-action and switch the
/// footer to a row.
fn has_wide_layout_rules(block: &str) -> bool {
    block.contains(".wide-only")
        && block.contains("inline-flex")
        && block.contains(".site-footer")
        && block.contains("flex-direction: row")
}

/// Prints the colored text form of the report.
fn print_report(report: &CheckReport) {
    println!("{}", "🔍 Deployment Check".bright_blue().bold());
    println!();

    for item in &report.items {
        let mark = if item.ok { "✓".green() } else { "✗".red() };
        println!(
            "  {} {:<14} {}",
            mark,
            item.name.bright_white(),
            item.detail.bright_black()
        );
    }

    println!();
    match report.status {
        "ok" => println!("{}", "✅ All checks passed".green().bold()),
        "degraded" => println!(
            "{}",
            "⚠️  Serving degraded: missing static assets".yellow().bold()
        ),
        _ => println!("{}", "❌ Check failed".red().bold()),
    }
    println!();
}

/// Renders a fragment from a file or stdin inside the full shell.
///
/// The composed document is written to stdout, ready to be saved as a
/// static maintenance page or inspected by hand.
fn run_render(file: Option<PathBuf>) -> Result<()> {
    let fragment = match file {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let config = config::load_from_env()?;
    let state = AppState::from_config(&config)?;
    let html = state.shell.render_around(fragment.trim_end())?;

    println!("{html}");
    Ok(())
}
