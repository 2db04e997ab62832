// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use clap::{Parser, Subcommand};
use paginate_tag_cli::commands;
use paginate_tag_cli::commands::render::RenderArgs;
use paginate_tag_cli::config::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "paginate-tag")]
#[command(author = "Maravilla Labs")]
#[command(version)]
#[command(about = "Apply the paginate directive to a JSON context", long_about = None)]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Config file (defaults to ./paginate-tag.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse directive markup and print its fields
    Check {
        /// Markup following the directive name, e.g. "blog.articles by 5"
        markup: String,
    },
    /// Paginate a collection in a JSON context
    Render {
        /// JSON file holding the rendering context
        #[arg(long)]
        context: PathBuf,
        /// Markup following the directive name, e.g. "blog.articles by 5"
        #[arg(short, long)]
        markup: String,
        /// Request URL, e.g. "https://example.com/blog?page=2"; a bare path uses [request] from the config
        #[arg(short, long, default_value = "/")]
        url: String,
        /// Page to render, overriding the one in --url
        #[arg(short, long)]
        page: Option<String>,
        /// Body with {{ path }} placeholders; prints the context when omitted
        #[arg(short, long)]
        body: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with the specified log level
    let filter = EnvFilter::try_new(&cli.log_level)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let output = match cli.command {
        Commands::Check { markup } => commands::check::run(&markup)?,
        Commands::Render { context, markup, url, page, body } => {
            let config = Config::load(cli.config.as_deref())?;
            let args = RenderArgs { context, markup, url, page, body };
            commands::render::run(&args, &config)?
        }
    };

    println!("{}", output);
    Ok(())
}
