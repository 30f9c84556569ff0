mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("BLOG_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::output_error(&format!("{:#}", e));
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "blog", &mut std::io::stdout());
        return Ok(());
    }

    let ctx = CliContext::load(&cli)?;

    match cli.command {
        Commands::List(args) => handlers::listing::handle(&ctx, args).await,
        Commands::Show { id } => handlers::post::show(&ctx, id).await,
        Commands::Create(args) => handlers::post::create(&ctx, args).await,
        Commands::Profile { query } => handlers::profile::handle(&ctx, query).await,
        Commands::Theme { action } => handlers::theme::handle(&ctx, action).await,
        Commands::Open { path } => handlers::route::open(&ctx, &path).await,
        Commands::Completions { .. } => Ok(()),
    }
}
