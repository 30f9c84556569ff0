use blog_domain::{PostId, Theme};
use clap::{Args, Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blog")]
#[command(about = "Browse, search, and write blog posts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the config file (or set BLOG_CONFIG env var)
    #[arg(long, global = true, value_name = "FILE", env = "BLOG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to the local store file (or set BLOG_STORE env var)
    #[arg(long, global = true, value_name = "FILE", env = "BLOG_STORE")]
    pub store: Option<PathBuf>,

    /// Posts endpoint URL (or set BLOG_ENDPOINT env var)
    #[arg(long, global = true, value_name = "URL", env = "BLOG_ENDPOINT")]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List posts, one page at a time
    List(ListArgs),
    /// Show a single post
    Show {
        #[arg(long, allow_negative_numbers = true)]
        id: PostId,
    },
    /// Write a new post
    Create(CreateArgs),
    /// List your own posts
    Profile {
        #[arg(long, short)]
        query: Option<String>,
    },
    /// Show or change the theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// Open a page by path, e.g. `/blogs?q=rust` or `/blog/3`
    Open {
        #[arg(value_name = "PATH")]
        path: String,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct ListArgs {
    /// Only show posts whose title or body contains this text
    #[arg(long, short)]
    pub query: Option<String>,
    /// Page number, starting at 1
    #[arg(long, short, default_value_t = 1)]
    pub page: usize,
    /// Posts per page (defaults to the configured size)
    #[arg(long)]
    pub page_size: Option<NonZeroUsize>,
}

#[derive(Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub body: String,
}

#[derive(Subcommand, Clone, Copy)]
pub enum ThemeAction {
    /// Print the current theme
    Get,
    /// Set the theme
    Set {
        #[arg(value_name = "THEME")]
        theme: Theme,
    },
    /// Switch between light and dark
    Toggle,
}
