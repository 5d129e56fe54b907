use clap::{Args, Parser, Subcommand};

use crate::export::ExportFormat;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Backend base URL (overrides `TRAFFIC_WIZARD_BACKEND_URL`).
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show analytics and the content list.
    List(ListArgs),
    /// Show one content record with its analyses.
    Show(ShowArgs),
    /// Submit a URL or manual text for analysis.
    Add(AddArgs),
    Delete(DeleteArgs),
    /// Re-run the analysis of a content record.
    Refresh(RefreshArgs),
    Export(ExportArgs),
    /// Print the share and sitemap URLs of a content record.
    Links(LinksArgs),
    /// Print the backend's generated sitemap.
    Sitemap,
    /// Print the backend's generated robots.txt.
    Robots,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show at most this many records.
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,

    /// Print the raw record and queries as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Page to crawl and analyze.
    #[arg(long, conflicts_with_all = ["title", "content"])]
    pub url: Option<String>,

    /// Title of manually entered content.
    #[arg(long)]
    pub title: Option<String>,

    /// Body of manually entered content.
    #[arg(long)]
    pub content: Option<String>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub id: String,

    /// Skip the confirmation prompt.
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Debug, Args)]
pub struct RefreshArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    pub id: String,

    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Directory the `content_{id}.{format}` file is written to.
    #[arg(long, default_value = ".")]
    pub out_dir: String,

    /// Overwrite an existing export file.
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct LinksArgs {
    pub id: String,
}
