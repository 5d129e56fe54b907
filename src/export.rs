use std::fmt;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use serde::Deserialize;

use crate::api::ContentApi;
use crate::cli::{ExportArgs, LinksArgs};
use crate::config::Config;
use crate::model::ContentRecord;
use crate::paths;

/// How long a "Copied" acknowledgement stays before reverting.
pub const COPY_ACK: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
    Html,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [Self::Json, Self::Csv, Self::Html];

    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Html => "html",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv; charset=utf-8",
            Self::Html => "text/html; charset=utf-8",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Csv => "CSV",
            Self::Html => "HTML",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// `content_{id}.{format}`
pub fn download_file_name(content_id: &str, format: ExportFormat) -> String {
    format!("content_{content_id}.{}", format.extension())
}

#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ExportedFile {
    pub fn new(content_id: &str, format: ExportFormat, bytes: Vec<u8>) -> Self {
        Self {
            file_name: download_file_name(content_id, format),
            bytes,
        }
    }

    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.file_name)
    }

    /// Writes the file into `dir`. Existing files are kept unless `force`.
    pub fn save_to(&self, dir: &Path, force: bool) -> anyhow::Result<PathBuf> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create export output dir: {}", dir.display()))?;

        let out = dir.join(&self.file_name);
        let mut options = OpenOptions::new();
        options.write(true);
        if force {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }
        let mut file = options
            .open(&out)
            .with_context(|| format!("open output: {}", out.display()))?;
        file.write_all(&self.bytes)
            .with_context(|| format!("write output: {}", out.display()))?;
        file.flush()
            .with_context(|| format!("flush output: {}", out.display()))?;
        Ok(out)
    }
}

/// The URLs the export dialog offers for copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    pub share_url: String,
    pub sitemap_url: String,
}

impl ShareLinks {
    pub fn for_record(config: &Config, record: &ContentRecord) -> Self {
        Self {
            share_url: config.public_url(&paths::share(record.public_id())),
            sitemap_url: config.api_endpoint("sitemap.xml"),
        }
    }
}

pub async fn run(api: &dyn ContentApi, args: ExportArgs) -> anyhow::Result<()> {
    let out_dir = PathBuf::from(&args.out_dir);
    let target = out_dir.join(download_file_name(&args.id, args.format));
    if target.exists() && !args.force {
        anyhow::bail!("export output already exists: {}", target.display());
    }

    tracing::info!(id = %args.id, format = %args.format, out = %target.display(), "export content");
    let file = match api.export_content(&args.id, args.format).await {
        Ok(file) => file,
        Err(err) => {
            tracing::error!(id = %args.id, ?err, "export failed");
            return Err(anyhow::Error::new(err).context("Failed to export content"));
        }
    };
    let written = file.save_to(&out_dir, args.force)?;
    println!("Exported {}", written.display());
    Ok(())
}

pub async fn links(api: &dyn ContentApi, config: &Config, args: LinksArgs) -> anyhow::Result<()> {
    let record = api
        .get_content(&args.id)
        .await
        .with_context(|| format!("load content {}", args.id))?;
    let links = ShareLinks::for_record(config, &record);
    println!("share: {}", links.share_url);
    println!("sitemap: {}", links.sitemap_url);
    Ok(())
}

pub async fn print_site_file(api: &dyn ContentApi, name: &str) -> anyhow::Result<()> {
    let text = api
        .site_file(name)
        .await
        .with_context(|| format!("fetch {name}"))?;
    print!("{text}");
    if !text.ends_with('\n') {
        println!();
    }
    Ok(())
}
