use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;
use traffic_wizard::api::HttpContentApi;
use traffic_wizard::cli::{Cli, Command};
use traffic_wizard::config::Config;
use traffic_wizard::{add_content, dashboard, detail, export, logging};

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    logging::init(logging::DEFAULT_DIRECTIVE).context("init logging")?;

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    let config = Config::from_env(cli.backend_url.as_deref()).context("load config")?;
    let api = HttpContentApi::new(config.clone()).context("build backend client")?;

    match cli.command {
        Command::List(args) => dashboard::list(&api, args).await.context("list")?,
        Command::Show(args) => detail::show(&api, args).await.context("show")?,
        Command::Add(args) => add_content::run(&api, args).await.context("add")?,
        Command::Delete(args) => dashboard::delete(&api, args).await.context("delete")?,
        Command::Refresh(args) => detail::run_refresh(&api, args)
            .await
            .context("refresh")?,
        Command::Export(args) => export::run(&api, args).await.context("export")?,
        Command::Links(args) => export::links(&api, &config, args)
            .await
            .context("links")?,
        Command::Sitemap => export::print_site_file(&api, "sitemap.xml")
            .await
            .context("sitemap")?,
        Command::Robots => export::print_site_file(&api, "robots.txt")
            .await
            .context("robots")?,
    }

    Ok(())
}
