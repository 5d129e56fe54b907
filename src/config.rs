use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context as _;
use url::Url;

pub const BACKEND_URL_ENV: &str = "TRAFFIC_WIZARD_BACKEND_URL";
pub const PUBLIC_ORIGIN_ENV: &str = "TRAFFIC_WIZARD_PUBLIC_ORIGIN";
pub const REQUEST_TIMEOUT_ENV: &str = "TRAFFIC_WIZARD_REQUEST_TIMEOUT_SECS";

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_PUBLIC_ORIGIN: &str = "http://127.0.0.1:3000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Process-wide settings, built once at startup and handed to every loader.
#[derive(Debug, Clone)]
pub struct Config {
    backend_url: Url,
    public_origin: Url,
    request_timeout: Duration,
}

impl Config {
    pub fn new(backend_url: &str, public_origin: &str) -> anyhow::Result<Self> {
        Ok(Self {
            backend_url: parse_origin(backend_url).context("parse backend url")?,
            public_origin: parse_origin(public_origin).context("parse public origin")?,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        })
    }

    /// Reads the environment. `backend_override` wins over the env var (CLI flag).
    pub fn from_env(backend_override: Option<&str>) -> anyhow::Result<Self> {
        let backend = backend_override
            .map(str::to_owned)
            .or_else(|| non_empty_env(BACKEND_URL_ENV))
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned());
        let origin =
            non_empty_env(PUBLIC_ORIGIN_ENV).unwrap_or_else(|| DEFAULT_PUBLIC_ORIGIN.to_owned());
        let timeout = parse_timeout_secs(non_empty_env(REQUEST_TIMEOUT_ENV).as_deref());

        Ok(Self::new(&backend, &origin)?.with_request_timeout(Duration::from_secs(timeout)))
    }

    /// Same as [`Config::from_env`], but a missing public origin is derived from
    /// the address the dashboard listens on.
    pub fn for_listener(addr: SocketAddr, backend_override: Option<&str>) -> anyhow::Result<Self> {
        let mut config = Self::from_env(backend_override)?;
        if non_empty_env(PUBLIC_ORIGIN_ENV).is_none() {
            config.public_origin =
                parse_origin(&format!("http://{addr}")).context("derive public origin")?;
        }
        Ok(config)
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn backend_url(&self) -> &Url {
        &self.backend_url
    }

    pub fn public_origin(&self) -> &Url {
        &self.public_origin
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// `{backend}/api`, without a trailing slash.
    pub fn api_base(&self) -> String {
        format!("{}/api", origin_str(&self.backend_url))
    }

    pub fn api_endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base(), path.trim_start_matches('/'))
    }

    pub fn public_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            origin_str(&self.public_origin),
            path.trim_start_matches('/')
        )
    }
}

fn parse_origin(raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("invalid url: {raw}"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("url scheme must be http/https: {raw}");
    }
    if url.host_str().is_none() {
        anyhow::bail!("url must include host: {raw}");
    }
    Ok(url)
}

fn origin_str(url: &Url) -> &str {
    url.as_str().trim_end_matches('/')
}

fn parse_timeout_secs(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| (1..=300).contains(v))
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
