use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_port: u16,
    pub markdown_dir: PathBuf,
    pub static_dir: PathBuf,
    pub cors_enabled: bool,
    pub body_max_bytes: usize,
    pub is_production: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let markdown_dir = lookup("MARKDOWN_DIR")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| anyhow::anyhow!("MARKDOWN_DIR environment variable is required"))?;
        let markdown_dir = PathBuf::from(markdown_dir);
        if !markdown_dir.is_dir() {
            anyhow::bail!(
                "Markdown directory does not exist: {}",
                markdown_dir.display()
            );
        }

        let api_port = lookup("API_PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);
        let static_dir = lookup("STATIC_DIR")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "./dist".into());
        // CORS stays on unless explicitly disabled
        let cors_enabled = !matches!(
            lookup("CORS_ENABLED").as_deref().map(str::trim),
            Some("false") | Some("0") | Some("no")
        );
        let body_max_bytes = lookup("BODY_MAX_BYTES")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1024 * 1024);
        let is_production = matches!(
            lookup("RUST_ENV").as_deref(),
            Some("production") | Some("prod")
        );

        Ok(Self {
            api_port,
            markdown_dir,
            static_dir: PathBuf::from(static_dir),
            cors_enabled,
            body_max_bytes,
            is_production,
        })
    }
}
