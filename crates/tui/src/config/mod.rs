use clap::Parser;
use serde::Deserialize;

use crate::error::{AppError, Result};

const DEFAULT_CONFIG_PATH: &str = "config/tui.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root of the Birdie API, including the `/api` prefix.
    pub base_url: String,
    /// Name to prefill on the join screen when the session has none.
    pub user_name: String,
    pub timezone: String,
    pub session_path: String,
    pub log_file: String,
    pub log_level: String,
    /// Forget the stored session on start.
    pub fresh: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000/api".to_string(),
            user_name: String::new(),
            timezone: "UTC".to_string(),
            session_path: "config/birdie_session.json".to_string(),
            log_file: "config/birdie_tui.log".to_string(),
            log_level: "info".to_string(),
            fresh: false,
        }
    }
}

impl AppConfig {
    pub fn timezone(&self) -> Result<chrono_tz::Tz> {
        self.timezone
            .parse::<chrono_tz::Tz>()
            .map_err(|_| AppError::Timezone(self.timezone.clone()))
    }
}

#[derive(Debug, Parser)]
#[command(name = "birdie_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override base URL (e.g. http://127.0.0.1:8000/api).
    #[arg(long)]
    base_url: Option<String>,
    /// Override the name used to join or create outings.
    #[arg(long)]
    name: Option<String>,
    /// Override timezone (IANA name).
    #[arg(long)]
    timezone: Option<String>,
    /// Override session file path.
    #[arg(long)]
    session: Option<String>,
    /// Start without the stored session.
    #[arg(long)]
    fresh: bool,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("BIRDIE_TUI"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    if let Some(name) = args.name {
        settings.user_name = name;
    }
    if let Some(timezone) = args.timezone {
        settings.timezone = timezone;
    }
    if let Some(session) = args.session {
        settings.session_path = session;
    }
    if args.fresh {
        settings.fresh = true;
    }

    Ok(settings)
}
