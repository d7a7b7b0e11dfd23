use crate::util::env::{get_bool_from_env_or, get_env_or, get_size_from_env_or, load_dotenv};
use anyhow::{bail, Result};

pub mod db;

#[derive(Debug, Clone)]
pub struct AppConfig {
    // Basic app info
    pub app_name: String,

    // App settings
    pub static_url: String,
    pub static_path: String,

    // Server settings
    pub http: HTTPConfig,
    pub db: DBConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone)]
pub struct HTTPConfig {
    pub ip: String,
    pub port: u16,
    pub max_body_size: u64,
}

#[derive(Debug, Clone)]
pub struct DBConfig {
    pub url: String,
    pub pool_size: u32,
    pub auto_migrate: bool,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub log_requests: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        load_dotenv();

        let app_name = get_env_or("APP_NAME", "Simple Blog".to_string())?;
        let static_url = get_env_or("STATIC_URL", "/static".to_string())?;
        let static_path = get_env_or("STATIC_PATH", "./static".to_string())?;

        Ok(AppConfig {
            app_name,
            static_url,
            static_path,

            http: HTTPConfig::from_env()?,
            db: DBConfig::from_env()?,
            log: LogConfig::from_env()?,
        })
    }

    /// Rejects settings that would only fail later, at bind or connect time.
    pub fn validate(&self) -> Result<()> {
        if !self.static_url.starts_with('/') {
            bail!("STATIC_URL must start with '/': {}", self.static_url);
        }
        if self.http.max_body_size == 0 {
            bail!("HTTP_MAX_BODY_SIZE must be greater than zero");
        }
        if self.db.pool_size == 0 {
            bail!("DATABASE_POOL_SIZE must be greater than zero");
        }
        Ok(())
    }
}

impl HTTPConfig {
    pub fn from_env() -> Result<Self> {
        load_dotenv();

        let ip = get_env_or("HTTP_IP", "127.0.0.1".to_string())?;
        let port = get_env_or("HTTP_PORT", 8000)?;
        let max_body_size = get_size_from_env_or("HTTP_MAX_BODY_SIZE", 1024 * 1024)?;

        Ok(HTTPConfig {
            ip,
            port,
            max_body_size,
        })
    }
}

impl DBConfig {
    pub fn from_env() -> Result<Self> {
        load_dotenv();

        let url = get_env_or("DATABASE_URL", "sqlite:simpleblog.db".to_string())?;
        let pool_size = get_env_or("DATABASE_POOL_SIZE", 5)?;
        let auto_migrate = get_bool_from_env_or("DATABASE_AUTO_MIGRATE", true)?;

        Ok(DBConfig {
            url,
            pool_size,
            auto_migrate,
        })
    }
}

impl LogConfig {
    pub fn from_env() -> Result<Self> {
        load_dotenv();

        let log_requests = get_bool_from_env_or("LOG_REQUESTS", false)?;

        Ok(LogConfig { log_requests })
    }
}
