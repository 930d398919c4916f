use std::env;

const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_API_BASE_URI: &str = "/api/map";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub api_base_uri: String,
    pub db_max_connections: u32,
    /// 为空时允许任意来源跨域
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        Ok(Config {
            database_url: env::var("DATABASE_URL")?,
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.into()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            api_base_uri: env::var("API_BASE_URI")
                .map(|v| normalize_base_uri(&v))
                .unwrap_or_else(|_| DEFAULT_API_BASE_URI.into()),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_default(),
        })
    }

    /// 测试和本地调试用的默认配置
    pub fn with_database_url(database_url: impl Into<String>) -> Self {
        Config {
            database_url: database_url.into(),
            server_host: DEFAULT_SERVER_HOST.into(),
            server_port: DEFAULT_SERVER_PORT,
            api_base_uri: DEFAULT_API_BASE_URI.into(),
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            cors_allowed_origins: Vec::new(),
        }
    }
}

// axum 的 nest 要求以 `/` 开头且不以 `/` 结尾，不支持挂在根路径
fn normalize_base_uri(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        tracing::warn!(
            "API_BASE_URI {:?} cannot mount at root, falling back to {}",
            raw,
            DEFAULT_API_BASE_URI
        );
        DEFAULT_API_BASE_URI.into()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

// 逗号分隔的来源列表
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_uri_is_normalized() {
        assert_eq!(normalize_base_uri("/api/map/"), "/api/map");
        assert_eq!(normalize_base_uri("api/v2"), "/api/v2");
        assert_eq!(normalize_base_uri("  /"), DEFAULT_API_BASE_URI);
    }

    #[test]
    fn defaults_for_local_runs() {
        let config = Config::with_database_url("postgres://localhost/markers");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.api_base_uri, "/api/map");
        assert_eq!(config.db_max_connections, 10);
        assert!(config.cors_allowed_origins.is_empty());
    }

    #[test]
    fn origins_are_split_and_trimmed() {
        assert_eq!(
            parse_origins(" http://localhost:3000/, ,https://map.example.com"),
            vec!["http://localhost:3000", "https://map.example.com"]
        );
        assert!(parse_origins("").is_empty());
    }
}
