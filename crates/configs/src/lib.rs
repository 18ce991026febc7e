use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub upstreams: UpstreamsConfig,
    #[serde(default)]
    pub join: JoinConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 1 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_acquire_timeout() -> u64 { 30 }

/// Where destination records live.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    Database,
}

impl std::str::FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "database" | "db" => Ok(Self::Database),
            other => Err(anyhow!("unknown store backend `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    /// Preload the five sample destinations into the in-memory store.
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,
}

fn default_seed_sample_data() -> bool { true }

impl Default for StoreConfig {
    fn default() -> Self {
        Self { backend: StoreBackend::Memory, seed_sample_data: default_seed_sample_data() }
    }
}

/// Fixed collection endpoints of the remote collaborators.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamsConfig {
    #[serde(default = "default_pajak_url")]
    pub pajak_url: String,
    #[serde(default = "default_tour_guide_url")]
    pub tour_guide_url: String,
    #[serde(default = "default_asuransi_url")]
    pub asuransi_url: String,
    #[serde(default = "default_hotel_url")]
    pub hotel_url: String,
    #[serde(default = "default_bank_url")]
    pub bank_url: String,
}

fn default_pajak_url() -> String { "https://example.com/api/pajak".into() }
fn default_tour_guide_url() -> String { "https://example.com/api/tourguide".into() }
fn default_asuransi_url() -> String { "https://example.com/api/asuransi".into() }
fn default_hotel_url() -> String { "https://example.com/api/hotel".into() }
fn default_bank_url() -> String { "https://example.com/api/bank".into() }

impl Default for UpstreamsConfig {
    fn default() -> Self {
        Self {
            pajak_url: default_pajak_url(),
            tour_guide_url: default_tour_guide_url(),
            asuransi_url: default_asuransi_url(),
            hotel_url: default_hotel_url(),
            bank_url: default_bank_url(),
        }
    }
}

/// How a joined view pairs destinations with remote records.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum JoinStrategy {
    /// Every destination with every remote record.
    Cartesian,
    /// Position by position, padding the shorter side with nulls.
    #[default]
    Zip,
    /// Destination foreign key matched against the remote identity (left join).
    Keyed,
}

impl JoinStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinStrategy::Cartesian => "cartesian",
            JoinStrategy::Zip => "zip",
            JoinStrategy::Keyed => "keyed",
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct JoinConfig {
    #[serde(default)]
    pub pajak: JoinStrategy,
    #[serde(default)]
    pub tour_guide: JoinStrategy,
    #[serde(default)]
    pub asuransi: JoinStrategy,
    #[serde(default)]
    pub hotel: JoinStrategy,
    #[serde(default)]
    pub bank: JoinStrategy,
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` (or `CONFIG_PATH`), falling back to defaults when the
    /// file is missing, then apply environment overrides and validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = match load_default() {
            Ok(cfg) => cfg,
            Err(e) if is_not_found(&e) => AppConfig::default(),
            Err(e) => return Err(e),
        };
        cfg.apply_env();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides read through `lookup`, keyed by environment variable name.
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT").and_then(|p| p.parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Some(threads) = lookup("TOKIO_WORKER_THREADS").and_then(|w| w.parse::<usize>().ok()) {
            self.server.worker_threads = Some(threads);
        }
        if let Some(backend) = lookup("STORE_BACKEND").and_then(|b| b.parse().ok()) {
            self.store.backend = backend;
        }
        if self.database.url.trim().is_empty() {
            if let Some(url) = lookup("DATABASE_URL") {
                self.database.url = url;
            }
        }
        self.upstreams.apply_env_from(&lookup);
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        if self.store.backend == StoreBackend::Database {
            self.database.validate()?;
        }
        self.upstreams.validate()?;
        Ok(())
    }
}

fn is_not_found(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .map(|io| io.kind() == std::io::ErrorKind::NotFound)
        .unwrap_or(false)
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        // zero leaves the choice to tokio
        if self.worker_threads == Some(0) {
            self.worker_threads = None;
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://") || lower.starts_with("sqlite:")) {
            return Err(anyhow!("database.url must start with postgres://, postgresql:// or sqlite:"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

impl UpstreamsConfig {
    fn apply_env_from(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        let overrides: [(&str, &mut String); 5] = [
            ("PAJAK_URL", &mut self.pajak_url),
            ("TOUR_GUIDE_URL", &mut self.tour_guide_url),
            ("ASURANSI_URL", &mut self.asuransi_url),
            ("HOTEL_URL", &mut self.hotel_url),
            ("BANK_URL", &mut self.bank_url),
        ];
        for (var, slot) in overrides {
            if let Some(url) = lookup(var) {
                if !url.trim().is_empty() {
                    *slot = url;
                }
            }
        }
    }

    fn validate(&self) -> Result<()> {
        let urls = [
            ("upstreams.pajak_url", &self.pajak_url),
            ("upstreams.tour_guide_url", &self.tour_guide_url),
            ("upstreams.asuransi_url", &self.asuransi_url),
            ("upstreams.hotel_url", &self.hotel_url),
            ("upstreams.bank_url", &self.bank_url),
        ];
        for (key, url) in urls {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(anyhow!("{key} must start with http(s)"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.store.backend, StoreBackend::Memory);
        assert!(cfg.store.seed_sample_data);
        assert_eq!(cfg.join.pajak, JoinStrategy::Zip);
        assert_eq!(cfg.upstreams.bank_url, "https://example.com/api/bank");
    }

    #[test]
    fn join_strategies_are_selectable_per_pair() {
        let cfg = parse(
            r#"
            [join]
            asuransi = "cartesian"
            hotel = "cartesian"
            bank = "keyed"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.join.pajak, JoinStrategy::Zip);
        assert_eq!(cfg.join.tour_guide, JoinStrategy::Zip);
        assert_eq!(cfg.join.asuransi, JoinStrategy::Cartesian);
        assert_eq!(cfg.join.hotel, JoinStrategy::Cartesian);
        assert_eq!(cfg.join.bank, JoinStrategy::Keyed);
    }

    #[test]
    fn database_backend_requires_a_supported_url() {
        let mut cfg = parse(
            r#"
            [store]
            backend = "database"
            [database]
            url = "mysql://localhost/wisata"
            "#,
        )
        .unwrap();
        assert!(cfg.normalize_and_validate().is_err());

        cfg.database.url = "sqlite::memory:".into();
        assert!(cfg.normalize_and_validate().is_ok());
    }

    #[test]
    fn memory_backend_ignores_database_section() {
        let mut cfg = AppConfig::default();
        assert!(cfg.normalize_and_validate().is_ok());
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: std::collections::HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn upstream_urls_are_overridden_from_env() {
        let mut cfg = AppConfig::default();
        cfg.apply_env_from(env(&[
            ("PAJAK_URL", "http://tax.local/pajak"),
            ("TOUR_GUIDE_URL", "http://guide.local/tourguide"),
            ("ASURANSI_URL", "http://insurance.local/asuransi"),
            ("HOTEL_URL", "http://hotel.local/hotel"),
            ("BANK_URL", "http://bank.local/bank"),
        ]));
        assert_eq!(cfg.upstreams.pajak_url, "http://tax.local/pajak");
        assert_eq!(cfg.upstreams.tour_guide_url, "http://guide.local/tourguide");
        assert_eq!(cfg.upstreams.asuransi_url, "http://insurance.local/asuransi");
        assert_eq!(cfg.upstreams.hotel_url, "http://hotel.local/hotel");
        assert_eq!(cfg.upstreams.bank_url, "http://bank.local/bank");
        assert!(cfg.normalize_and_validate().is_ok());
    }

    #[test]
    fn blank_upstream_override_keeps_configured_url() {
        let mut cfg = AppConfig::default();
        cfg.apply_env_from(env(&[("HOTEL_URL", "  ")]));
        assert_eq!(cfg.upstreams.hotel_url, "https://example.com/api/hotel");
    }

    #[test]
    fn store_backend_and_database_url_come_from_env() {
        let mut cfg = AppConfig::default();
        cfg.apply_env_from(env(&[("STORE_BACKEND", "database"), ("DATABASE_URL", "sqlite::memory:")]));
        assert_eq!(cfg.store.backend, StoreBackend::Database);
        assert_eq!(cfg.database.url, "sqlite::memory:");
        assert!(cfg.normalize_and_validate().is_ok());

        // unknown backends are ignored rather than guessed
        let mut cfg = AppConfig::default();
        cfg.apply_env_from(env(&[("STORE_BACKEND", "redis")]));
        assert_eq!(cfg.store.backend, StoreBackend::Memory);
    }

    #[test]
    fn configured_database_url_wins_over_env() {
        let mut cfg = parse("[database]\nurl = \"postgres://db/wisata\"").unwrap();
        cfg.apply_env_from(env(&[("DATABASE_URL", "sqlite::memory:")]));
        assert_eq!(cfg.database.url, "postgres://db/wisata");
    }

    #[test]
    fn worker_threads_follow_env_and_zero_defers_to_runtime() {
        let mut cfg = AppConfig::default();
        cfg.apply_env_from(env(&[("TOKIO_WORKER_THREADS", "2")]));
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.worker_threads, Some(2));

        let mut cfg = parse("[server]\nworker_threads = 0").unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.worker_threads, None);
    }

    #[test]
    fn store_backend_parses_from_env_style_strings() {
        assert_eq!("Database".parse::<StoreBackend>().unwrap(), StoreBackend::Database);
        assert_eq!("memory".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert!("redis".parse::<StoreBackend>().is_err());
    }
}
