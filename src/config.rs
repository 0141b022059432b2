use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "neusatz-site", about = "Multilingual community website for the Neusatz NGO")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path to data directory
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate sitemap.xml from the post snapshot and exit
    Sitemap {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub content: ContentConfig,
    pub assistant: AssistantConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute origin used for canonical URLs, hreflang links and the sitemap.
    pub base_url: String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ContentConfig {
    /// Path to the pre-generated posts JSON snapshot.
    pub posts_path: Option<PathBuf>,
    /// Posts shown per news listing page.
    pub page_size: usize,
    /// Latest posts shown on the community page.
    pub community_posts: usize,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AssistantConfig {
    /// Gemini API key; GEMINI_API_KEY env var takes precedence.
    pub api_key: Option<String>,
    pub model: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://neusatz.online".to_string(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            posts_path: None,
            page_size: 8,
            community_posts: 3,
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-flash".to_string(),
        }
    }
}

impl Config {
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let data_dir = Self::data_dir(cli);
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| data_dir.join("config.toml"));

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        // CLI overrides
        if let Some(ref host) = cli.host {
            config.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            config.server.port = port;
        }

        // Env override for the assistant credential
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            if !key.is_empty() {
                config.assistant.api_key = Some(key);
            }
        }

        // Resolve paths relative to data dir
        if config.content.posts_path.is_none() {
            config.content.posts_path = Some(data_dir.join("facebook-posts.json"));
        }

        Ok(config)
    }

    pub fn data_dir(cli: &Cli) -> PathBuf {
        cli.data_dir.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .expect("Could not determine home directory")
                .join(".neusatz")
        })
    }

    pub fn posts_path(&self) -> &PathBuf {
        self.content.posts_path.as_ref().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(data_dir: Option<PathBuf>) -> Cli {
        Cli {
            config: None,
            host: None,
            port: None,
            data_dir,
            command: None,
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.site.base_url, "https://neusatz.online");
        assert_eq!(config.content.page_size, 8);
        assert_eq!(config.content.community_posts, 3);
        assert_eq!(config.assistant.model, "gemini-2.5-flash");
        assert!(config.content.posts_path.is_none());
    }

    #[test]
    fn data_dir_uses_cli_override() {
        let c = cli(Some(PathBuf::from("/tmp/test-neusatz")));
        assert_eq!(Config::data_dir(&c), PathBuf::from("/tmp/test-neusatz"));
    }

    #[test]
    fn data_dir_defaults_to_home_dot_neusatz() {
        let dir = Config::data_dir(&cli(None));
        assert!(dir.ends_with(".neusatz"));
    }

    #[test]
    fn load_with_no_config_file_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::load(&cli(Some(tmp.path().to_path_buf()))).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.posts_path(),
            &tmp.path().join("facebook-posts.json")
        );
    }

    #[test]
    fn load_applies_cli_overrides() {
        let tmp = tempfile::tempdir().unwrap();
        let mut c = cli(Some(tmp.path().to_path_buf()));
        c.host = Some("127.0.0.1".to_string());
        c.port = Some(8080);
        let config = Config::load(&c).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn load_reads_toml_file() {
        let tmp = tempfile::tempdir().unwrap();
        let config_path = tmp.path().join("config.toml");
        std::fs::write(
            &config_path,
            r#"
[server]
host = "192.168.1.1"
port = 9000

[site]
base_url = "https://example.org"

[content]
page_size = 4
"#,
        )
        .unwrap();

        let mut c = cli(Some(tmp.path().to_path_buf()));
        c.config = Some(config_path);
        let config = Config::load(&c).unwrap();
        assert_eq!(config.server.host, "192.168.1.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.site.base_url, "https://example.org");
        assert_eq!(config.content.page_size, 4);
    }

    #[test]
    fn cli_overrides_beat_toml_values() {
        let tmp = tempfile::tempdir().unwrap();
        let config_path = tmp.path().join("config.toml");
        std::fs::write(
            &config_path,
            r#"
[server]
host = "192.168.1.1"
port = 9000
"#,
        )
        .unwrap();

        let mut c = cli(Some(tmp.path().to_path_buf()));
        c.config = Some(config_path);
        c.host = Some("10.0.0.1".to_string());
        c.port = Some(4000);
        let config = Config::load(&c).unwrap();
        assert_eq!(config.server.host, "10.0.0.1");
        assert_eq!(config.server.port, 4000);
    }
}
