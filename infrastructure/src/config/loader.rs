//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "llm-qa";
const PROJECT_FILES: [&str; 2] = ["llm-qa.toml", ".llm-qa.toml"];
const ENV_PREFIX: &str = "LLM_QA_";
const PORT_VAR: &str = "PORT";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment (`LLM_QA_API__MODEL=...`, `PORT`, `LLM_QA_SECRET`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./llm-qa.toml` or `./.llm-qa.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/llm-qa/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
            ENV_PREFIX,
            PORT_VAR,
        )
        .extract()
        .map_err(Box::new)
    }

    /// Load only default configuration plus environment overrides (for --no-config)
    pub fn load_defaults() -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(None, None, None, ENV_PREFIX, PORT_VAR)
            .extract()
            .map_err(Box::new)
    }

    fn figment(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
        env_prefix: &str,
        port_var: &str,
    ) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = global.filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = project {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        let secret_var = format!("{}SECRET", env_prefix);
        figment
            .merge(Env::prefixed(env_prefix).ignore(&["SECRET", "PORT"]).split("__"))
            .merge(Env::raw().only(&[port_var]).map(|_| "web.port".into()))
            .merge(
                Env::raw()
                    .only(&[secret_var.as_str()])
                    .map(|_| "web.secret".into()),
            )
    }

    /// Get the global config file path
    ///
    /// Returns $XDG_CONFIG_HOME/llm-qa/config.toml if set,
    /// otherwise falls back to the platform config directory
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!(
            "  [ENV  ] {}<SECTION>__<KEY>, {}, {}SECRET",
            ENV_PREFIX, PORT_VAR, ENV_PREFIX
        );

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./{} or ./{}", PROJECT_FILES[0], PROJECT_FILES[1]);
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
