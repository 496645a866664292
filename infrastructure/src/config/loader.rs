//! Configuration loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

const PROJECT_FILES: [&str; 2] = ["rutobot.toml", ".rutobot.toml"];

/// Recognized environment variables and the key each one sets.
///
/// `ENABLE_<DOMAIN>_AGENT` switches a specialist domain on or off.
pub const ENV_KEYS: [(&str, &str); 12] = [
    ("ENABLE_PARALLEL", "parallel.enabled"),
    ("MIN_DOMAINS_FOR_PARALLEL", "parallel.min_domains"),
    ("TASK_TIMEOUT_SECONDS", "parallel.task_timeout_seconds"),
    ("DEBUG_LOG_TIMELINE", "parallel.debug_timeline"),
    ("MAIN_AGENT_MODEL", "models.general"),
    ("SPECIALIZED_AGENTS_MODEL", "models.specialist"),
    ("META_AGENT_MODEL", "models.synthesizer"),
    ("ENABLE_EXPERIENCES_AGENT", "routing.agents.experiences"),
    ("ENABLE_LODGING_AGENT", "routing.agents.lodging"),
    ("ENABLE_TRANSPORTATION_AGENT", "routing.agents.transportation"),
    ("ENABLE_DATABASE_AGENT", "routing.agents.database"),
    ("OPENAI_BASE_URL", "provider.base_url"),
];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Recognized environment variables (see [`ENV_KEYS`])
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./rutobot.toml` or `./.rutobot.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/rutobot/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Load defaults plus environment variables only (for --no-config)
    pub fn load_defaults() -> Result<FileConfig, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Self::env())
            .extract()
            .map_err(Box::new)
    }

    fn figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Self::env())
    }

    fn env() -> Env {
        Env::raw()
            .only(&ENV_KEYS.map(|(var, _)| var))
            .map(|var| {
                ENV_KEYS
                    .iter()
                    .find(|(name, _)| var.as_str().eq_ignore_ascii_case(name))
                    .map(|(_, key)| (*key).into())
                    .unwrap_or_else(|| var.as_str().to_string().into())
            })
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("rutobot").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] Environment: {}", Self::env_summary());

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./rutobot.toml or ./.rutobot.toml");
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

    fn env_summary() -> String {
        let set: Vec<&str> = ENV_KEYS
            .iter()
            .map(|(var, _)| *var)
            .filter(|var| std::env::var_os(var).is_some())
            .collect();
        if set.is_empty() {
            "none set".to_string()
        } else {
            set.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("rutobot"));
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "rutobot.toml",
                r#"
[parallel]
min_domains = 3
task_timeout_seconds = 10
"#,
            )?;
            jail.set_env("TASK_TIMEOUT_SECONDS", "45");
            jail.set_env("ENABLE_PARALLEL", "false");
            jail.set_env("META_AGENT_MODEL", "gpt-4o");
            jail.set_env("ENABLE_DATABASE_AGENT", "false");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.parallel.min_domains, 3);
            assert_eq!(config.parallel.task_timeout_seconds, 45);
            assert!(!config.parallel.enabled);
            assert_eq!(config.models.synthesizer, Some("gpt-4o".to_string()));
            assert!(!config.routing.agents.database);
            assert!(config.routing.agents.lodging);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(".rutobot.toml", "[parallel]\nmin_domains = 3\n")?;
            jail.create_file("custom.toml", "[parallel]\nmin_domains = 4\n")?;

            let explicit = PathBuf::from("custom.toml");
            let config = ConfigLoader::load(Some(&explicit)).map_err(|e| *e)?;
            assert_eq!(config.parallel.min_domains, 4);
            Ok(())
        });
    }

    #[test]
    fn test_unrelated_env_is_ignored() {
        Jail::expect_with(|jail| {
            jail.set_env("MIN_DOMAINS", "9");
            jail.set_env("PARALLEL", "nope");

            let config = ConfigLoader::load_defaults().map_err(|e| *e)?;
            assert_eq!(config.parallel.min_domains, 2);
            assert!(config.parallel.enabled);
            Ok(())
        });
    }
}
