#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path;
use std::str::FromStr;

use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

use crate::domain::models::ThemePreference;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ConfigFile,
    EmailApiUrl,
    EmailPublicKey,
    EmailServiceId,
    EmailTemplateId,
    GithubApiUrl,
    GithubUser,
    Theme,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default_config_path() -> path::PathBuf {
        #[allow(unused_mut)]
        let mut config_dir = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| path::PathBuf::from("."));

        #[cfg(target_os = "macos")]
        {
            if let Some(home) = dirs::home_dir() {
                config_dir = home.join(".config");
            }
        }

        return config_dir.join("folio/config.toml");
    }

    pub fn default(key: ConfigKey) -> String {
        let res = match key {
            ConfigKey::EmailApiUrl => "https://api.emailjs.com",
            ConfigKey::EmailPublicKey => "",
            ConfigKey::EmailServiceId => "",
            ConfigKey::EmailTemplateId => "",
            ConfigKey::GithubApiUrl => "https://api.github.com",
            ConfigKey::GithubUser => "octocat",
            ConfigKey::Theme => "auto",

            // Special
            ConfigKey::ConfigFile => {
                return Config::default_config_path().to_string_lossy().to_string();
            }
        };

        return res.to_string();
    }

    pub async fn load(cmd: Command, clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(&config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                let Some(val) = doc.get(&key.to_string()) else {
                    continue;
                };

                // Use clap value parsers to do validation.
                let possible_values = Config::possible_values(&cmd, key);

                if let Some(val_int) = val.as_integer() {
                    Config::set(key, &val_int.to_string());
                } else if let Some(val_str) = val.as_str() {
                    if val_str.is_empty() {
                        continue;
                    }
                    if !possible_values.is_empty()
                        && !possible_values.contains(&val_str.to_string())
                    {
                        bail!(format!("config.toml has an invalid value for key '{key}': {val_str}\nPossible values are: {}", possible_values.join(", ")));
                    }
                    Config::set(key, val_str);
                } else {
                    bail!(format!(
                        "config.toml has an unsupported value type for key '{key}'"
                    ));
                }
            }
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::set(key, val)
                }
            }
        }

        tracing::debug!(
            theme = Config::get(ConfigKey::Theme),
            github_user = Config::get(ConfigKey::GithubUser),
            github_api_url = Config::get(ConfigKey::GithubApiUrl),
            email_api_url = Config::get(ConfigKey::EmailApiUrl),
            "config"
        );

        return Ok(());
    }

    pub fn theme_preference() -> Result<ThemePreference> {
        let preference = ThemePreference::from_str(&Config::get(ConfigKey::Theme))?;
        return Ok(preference);
    }

    fn possible_values(cmd: &Command, key: ConfigKey) -> Vec<String> {
        let name = key.to_string();
        return cmd
            .get_arguments()
            .find(|e| return e.get_long() == Some(name.as_str()))
            .map(|arg| {
                return arg
                    .get_possible_values()
                    .iter()
                    .map(|e| return e.get_name().to_string())
                    .collect::<Vec<String>>();
            })
            .unwrap_or_default();
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                let name = key.to_string();
                let arg = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(name.as_str()))?;

                let mut description = arg
                    .get_help()
                    .map(|help| return help.to_string())
                    .unwrap_or_default();

                description = description
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                let possible_values = Config::possible_values(&cmd, key);
                if !possible_values.is_empty() {
                    description = format!(
                        "{description} [possible values: {}]",
                        possible_values.join(", ")
                    );
                }

                let mut val = Config::default(key);
                if val.is_empty() {
                    val = format!("# {key} = \"\"");
                } else if val.parse::<i32>().is_ok() {
                    val = format!("{key} = {val}");
                } else {
                    val = format!("{key} = \"{val}\"");
                }

                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}
