use clap::Arg;
use clap::ArgAction;
use clap::Command;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

pub const THEME_CHOICES: [&str; 5] = ["auto", "dark", "cyberpunk", "glassmorphism", "minimal"];
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

fn config_arg(key: ConfigKey, env: &'static str, help: String) -> Arg {
    return Arg::new(key.to_string())
        .long(key.to_string())
        .env(env)
        .num_args(1)
        .help(help);
}

fn arguments() -> Vec<Arg> {
    return vec![
        config_arg(
            ConfigKey::ConfigFile,
            "FOLIO_CONFIG_FILE",
            format!(
                "Path to the configuration file [default: {}]",
                Config::default(ConfigKey::ConfigFile)
            ),
        )
        .short('c'),
        config_arg(
            ConfigKey::Theme,
            "FOLIO_THEME",
            "Startup theme. `auto` follows the time of day [default: auto]".to_string(),
        )
        .short('t')
        .value_parser(THEME_CHOICES),
        config_arg(
            ConfigKey::GithubUser,
            "FOLIO_GITHUB_USER",
            format!(
                "GitHub account shown on the About page and opened by `github` [default: {}]",
                Config::default(ConfigKey::GithubUser)
            ),
        )
        .short('u'),
        config_arg(
            ConfigKey::GithubApiUrl,
            "FOLIO_GITHUB_API_URL",
            format!(
                "Base URL of the GitHub REST API [default: {}]",
                Config::default(ConfigKey::GithubApiUrl)
            ),
        ),
        config_arg(
            ConfigKey::EmailApiUrl,
            "FOLIO_EMAIL_API_URL",
            format!(
                "Base URL of the EmailJS REST API [default: {}]",
                Config::default(ConfigKey::EmailApiUrl)
            ),
        ),
        config_arg(
            ConfigKey::EmailServiceId,
            "FOLIO_EMAIL_SERVICE_ID",
            "EmailJS service ID used by the contact form".to_string(),
        ),
        config_arg(
            ConfigKey::EmailTemplateId,
            "FOLIO_EMAIL_TEMPLATE_ID",
            "EmailJS template ID used by the contact form".to_string(),
        ),
        config_arg(
            ConfigKey::EmailPublicKey,
            "FOLIO_EMAIL_PUBLIC_KEY",
            "EmailJS public key used by the contact form".to_string(),
        ),
        Arg::new("log-level")
            .long("log-level")
            .env("FOLIO_LOG_LEVEL")
            .num_args(1)
            .default_value("info")
            .value_parser(LOG_LEVELS)
            .help("Verbosity of folio.log"),
        Arg::new("no-preloader")
            .long("no-preloader")
            .action(ArgAction::SetTrue)
            .help("Skip the startup animation"),
    ];
}

pub fn build() -> Command {
    return Command::new("folio")
        .about("A terminal portfolio with a hidden command console. Press Ctrl+Alt+P to open it.")
        .version(env!("CARGO_PKG_VERSION"))
        .args(arguments())
        .subcommand(
            Command::new("config-default")
                .about("Prints the default config.toml to stdout"),
        );
}
