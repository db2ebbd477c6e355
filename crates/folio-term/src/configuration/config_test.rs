use std::fs;

use anyhow::Result;
use serial_test::serial;

use super::Config;
use super::ConfigKey;
use crate::application::cli;
use crate::domain::models::Theme;
use crate::domain::models::ThemePreference;

fn write_config(contents: &str) -> Result<tempfile::TempDir> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("config.toml"), contents)?;
    Ok(dir)
}

fn config_flag(dir: &tempfile::TempDir) -> String {
    dir.path().join("config.toml").to_string_lossy().to_string()
}

#[test]
fn it_serializes_defaults_as_commented_toml() {
    let toml = Config::serialize_default(cli::build());

    assert!(toml.contains("theme = \"auto\""));
    assert!(toml.contains("[possible values: auto, dark, cyberpunk, glassmorphism, minimal]"));
    assert!(toml.contains("github-user = \"octocat\""));
    assert!(toml.contains("github-api-url = \"https://api.github.com\""));
    assert!(toml.contains("# email-service-id = \"\""));
    assert!(!toml.contains("config-file"));
    assert!(!toml.contains("[default:"));
}

#[tokio::test]
#[serial]
async fn it_loads_defaults_without_a_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("missing.toml");
    let matches = cli::build().try_get_matches_from([
        "folio",
        "--config-file",
        missing.to_str().unwrap(),
    ])?;

    Config::load(cli::build(), vec![&matches]).await?;

    assert_eq!(Config::get(ConfigKey::Theme), "auto");
    assert_eq!(Config::get(ConfigKey::GithubUser), "octocat");
    assert_eq!(Config::get(ConfigKey::EmailServiceId), "");
    assert_eq!(Config::theme_preference()?, ThemePreference::Auto);

    Ok(())
}

#[tokio::test]
#[serial]
async fn it_applies_file_values() -> Result<()> {
    let dir = write_config(
        r#"
theme = "cyberpunk"
github-user = "ada"
email-service-id = "service_1"
"#,
    )?;
    let matches = cli::build().try_get_matches_from(["folio", "-c", &config_flag(&dir)])?;

    Config::load(cli::build(), vec![&matches]).await?;

    assert_eq!(Config::get(ConfigKey::GithubUser), "ada");
    assert_eq!(Config::get(ConfigKey::EmailServiceId), "service_1");
    assert_eq!(
        Config::theme_preference()?,
        ThemePreference::Manual(Theme::Cyberpunk)
    );

    Ok(())
}

#[tokio::test]
#[serial]
async fn it_prefers_flags_over_the_file() -> Result<()> {
    let dir = write_config("theme = \"minimal\"\ngithub-user = \"ada\"\n")?;
    let matches = cli::build().try_get_matches_from([
        "folio",
        "-c",
        &config_flag(&dir),
        "--theme",
        "dark",
    ])?;

    Config::load(cli::build(), vec![&matches]).await?;

    assert_eq!(Config::get(ConfigKey::Theme), "dark");
    assert_eq!(Config::get(ConfigKey::GithubUser), "ada");

    Ok(())
}

#[tokio::test]
#[serial]
async fn it_rejects_an_unknown_theme_in_the_file() -> Result<()> {
    let dir = write_config("theme = \"solarized\"\n")?;
    let matches = cli::build().try_get_matches_from(["folio", "-c", &config_flag(&dir)])?;

    let err = Config::load(cli::build(), vec![&matches])
        .await
        .unwrap_err()
        .to_string();

    assert!(err.contains("invalid value for key 'theme': solarized"));

    Ok(())
}

#[test]
fn it_rejects_an_unknown_theme_flag() {
    let res = cli::build().try_get_matches_from(["folio", "--theme", "solarized"]);
    assert!(res.is_err());
}
