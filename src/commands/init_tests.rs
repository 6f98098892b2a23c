use tempfile::TempDir;

use super::*;
use crate::config::Config;

#[test]
fn template_parses_to_defaults() {
    let config: Config = toml::from_str(&generate_config_template()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn template_lists_every_validator() {
    let template = generate_config_template();
    for key in ["basic", "filename", "truncation", "unwanted_characters"] {
        assert!(template.contains(&format!("{key} = true")), "{key}");
    }
    assert!(template.contains("[scan]"));
    assert!(template.contains("# filter = "));
}

#[test]
fn run_init_creates_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".tag-guard.toml");

    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };

    run_init_impl(&args).unwrap();
    let content = std::fs::read_to_string(&config_path).unwrap();
    assert_eq!(content, generate_config_template());
}

#[test]
fn run_init_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("conf/tag-guard.toml");
    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };
    assert_eq!(run_init(&args), EXIT_SUCCESS);
    assert!(config_path.exists());
}

#[test]
fn run_init_fails_if_file_exists_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".tag-guard.toml");
    std::fs::write(&config_path, "existing content").unwrap();

    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };

    let err = run_init_impl(&args).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(run_init(&args), EXIT_CONFIG_ERROR);
    assert_eq!(
        std::fs::read_to_string(&config_path).unwrap(),
        "existing content"
    );
}

#[test]
fn run_init_overwrites_with_force() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".tag-guard.toml");
    std::fs::write(&config_path, "existing content").unwrap();

    let args = InitArgs {
        output: config_path.clone(),
        force: true,
    };

    run_init_impl(&args).unwrap();
    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[validators]"));
}
