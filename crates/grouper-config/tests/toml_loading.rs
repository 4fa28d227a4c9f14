//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use grouper_config::{ConfigError, GrouperConfig};
use grouper_core::AssignStrategy;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[assignment]
strategy = "sequential"
seed = 99
balance_slack = 2

[general]
use_group_preferences = false
rank_threshold = 3

[storage]
snapshot_dir = "data/snaps"
"#,
        )?;

        let config: GrouperConfig = Figment::from(Serialized::defaults(GrouperConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.assignment.strategy, AssignStrategy::Sequential);
        assert_eq!(config.assignment.seed, Some(99));
        assert_eq!(config.assignment.balance_slack, 2);
        assert!(!config.general.use_group_preferences);
        assert_eq!(config.general.rank_threshold, 3);
        assert_eq!(config.storage.snapshot_dir(), PathBuf::from("data/snaps"));
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_figment_chain() {
    Jail::expect_with(|jail| {
        jail.create_dir(".grouper")?;
        jail.create_file(".grouper/config.toml", "[general]\nrank_threshold = 5\n")?;

        let config = GrouperConfig::load().expect("config loads");
        assert_eq!(config.general.rank_threshold, 5);
        assert!(config.general.use_group_preferences);
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[assignment]\nseed = 1\n")?;

        let config: GrouperConfig = Figment::from(Serialized::defaults(GrouperConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.assignment.strategy, AssignStrategy::Balanced);
        assert_eq!(config.assignment.balance_slack, 5);
        Ok(())
    });
}

#[test]
fn zero_slack_in_file_is_invalid() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[assignment]\nbalance_slack = 0\n")?;

        let figment = Figment::from(Serialized::defaults(GrouperConfig::default()))
            .merge(Toml::file("config.toml"));
        assert!(matches!(
            GrouperConfig::from_figment(&figment),
            Err(ConfigError::InvalidValue { .. })
        ));
        Ok(())
    });
}

#[test]
fn unknown_strategy_fails_extraction() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[assignment]\nstrategy = \"clever\"\n")?;

        let figment = Figment::from(Serialized::defaults(GrouperConfig::default()))
            .merge(Toml::file("config.toml"));
        assert!(matches!(
            GrouperConfig::from_figment(&figment),
            Err(ConfigError::Figment(_))
        ));
        Ok(())
    });
}
