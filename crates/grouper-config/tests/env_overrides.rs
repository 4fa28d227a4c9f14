use figment::Jail;
use grouper_config::GrouperConfig;
use grouper_core::AssignStrategy;

#[test]
fn env_overrides_nested_fields() {
    Jail::expect_with(|jail| {
        jail.set_env("GROUPER_ASSIGNMENT__STRATEGY", "random");
        jail.set_env("GROUPER_ASSIGNMENT__SEED", "7");
        jail.set_env("GROUPER_STORAGE__SNAPSHOT_DIR", "/var/lib/grouper");

        let config = GrouperConfig::load().expect("config loads");
        assert_eq!(config.assignment.strategy, AssignStrategy::Random);
        assert_eq!(config.assignment.seed, Some(7));
        assert_eq!(config.storage.snapshot_dir, "/var/lib/grouper");
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".grouper")?;
        jail.create_file(".grouper/config.toml", "[general]\nrank_threshold = 4\n")?;
        jail.set_env("GROUPER_GENERAL__RANK_THRESHOLD", "1");

        let config = GrouperConfig::load().expect("config loads");
        assert_eq!(config.general.rank_threshold, 1);
        Ok(())
    });
}

#[test]
fn engine_options_follow_config() {
    Jail::expect_with(|jail| {
        jail.set_env("GROUPER_ASSIGNMENT__SEED", "123");
        jail.set_env("GROUPER_ASSIGNMENT__BALANCE_SLACK", "3");

        let options = GrouperConfig::load().expect("config loads").assignment.engine_options();
        assert_eq!(options.seed, Some(123));
        assert_eq!(options.balance_slack, 3);
        Ok(())
    });
}
