use figment::Jail;
use stg_config::StagecraftConfig;
use stg_core::DuplicateAttribution;

#[test]
fn prefixed_env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "stagecraft.toml",
            r#"
[server]
port = 4000
"#,
        )?;
        jail.set_env("STAGECRAFT_SERVER__PORT", "5000");
        jail.set_env(
            "STAGECRAFT_VALIDATION__DUPLICATE_ATTRIBUTION",
            "all-occurrences",
        );

        let config = StagecraftConfig::load().expect("config loads");
        assert_eq!(config.server.port, 5000);
        assert_eq!(
            config.validation.duplicate_attribution,
            DuplicateAttribution::AllOccurrences
        );
        Ok(())
    });
}

#[test]
fn plain_port_env_maps_to_server_port() {
    Jail::expect_with(|jail| {
        jail.set_env("PORT", "7777");

        let config = StagecraftConfig::load().expect("config loads");
        assert_eq!(config.server.port, 7777);
        Ok(())
    });
}

#[test]
fn prefixed_port_beats_plain_port() {
    Jail::expect_with(|jail| {
        jail.set_env("PORT", "7777");
        jail.set_env("STAGECRAFT_SERVER__PORT", "8888");

        let config = StagecraftConfig::load().expect("config loads");
        assert_eq!(config.server.port, 8888);
        Ok(())
    });
}

#[test]
fn content_root_from_env() {
    Jail::expect_with(|jail| {
        jail.set_env("STAGECRAFT_CONTENT__ROOT", "/srv/content");

        let config = StagecraftConfig::load().expect("config loads");
        assert_eq!(config.content.root, std::path::PathBuf::from("/srv/content"));
        Ok(())
    });
}
