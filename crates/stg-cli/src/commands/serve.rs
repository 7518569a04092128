use stg_config::StagecraftConfig;

use crate::cli::root_commands::ServeArgs;

/// Handle `stg serve`. Blocks until the listener fails.
pub fn handle(args: &ServeArgs, config: &StagecraftConfig) -> anyhow::Result<i32> {
    let config = with_overrides(config, args);
    eprintln!(
        "Serving {} at http://{}",
        config.content.root.display(),
        config.server.bind_addr()
    );
    stg_server::serve(&config)?;
    Ok(0)
}

fn with_overrides(config: &StagecraftConfig, args: &ServeArgs) -> StagecraftConfig {
    let mut config = config.clone();
    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = ServeArgs {
            host: Some("0.0.0.0".to_string()),
            port: Some(8080),
        };
        let config = with_overrides(&StagecraftConfig::default(), &args);
        assert_eq!(config.server.bind_addr(), "0.0.0.0:8080");

        let untouched = with_overrides(&StagecraftConfig::default(), &ServeArgs::default());
        assert_eq!(untouched.server.port, 3333);
    }
}
