use anyhow::Context;
use stg_config::StagecraftConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, the layered config, then apply `--root`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<StagecraftConfig> {
    load_dotenv(flags)?;

    let mut config = StagecraftConfig::load().context("failed to load configuration")?;
    apply_flags(&mut config, flags);
    Ok(config)
}

fn apply_flags(config: &mut StagecraftConfig, flags: &GlobalFlags) {
    if let Some(root) = &flags.root {
        config.content.root.clone_from(root);
    }
}

/// A `.env` in the content root wins over one in the working directory.
fn load_dotenv(flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(root) = &flags.root {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenvy::from_path(&env_path)
                .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
            return Ok(());
        }
    }

    let _ = dotenvy::dotenv();
    Ok(())
}
