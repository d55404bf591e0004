use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Emoscore Configuration

[categories]
photo = ["Aggression", "Hostility", "Frustration"]
dataset = ["fear", "anger", "sadness", "anxiety", "panic", "resistance", "terror", "stress"]

[ranges]
violent = { min = 5.0, max = 10.0 }
calm = { min = 0.0, max = 6.0 }

[dataset]
positive_dir = "data/Parsed_Capuchinbird_Clips"
negative_dir = "data/Parsed_Not_Capuchinbird_Clips"
positive_sample = "sample_violent.wav"
negative_sample = "sample_not_violent.wav"
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}
