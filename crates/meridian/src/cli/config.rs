//! The `config` command: show resolved paths.

use anyhow::Result;
use meridian::paths;
use meridian_answers::SectionName;

#[derive(Debug, clap::Args)]
pub struct ConfigArgs {
    /// Show resolved paths in JSON format
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ConfigArgs) -> Result<()> {
    let home = paths::meridian_home();
    let conf_dir = paths::conf_dir();
    let logs = paths::logs_dir();

    if args.json {
        let components: serde_json::Map<String, serde_json::Value> = SectionName::ALL
            .iter()
            .map(|name| {
                let path = paths::component_conf_path(&conf_dir, *name);
                (
                    name.to_string(),
                    serde_json::json!({
                        "path": path.to_string_lossy(),
                        "exists": path.exists(),
                    }),
                )
            })
            .collect();
        let config = serde_json::json!({
            "home": home.to_string_lossy(),
            "conf_dir": conf_dir.to_string_lossy(),
            "logs": logs.to_string_lossy(),
            "components": components,
        });
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("MERIDIAN CONFIGURATION");
        println!("======================");
        println!();
        println!("Home:     {}", home.display());
        println!("Configs:  {}", conf_dir.display());
        println!("Logs:     {}", logs.display());
        println!();
        for name in SectionName::ALL {
            let path = paths::component_conf_path(&conf_dir, name);
            println!(
                "{:<8}  {} ({})",
                name.to_string(),
                path.display(),
                if path.exists() { "exists" } else { "not found" }
            );
        }
    }

    Ok(())
}
