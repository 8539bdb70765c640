use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use liquid_ui::cli::{Cli, Command, ProfileAction};
use liquid_ui::config::LiquidConfig;
use liquid_ui::liquidctl::Adapter;
use liquid_ui::output;
use liquid_ui::profile::{self, CurvePoint, Profile, ProfileStore};
use liquid_ui::runner::Liquidctl;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = liquid_ui::config::load(cli.config.as_deref());
    liquid_ui::logging::setup(config.logging.level.raised(cli.verbose))
        .context("failed to initialize logging")?;

    let adapter = Adapter::new(Liquidctl::new(&config.liquidctl.program));
    log::debug!("device access via {}", adapter.runner().program().display());

    match cli.command {
        Command::Devices => cmd_devices(&adapter, cli.json)?,
        Command::Status { device } => cmd_status(&adapter, device, cli.json)?,
        Command::Profiles { action } => {
            let store = open_store(&config, cli.profiles.as_deref())?;
            cmd_profiles(&adapter, &store, action, cli.json)?
        }
        Command::Completions { shell } => liquid_ui::cli::print_completions(shell),
    }

    Ok(())
}

fn open_store(config: &LiquidConfig, override_path: Option<&Path>) -> Result<ProfileStore> {
    let store = match override_path.or(config.profiles.path.as_deref()) {
        Some(path) => ProfileStore::new(path),
        None => ProfileStore::user()?,
    };
    log::debug!("using profile store {}", store.path().display());
    Ok(store)
}

fn cmd_devices(adapter: &Adapter, json: bool) -> Result<()> {
    let devices = adapter.discover()?;
    if json {
        output::print_json(&devices)?;
    } else {
        output::print_devices(&devices);
    }
    Ok(())
}

fn cmd_status(adapter: &Adapter, device: u32, json: bool) -> Result<()> {
    let status = adapter.query_status(device)?;
    if json {
        output::print_json(&status)?;
    } else {
        output::print_status(device, &status);
    }
    Ok(())
}

fn cmd_profiles(
    adapter: &Adapter,
    store: &ProfileStore,
    action: ProfileAction,
    json: bool,
) -> Result<()> {
    match action {
        ProfileAction::List => {
            let profiles = store.load()?;
            if json {
                output::print_json(&profiles)?;
            } else {
                output::print_profiles(&profiles);
            }
        }
        ProfileAction::Show { name } => {
            let profiles = store.load()?;
            let found = profile::find_profile(&profiles, &name)?;
            if json {
                output::print_json(found)?;
            } else {
                output::print_profile(found);
            }
        }
        ProfileAction::Save { name, points } => {
            let points = points
                .iter()
                .map(|p| p.parse::<CurvePoint>())
                .collect::<Result<Vec<_>, _>>()?;
            save_profile(store, Profile::new(name, points), json)?;
        }
        ProfileAction::Import { file } => {
            let text = if file.as_os_str() == "-" {
                std::io::read_to_string(std::io::stdin()).context("failed to read stdin")?
            } else {
                std::fs::read_to_string(&file)
                    .with_context(|| format!("failed to read {}", file.display()))?
            };
            let imported: Profile =
                serde_json::from_str(&text).context("invalid profile JSON")?;
            save_profile(store, imported, json)?;
        }
        ProfileAction::Delete { name } => {
            store.update(|p| profile::delete_profile(p, &name))?;
            report(json, "deleted", &name);
        }
        ProfileAction::Apply { name, device } => {
            let applied = liquid_ui::apply::apply_profile(adapter, store, device, &name)?;
            report(json, "applied", &applied.name);
        }
    }
    Ok(())
}

fn save_profile(store: &ProfileStore, new: Profile, json: bool) -> Result<()> {
    output::print_curve_warnings(&new.name, &profile::check_curve(&new.points));
    let name = new.name.clone();
    store.update(|p| profile::upsert_profile(p, new))?;
    report(json, "saved", &name);
    Ok(())
}

fn report(json: bool, status: &str, name: &str) {
    if json {
        println!("{}", serde_json::json!({ "status": status, "name": name }));
    } else {
        println!("  Profile {} {}.", name.bold(), status.green());
    }
}
