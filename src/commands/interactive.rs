//! Interactive prompt wizard
//!
//! Collects the batch inputs step by step and renders the same report as
//! `calc`. This shell is forgiving: an impractically high gravity warns
//! but still shows the numbers, since the user is right there to adjust.

use std::path::Path;

use anyhow::Result;
use dialoguer::{Input, Select};
use is_terminal::IsTerminal;

use mazer::models::{BatchSpec, Sweetness, YeastMode, MAX_ABV, MIN_ABV};
use mazer::{report, Config, GravityTargets, Recipe, UnitSystem};

pub fn run(verbose: u8) -> Result<()> {
    let (config, warnings) = Config::load_or_default(Some(Path::new(".")));
    for warning in &warnings {
        eprintln!(
            "warning: unknown config key '{}' in {}",
            warning.key,
            warning.file.display()
        );
    }

    print!("{}", report::render_banner());
    println!();

    let units = select_units(&config)?;
    let volume = prompt_volume(units)?;
    let abv = prompt_abv(&config)?;
    let sweetness = select_sweetness(&config)?;
    let yeast = select_yeast(&config)?;

    // Prompt validation already enforced the contract; the constructor is
    // the single source of truth for it regardless of the shell.
    let spec = BatchSpec::new(volume, units, abv, sweetness, yeast)?;
    let targets = GravityTargets::resolve(spec.abv, spec.sweetness, spec.yeast);

    println!();
    if spec.yeast.is_turbo() {
        println!("{}", report::render_turbo_note(spec.sweetness).trim_end());
        println!();
    }

    // Interactive shell policy: warn and keep going.
    if targets.is_impractical() {
        let color = std::io::stderr().is_terminal();
        eprint!("{}", report::render_warning(&targets, color));
        eprintln!();
    }

    let recipe = Recipe::calculate(&targets, spec.volume, spec.units);
    print!("{}", report::render_report(&recipe));
    if verbose > 0 {
        println!();
        print!("{}", report::render_breakdown(&spec, &recipe));
    }
    println!();
    print!("{}", report::render_closing());

    Ok(())
}

fn select_units(config: &Config) -> Result<UnitSystem> {
    let items = ["US imperial (gallons / lbs)", "Metric (liters / kg)"];
    let default = match config.defaults.units {
        UnitSystem::Us => 0,
        UnitSystem::Metric => 1,
    };
    let selection = Select::new()
        .with_prompt("Unit system")
        .items(&items)
        .default(default)
        .interact()?;

    Ok(match selection {
        1 => UnitSystem::Metric,
        _ => UnitSystem::Us,
    })
}

fn prompt_volume(units: UnitSystem) -> Result<f64> {
    let volume = Input::<f64>::new()
        .with_prompt(format!("Batch volume ({})", units.volume_label()))
        .validate_with(|value: &f64| -> Result<(), &str> {
            if value.is_finite() && *value > 0.0 {
                Ok(())
            } else {
                Err("volume must be greater than zero")
            }
        })
        .interact_text()?;
    Ok(volume)
}

fn prompt_abv(config: &Config) -> Result<u8> {
    let abv = Input::<u8>::new()
        .with_prompt(format!("Target ABV % ({MIN_ABV}-{MAX_ABV})"))
        .default(config.defaults.abv)
        .validate_with(|value: &u8| -> Result<(), String> {
            if (MIN_ABV..=MAX_ABV).contains(value) {
                Ok(())
            } else {
                Err(format!("ABV must be between {MIN_ABV}% and {MAX_ABV}%"))
            }
        })
        .interact_text()?;
    Ok(abv)
}

fn select_sweetness(config: &Config) -> Result<Sweetness> {
    let items: Vec<String> = Sweetness::ALL
        .iter()
        .map(|s| format!("{:<12}assumed FG {:.3}", s.label(), s.final_gravity()))
        .collect();
    let default = Sweetness::ALL
        .iter()
        .position(|s| *s == config.defaults.sweetness)
        .unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Sweetness level")
        .items(&items)
        .default(default)
        .interact()?;

    Ok(Sweetness::ALL[selection])
}

fn select_yeast(config: &Config) -> Result<YeastMode> {
    let items = [
        "Standard yeast     FG follows the sweetness level",
        "Turbo yeast        ferments bone dry (FG 1.000)",
    ];
    let default = match config.defaults.yeast {
        YeastMode::Standard => 0,
        YeastMode::Turbo => 1,
    };
    let selection = Select::new()
        .with_prompt("Yeast method")
        .items(&items)
        .default(default)
        .interact()?;

    Ok(match selection {
        1 => YeastMode::Turbo,
        _ => YeastMode::Standard,
    })
}
