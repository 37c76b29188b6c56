//! One-shot calculation from command-line flags
//!
//! The scripted shell: invalid input and an impractically high gravity
//! are both fatal here, so batch scripts fail loudly instead of brewing
//! something undrinkable.

use std::path::Path;

use anyhow::Result;
use is_terminal::IsTerminal;

use mazer::models::{BatchSpec, Sweetness, YeastMode};
use mazer::{report, Config, GravityTargets, Recipe, UnitSystem};

pub struct CalcOptions<'a> {
    pub volume: f64,
    pub units: Option<&'a str>,
    pub abv: u8,
    pub sweetness: &'a str,
    pub turbo: bool,
    pub json: bool,
    pub verbose: u8,
}

pub fn run(opts: CalcOptions<'_>) -> Result<()> {
    let (config, warnings) = Config::load_or_default(Some(Path::new(".")));
    for warning in &warnings {
        eprintln!(
            "warning: unknown config key '{}' in {}",
            warning.key,
            warning.file.display()
        );
    }

    let units = match opts.units {
        Some(raw) => raw.parse::<UnitSystem>()?,
        None => config.defaults.units,
    };
    let sweetness = opts.sweetness.parse::<Sweetness>()?;
    let yeast = if opts.turbo {
        YeastMode::Turbo
    } else {
        YeastMode::Standard
    };

    let spec = BatchSpec::new(opts.volume, units, opts.abv, sweetness, yeast)?;
    let targets = GravityTargets::resolve(spec.abv, spec.sweetness, spec.yeast);

    // Strict shell policy: warn, then abort before sizing ingredients.
    if let Err(err) = targets.ensure_practical() {
        if opts.json {
            println!("{}", serde_json::to_string(&report::error_event(&err.to_string()))?);
        } else {
            let color = std::io::stderr().is_terminal();
            eprint!("{}", report::render_warning(&targets, color));
        }
        std::process::exit(1);
    }

    let recipe = Recipe::calculate(&targets, spec.volume, spec.units);

    if opts.json {
        println!(
            "{}",
            serde_json::to_string(&report::calc_event(&spec, &targets, &recipe))?
        );
        return Ok(());
    }

    if spec.yeast.is_turbo() {
        println!("{}", report::render_turbo_note(spec.sweetness).trim_end());
        println!();
    }
    print!("{}", report::render_report(&recipe));
    if opts.verbose > 0 {
        println!();
        print!("{}", report::render_breakdown(&spec, &recipe));
    }
    println!();
    print!("{}", report::render_closing());

    Ok(())
}
