extern crate hce;

use clap::Parser;
use hce::core::units::MONTH_LABELS;
use hce::input::HouseholdProfile;
use hce::output::{FileOutput, SinkOutput};
use hce::{run_project, EnergyEstimate};
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct HceArgs {
    /// JSON household profile file
    input_file: String,
    /// Electricity tariff rate, in currency per kWh
    #[arg(long, short, value_parser = rate_in_widget_range)]
    rate_per_kwh: Option<f64>,
    /// Directory for the CSV result files (defaults to the input file's directory)
    #[arg(long, short)]
    output_dir: Option<PathBuf>,
    /// Print the summary without writing any result files
    #[arg(long, default_value_t = false)]
    summary_only: bool,
}

// The 2.0-10.0 range is the input surface's clamp; the estimator itself
// accepts any non-negative rate.
fn rate_in_widget_range(arg: &str) -> Result<f64, String> {
    let rate: f64 = arg
        .parse()
        .map_err(|_| format!("'{arg}' is not a number"))?;
    if (2.0..=10.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(format!(
            "rate must be between 2.0 and 10.0 per kWh (got {rate})"
        ))
    }
}

fn main() -> anyhow::Result<()> {
    let args = HceArgs::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let input_file = args.input_file.as_str();
    let input_file_ext = Path::new(input_file).extension().and_then(OsStr::to_str);
    let input_file_stem = match input_file_ext {
        Some(ext) => &input_file[..(input_file.len() - ext.len() - 1)],
        None => input_file,
    };

    let input = BufReader::new(File::open(Path::new(input_file))?);

    let (profile, estimate) = if args.summary_only {
        run_project(input, SinkOutput, args.rate_per_kwh)?
    } else {
        let output_dir = args.output_dir.unwrap_or_else(|| {
            Path::new(input_file)
                .parent()
                .unwrap_or(Path::new("."))
                .to_path_buf()
        });
        let file_stem = Path::new(input_file_stem)
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or(input_file_stem);
        let output = FileOutput::new(output_dir.clone(), format!("{file_stem}_{{}}.csv"));
        let results = run_project(input, &output, args.rate_per_kwh)?;
        info!("result files written under {}", output_dir.display());
        results
    };

    print_summary(&profile, &estimate);

    Ok(())
}

fn print_summary(profile: &HouseholdProfile, estimate: &EnergyEstimate) {
    match &profile.name {
        Some(name) => println!("Hello, {name}!"),
        // no name means no personalisation; the estimate is still computed
        // and written
        None => println!("No name supplied - treat the figures below as a sample."),
    }
    println!("Your daily energy consumption: {:.1} kWh", estimate.daily_kwh);

    if let (Some(area), Some(city)) = (&profile.area, &profile.city) {
        println!("Location: {area}, {city}");
    }
    match &profile.tenancy {
        Some(tenancy) => println!(
            "Housing: {} {}",
            profile.accommodation_type, tenancy
        ),
        None => println!("Housing: {}", profile.accommodation_type),
    }
    if let Some(age) = profile.age {
        println!("Age: {age} years");
    }

    println!();
    println!("Breakdown:");
    // zero rows are filtered from the printed view only; the CSV keeps them
    for (category, energy) in estimate.breakdown.iter().filter(|(_, energy)| **energy > 0.) {
        println!("  {category}: {energy} kWh/day");
    }

    println!();
    println!("Monthly projection (kWh):");
    for (month_idx, projected) in estimate.monthly_projection_kwh.iter().enumerate() {
        println!("  {}: {projected:.1}", MONTH_LABELS[month_idx]);
    }

    if let Some(costs) = &estimate.costs {
        println!();
        println!("Cost estimation:");
        println!("  Daily cost: {:.2}", costs.daily_cost);
        println!("  Monthly cost: {:.2}", costs.monthly_cost);
        println!("  Yearly cost: {:.2}", costs.yearly_cost);
    }

    println!();
    println!("Energy saving tips:");
    for tip in ENERGY_SAVING_TIPS {
        println!("  - {tip}");
    }
}

const ENERGY_SAVING_TIPS: [&str; 8] = [
    "Set air conditioning to 24-26 degrees C and keep doors and windows closed",
    "Use fans to circulate air before reaching for the AC",
    "Keep the fridge at its optimal temperature and don't overfill it",
    "Check fridge door seals and defrost regularly",
    "Use LED bulbs",
    "Unplug unused devices",
    "Use power strips",
    "Maintain appliances regularly",
];
