use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use harvestcalc::{plan::PlanLoader, report::FarmReport};

#[derive(Debug, Parser)]
#[command(author, version, about = "Farm yield and profit calculator")]
struct Cli {
    /// Path to the farm plan YAML file
    #[arg(long, default_value = "plans/river_field.yaml")]
    plan: PathBuf,

    /// Compute under neutral conditions, ignoring the plan's environment
    #[arg(long)]
    ignore_environment: bool,

    /// Directory for JSON reports (no report is written when omitted)
    #[arg(long)]
    report_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loader = PlanLoader::new(".");
    let plan = loader.load(&cli.plan)?;
    let group = plan.build_group();
    let reading = if cli.ignore_environment {
        None
    } else {
        plan.environment()
    };

    let report = FarmReport::build(&plan.name, &group, reading)?;
    for figures in &report.plantings {
        println!(
            "{:12} x{:<4} yield {:8.2}  cost {:8.2}  revenue {:8.2}  profit {:8.2}",
            figures.crop, figures.count, figures.expected_yield, figures.cost, figures.revenue,
            figures.profit
        );
    }
    println!(
        "Plan '{}': total yield {:.2}, total profit {:.2}",
        plan.name, report.total_yield, report.total_profit
    );

    if let Some(dir) = cli.report_dir {
        let path = report.write_json(dir)?;
        println!("Report written to {}", path.display());
    }
    Ok(())
}
