use ecoshare_lib::co2;

use anyhow::Result;
use clap::Subcommand;
use tracing::info;

#[derive(Subcommand)]
pub enum ItemCommands {
    #[command(about = "Estimate CO2 saved per borrow for a listing")]
    Estimate {
        #[arg(long)]
        title: String,

        #[arg(long)]
        category: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, default_value = "Good")]
        condition: String,
    },
}

pub fn handle_estimate(
    title: &str,
    category: &str,
    description: &str,
    condition: &str,
) -> Result<()> {
    let estimate = co2::estimate(title, category, description, condition);
    info!("Estimated {} kg CO2 saved per borrow", estimate);
    info!("{}", co2::explanation(title, category));
    Ok(())
}
