use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "takvimi", version, author, about = "Prayer times for Kosovo and Albania, with a Qibla bearing")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a day's prayer times and the countdown to the next prayer
    Times {
        /// Date to show (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// City to adjust for, defaults to the configured city
        #[arg(long)]
        city: Option<String>,
    },
    /// Show only the next prayer and the time remaining
    Next {
        #[arg(long)]
        city: Option<String>,
    },
    /// Show three days either side of a date
    Week {
        /// Centre date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        city: Option<String>,
    },
    /// Show the Qibla bearing
    Qibla {
        /// Latitude in degrees
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Longitude in degrees
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },
    /// List the cities with local adjustments
    Cities,
    /// Show or change the saved configuration
    Config {
        #[arg(long)]
        city: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
        /// Directory holding <year>/<MM>.json takvim files
        #[arg(long)]
        data_dir: Option<PathBuf>,
        /// The year the takvim files cover
        #[arg(long)]
        year: Option<i32>,
        /// Use 12-hour clock output
        #[arg(long)]
        twelve_hour: Option<bool>,
    },
}
