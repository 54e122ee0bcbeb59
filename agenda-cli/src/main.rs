mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Keep a personal agenda of single and repeating events")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an event, optionally repeating
    Add {
        title: String,

        /// First day of the event (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,

        /// Last day of the first occurrence (YYYY-MM-DD, defaults to start)
        #[arg(short, long)]
        end: Option<String>,

        /// Start time (HH:MM); omit both times for an all-day event
        #[arg(long)]
        start_time: Option<String>,

        /// End time (HH:MM)
        #[arg(long)]
        end_time: Option<String>,

        /// Where the event takes place
        #[arg(short, long)]
        location: Option<String>,

        /// Icon tag (event, cake, work, school, schedule, favorite,
        /// restaurant, sports_soccer, group)
        #[arg(short, long, default_value = "event")]
        icon: String,

        /// Repeat rule: none, daily, weekly, monthly or yearly
        #[arg(short, long, default_value = "none")]
        repeat: String,

        /// Repeat until this date inclusive (YYYY-MM-DD); prompted when
        /// omitted for a repeating event
        #[arg(short, long)]
        until: Option<String>,

        /// Weekdays to skip for daily repeats ("Sun,Sat" or "0,6")
        #[arg(short = 'x', long)]
        exclude: Option<String>,
    },
    /// Show events on a date (defaults to today)
    Day { date: Option<String> },
    /// List every stored event
    List,
    /// Search events by title, location or date
    Search { query: String },
    /// Render a month grid with event markers
    Month {
        /// Month to render (YYYY-MM, defaults to the current month)
        month: Option<String>,
    },
    /// Show or switch the color theme
    Theme { name: Option<String> },
    /// Show resolved configuration paths
    Config {
        /// Set where agenda data is stored (existing data is not moved)
        #[arg(long)]
        data_dir: Option<std::path::PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Add {
            title,
            start,
            end,
            start_time,
            end_time,
            location,
            icon,
            repeat,
            until,
            exclude,
        } => commands::add::run(
            title, start, end, start_time, end_time, location, icon, repeat, until, exclude,
        ),
        Commands::Day { date } => commands::day::run(date),
        Commands::List => commands::list::run(),
        Commands::Search { query } => commands::search::run(&query),
        Commands::Month { month } => commands::month::run(month),
        Commands::Theme { name } => commands::theme::run(name),
        Commands::Config { data_dir } => commands::config::run(data_dir),
    }
}
