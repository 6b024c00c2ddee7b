mod calc;
mod cmd;
mod data;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::calc::Decision;
use crate::cmd::apply::ApplyArgs;
use crate::cmd::calendar::MonthArgs;
use crate::data::{
    AppSettings, FileRepository, LeaveRepository, LeaveStatus, LeaveType, SampleRepository,
};

#[derive(Parser)]
#[command(name = "leavedesk", about = "leave applications, approvals and team calendar")]
struct Cli {
    /// Path to the data directory containing config and data files (default: ./config)
    #[arg(long, default_value = "./config", global = true)]
    data_dir: PathBuf,

    /// Reference date in YYYY-MM-DD form (default: today)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use the built-in sample data instead of the data directory
    #[arg(long, global = true)]
    sample: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the sample data set into the data directory
    Init,
    /// Balances, application counts and recent applications
    Dashboard,
    /// Show leave balances per type
    Balances,
    /// List your applications
    Applications {
        /// All, Pending, Approved, Rejected or Cancelled
        #[arg(short, long, default_value = "All")]
        status: String,
    },
    /// Show the team calendar for a month
    Calendar {
        #[arg(short, long)]
        year: Option<i32>,
        /// Month number, 1-12
        #[arg(short, long)]
        month: Option<u32>,
        /// Months to move forward (or backward, when negative)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i32,
    },
    /// List team leave starting today or later
    Upcoming {
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Fill in and submit a leave application
    Apply {
        /// annual, sick, emergency, maternity, paternity or unpaid
        #[arg(long = "type")]
        leave_type: Option<LeaveType>,
        #[arg(long)]
        start: Option<NaiveDate>,
        #[arg(long)]
        end: Option<NaiveDate>,
        #[arg(long, default_value = "")]
        reason: String,
        #[arg(long, default_value = "")]
        contact: String,
        #[arg(long, default_value = "")]
        handover: String,
        /// A supporting document is attached
        #[arg(long)]
        attachment: bool,
        /// Review the application without submitting it
        #[arg(long)]
        dry_run: bool,
    },
    /// Review team leave requests
    Approvals {
        /// Approve the application with this id
        #[arg(long, conflicts_with = "reject")]
        approve: Option<String>,
        /// Reject the application with this id
        #[arg(long)]
        reject: Option<String>,
        /// Note recorded with the decision
        #[arg(long)]
        comment: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Resolve data_dir to an absolute path so file I/O works regardless of
    // later directory changes within the process.
    let data_dir = if cli.data_dir.is_absolute() {
        cli.data_dir.clone()
    } else {
        std::env::current_dir()?.join(&cli.data_dir)
    };
    data::persistence::set_data_dir(data_dir.clone());

    // Auto-init when the data directory is missing or empty and the user did not
    // explicitly invoke the `init` subcommand.
    let is_init_command = matches!(cli.command, Some(Commands::Init));
    if !is_init_command && !cli.sample && dir_needs_init(&data_dir) {
        eprintln!(
            "Data directory '{}' is missing or empty - running init...",
            data_dir.display()
        );
        cmd::init::run()?;
    }

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let (repo, settings): (Box<dyn LeaveRepository>, AppSettings) = if cli.sample {
        (Box::new(SampleRepository), AppSettings::default())
    } else {
        let files = FileRepository::new(&data_dir);
        let settings = AppSettings::load_from(files.dir())?;
        (Box::new(files), settings)
    };
    let repo = repo.as_ref();
    tracing::debug!(data_dir = %data_dir.display(), %today, sample = cli.sample, "starting");

    match cli.command {
        None | Some(Commands::Dashboard) => cmd::dashboard::run(repo),
        Some(Commands::Init) => cmd::init::run(),
        Some(Commands::Balances) => cmd::balances::run(repo),
        Some(Commands::Applications { status }) => {
            cmd::applications::run(repo, parse_status_filter(&status)?)
        }
        Some(Commands::Calendar {
            year,
            month,
            offset,
        }) => cmd::calendar::run(
            repo,
            &settings,
            MonthArgs {
                year,
                month,
                offset,
            },
            today,
        ),
        Some(Commands::Upcoming { limit }) => {
            cmd::upcoming::run(repo, today, limit.unwrap_or(settings.upcoming_limit))
        }
        Some(Commands::Apply {
            leave_type,
            start,
            end,
            reason,
            contact,
            handover,
            attachment,
            dry_run,
        }) => cmd::apply::run(
            repo,
            ApplyArgs {
                leave_type,
                start,
                end,
                reason,
                contact,
                handover,
                attachment,
                dry_run,
            },
            today,
        ),
        Some(Commands::Approvals {
            approve,
            reject,
            comment,
        }) => {
            let decision = approve
                .map(|id| (id, Decision::Approve))
                .or(reject.map(|id| (id, Decision::Reject)));
            cmd::approvals::run(repo, &settings, decision, comment)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// "All" (any case) means no filter.
fn parse_status_filter(s: &str) -> anyhow::Result<Option<LeaveStatus>> {
    if s.trim().eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    s.parse::<LeaveStatus>()
        .map(Some)
        .map_err(anyhow::Error::msg)
        .context("invalid --status")
}

/// Returns true when `dir` does not exist or exists but contains no files.
fn dir_needs_init(dir: &std::path::Path) -> bool {
    if !dir.exists() {
        return true;
    }
    dir.read_dir()
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}
