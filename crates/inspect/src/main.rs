// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, ValueEnum};
use shiftboard_api::{Dashboard, GenerateScheduleRequest, MonthReport, MonthStatus};
use shiftboard_domain::ScheduleMonth;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Shiftboard Inspect - reconcile exported API payloads and print a month
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON body of the employees endpoint
    #[arg(short, long)]
    employees: Option<PathBuf>,

    /// Path to the JSON body of the shifts endpoint
    #[arg(long)]
    shifts: Option<PathBuf>,

    /// Path to the JSON body of the schedules endpoint
    #[arg(long)]
    schedules: PathBuf,

    /// Year of the month to report. Without it every stored month is listed.
    #[arg(short, long)]
    year: Option<i32>,

    /// Month to report, 0-based (0 = January)
    #[arg(short, long, requires = "year")]
    month: Option<u8>,

    /// Print the generation request for the reported month for this account
    #[arg(long, requires = "month")]
    account: Option<i64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Which view of the dashboard to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Overview,
    Month { year: i32, month: ScheduleMonth },
    Generation {
        account_id: i64,
        year: i32,
        month: ScheduleMonth,
    },
}

impl View {
    fn from_args(args: &Args) -> Result<Self, Box<dyn std::error::Error>> {
        let (Some(year), Some(index)) = (args.year, args.month) else {
            return Ok(Self::Overview);
        };
        let month: ScheduleMonth = ScheduleMonth::new(index)?;
        Ok(args.account.map_or(Self::Month { year, month }, |account_id| {
            Self::Generation {
                account_id,
                year,
                month,
            }
        }))
    }
}

fn read_body(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    std::fs::read_to_string(path)
        .map_err(|err| format!("Failed to read {}: {err}", path.display()).into())
}

/// Loads the payloads into a dashboard in the order the dashboard fetches
/// them: employees, shifts, then schedules.
fn load_dashboard(
    employees: Option<&str>,
    shifts: Option<&str>,
    schedules: &str,
) -> Result<Dashboard, Box<dyn std::error::Error>> {
    let mut dashboard: Dashboard = Dashboard::new();

    if let Some(body) = employees {
        dashboard.load_employees(body)?;
    }
    if let Some(body) = shifts {
        dashboard.load_shifts(body)?;
    }
    let count: usize = dashboard.load_schedules(schedules)?;

    for (year, month) in dashboard.store().invalid_months() {
        warn!(year, month = %month, "Schedule is out of date with the rosters");
    }
    info!(schedules = count, "Dashboard loaded");

    Ok(dashboard)
}

fn render(
    dashboard: &Dashboard,
    view: View,
    format: Format,
) -> Result<String, Box<dyn std::error::Error>> {
    let output: String = match view {
        View::Overview => {
            let overview: Vec<MonthStatus> = dashboard.overview();
            match format {
                Format::Json => serde_json::to_string_pretty(&overview)?,
                Format::Text => overview
                    .iter()
                    .map(|status| format!("{status}\n"))
                    .collect(),
            }
        }
        View::Month { year, month } => {
            let report: MonthReport = dashboard.month_report(year, month)?;
            match format {
                Format::Json => serde_json::to_string_pretty(&report)?,
                Format::Text => report.to_string(),
            }
        }
        View::Generation {
            account_id,
            year,
            month,
        } => {
            let request: GenerateScheduleRequest =
                dashboard.generation_request(account_id, year, month)?;
            serde_json::to_string_pretty(&request)?
        }
    };
    Ok(output)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let view: View = View::from_args(&args)?;

    let employees: Option<String> = args.employees.as_deref().map(read_body).transpose()?;
    let shifts: Option<String> = args.shifts.as_deref().map(read_body).transpose()?;
    let schedules: String = read_body(&args.schedules)?;

    let dashboard: Dashboard =
        load_dashboard(employees.as_deref(), shifts.as_deref(), &schedules)?;

    print!("{}", render(&dashboard, view, args.format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPLOYEES: &str = r#"[
        {"employee_id": 1, "employee_name": "Alice"},
        {"employee_id": 2, "employee_name": "Bob"}
    ]"#;
    const SHIFTS: &str = r#"[
        {"shift_id": 1, "shift_name": "Early", "start_time": "06:00", "end_time": "14:00"},
        {"shift_id": 2, "shift_name": "Late", "start_time": "14:00", "end_time": "22:00"}
    ]"#;
    const SCHEDULES: &str = r#"[
        {"schedule_id": 3, "year": 2025, "month": 9, "schedule": [[[1], [2]]]},
        {"schedule_id": 4, "year": 2025, "month": 10, "schedule": [[[1], [7]]]}
    ]"#;

    #[allow(clippy::unwrap_used)]
    fn month(index: u8) -> ScheduleMonth {
        ScheduleMonth::new(index).unwrap()
    }

    #[allow(clippy::unwrap_used)]
    #[test]
    fn test_args_select_view() {
        let args: Args = Args::parse_from([
            "shiftboard-inspect",
            "--schedules",
            "schedules.json",
            "--year",
            "2025",
            "--month",
            "9",
        ]);
        assert_eq!(
            View::from_args(&args).unwrap(),
            View::Month {
                year: 2025,
                month: month(9)
            }
        );

        let args: Args = Args::parse_from(["shiftboard-inspect", "--schedules", "s.json"]);
        assert_eq!(View::from_args(&args).unwrap(), View::Overview);
        assert_eq!(args.format, Format::Text);
    }

    #[test]
    fn test_args_require_year_with_month() {
        let result: Result<Args, clap::Error> =
            Args::try_parse_from(["shiftboard-inspect", "--schedules", "s.json", "-m", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_reject_month_out_of_range() {
        let args: Args = Args::parse_from([
            "shiftboard-inspect",
            "--schedules",
            "s.json",
            "-y",
            "2025",
            "-m",
            "12",
        ]);
        assert!(View::from_args(&args).is_err());
    }

    #[allow(clippy::unwrap_used)]
    #[test]
    fn test_overview_text_flags_out_of_date_months() {
        let dashboard: Dashboard =
            load_dashboard(Some(EMPLOYEES), Some(SHIFTS), SCHEDULES).unwrap();
        let output: String = render(&dashboard, View::Overview, Format::Text).unwrap();

        assert_eq!(
            output,
            "October 2025: schedule 3, 1 days, valid\nNovember 2025: schedule 4, 1 days, out of date\n"
        );
    }

    #[allow(clippy::unwrap_used)]
    #[test]
    fn test_month_json_output() {
        let dashboard: Dashboard =
            load_dashboard(Some(EMPLOYEES), Some(SHIFTS), SCHEDULES).unwrap();
        let output: String = render(
            &dashboard,
            View::Month {
                year: 2025,
                month: month(9),
            },
            Format::Json,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["month_name"], "October");
        assert_eq!(value["days"][0]["shifts"][1]["employees"][0], "Bob");
    }

    #[allow(clippy::unwrap_used)]
    #[test]
    fn test_generation_view_prints_request() {
        let dashboard: Dashboard =
            load_dashboard(Some(EMPLOYEES), Some(SHIFTS), SCHEDULES).unwrap();
        let output: String = render(
            &dashboard,
            View::Generation {
                account_id: 8,
                year: 2025,
                month: month(10),
            },
            Format::Text,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["num_days"], 30);
        assert_eq!(value["schedule_id"], 4);
    }

    #[test]
    fn test_schedules_without_rosters_stay_valid() {
        let dashboard: Result<Dashboard, Box<dyn std::error::Error>> =
            load_dashboard(None, None, SCHEDULES);
        assert!(dashboard.is_ok_and(|dashboard| dashboard.store().invalid_months().is_empty()));
    }
}
