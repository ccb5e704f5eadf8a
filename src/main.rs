use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};

use league_charts::charts::ChartError;
use league_charts::charts::manager_trend::{TrendData, build_manager_trend};
use league_charts::charts::playoffs::{PlayoffRow, build_playoff_chart};
use league_charts::charts::team_counts::build_team_counts;
use league_charts::input::{InputError, load_json, load_records};
use league_charts::logging::init_logging;
use league_charts::pipeline::position_order_from_records;
use league_charts::report::{JsonDirSink, write_category_chart};
use league_charts::{ChartConfig, ChartHandle, ChartKind, ChartSession, GroupBy, SeasonFilter};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG overrides it.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scatter series grouped by manager from per-player records.
    Series(SeriesArgs),
    /// Points-for and points-against line chart for one manager.
    Trend(TrendArgs),
    /// Playoff appearance bar chart.
    Playoffs(SourceArgs),
    /// Favourite NFL teams bar chart for one manager.
    Teams(TeamsArgs),
}

#[derive(Args, Debug, Clone)]
struct SourceArgs {
    #[arg(short, long)]
    input: PathBuf,

    /// Id of the <script> element holding the payload when the input is a page.
    #[arg(long)]
    script_id: Option<String>,

    #[arg(short, long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct SeriesArgs {
    #[command(flatten)]
    source: SourceArgs,

    #[arg(long, value_enum, default_value_t = ChartKind::PositionSummary)]
    chart: ChartKind,

    #[arg(long, value_enum)]
    group_by: Option<GroupBy>,

    /// Enabled seasons, comma separated. All seasons when omitted.
    #[arg(long, value_delimiter = ',')]
    seasons: Option<Vec<i32>>,

    /// Enable no seasons at all; every series comes out empty.
    #[arg(long, conflicts_with = "seasons")]
    no_seasons: bool,

    /// Categorical x-axis order, comma separated.
    #[arg(long, value_delimiter = ',', conflicts_with = "derive_positions")]
    positions: Option<Vec<String>>,

    /// Order positions as they first appear in the records.
    #[arg(long)]
    derive_positions: bool,

    #[arg(long)]
    no_jitter: bool,

    #[arg(long)]
    config: Option<PathBuf>,
}

impl SeriesArgs {
    fn season_filter(&self) -> SeasonFilter {
        if self.no_seasons {
            return SeasonFilter::Only(Default::default());
        }
        season_filter(self.seasons.as_deref())
    }
}

#[derive(Args, Debug)]
struct TrendArgs {
    #[command(flatten)]
    source: SourceArgs,

    #[arg(long)]
    manager: String,

    /// Season labels for the x-axis, comma separated.
    #[arg(long, value_delimiter = ',')]
    seasons: Option<Vec<i32>>,

    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct TeamsArgs {
    #[command(flatten)]
    source: SourceArgs,

    #[arg(long)]
    manager: String,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(err) = run(cli.command) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Series(args) => run_series(&args),
        Command::Trend(args) => run_trend(&args),
        Command::Playoffs(args) => run_playoffs(&args),
        Command::Teams(args) => run_teams(&args),
    }
}

fn run_series(args: &SeriesArgs) -> Result<(), String> {
    let config = load_config(args.config.as_deref())?;
    let source = &args.source;
    let Some(batch) = skip_missing(load_records(&source.input, source.script_id.as_deref()))?
    else {
        return Ok(());
    };

    let mut spec = config.spec_for(args.chart);
    if let Some(group_by) = args.group_by {
        spec.group_by = group_by;
    }
    if args.no_jitter {
        spec.jitter = None;
    }
    let position_order = if args.derive_positions {
        position_order_from_records(&batch.records)
    } else {
        args.positions
            .clone()
            .unwrap_or_else(|| config.position_order())
    };
    let palette = config.palette_for(args.chart).map_err(|e| e.to_string())?;
    let filter = args.season_filter();

    let sink = JsonDirSink::new(&source.out, args.chart, position_order.clone())
        .with_input_diagnostics(batch.diagnostics);
    let mut session = ChartSession::new(
        ChartHandle::new(args.chart.name()),
        batch.records,
        position_order,
        palette,
        spec,
        sink,
    );
    session.apply_filter(filter).map_err(|e| e.to_string())?;
    Ok(())
}

fn run_trend(args: &TrendArgs) -> Result<(), String> {
    let config = load_config(args.config.as_deref())?;
    let source = &args.source;
    let Some(data) =
        skip_missing(load_json::<TrendData>(&source.input, source.script_id.as_deref()))?
    else {
        return Ok(());
    };
    let seasons = args
        .seasons
        .clone()
        .unwrap_or_else(|| config.trend_seasons());

    let chart = match build_manager_trend(&data, &args.manager, &seasons) {
        Ok(chart) => chart,
        Err(ChartError::MissingDataSource(msg)) => {
            tracing::warn!("{msg}; chart not rendered");
            return Ok(());
        }
    };
    write_category_chart(&source.out, &output_name("manager-trend", &args.manager), &chart)
        .map_err(|e| e.to_string())?;
    Ok(())
}

fn run_playoffs(source: &SourceArgs) -> Result<(), String> {
    let Some(rows) = skip_missing(load_json::<Vec<PlayoffRow>>(
        &source.input,
        source.script_id.as_deref(),
    ))?
    else {
        return Ok(());
    };
    let chart = build_playoff_chart(&rows);
    write_category_chart(&source.out, "playoffs", &chart).map_err(|e| e.to_string())?;
    Ok(())
}

fn run_teams(args: &TeamsArgs) -> Result<(), String> {
    let source = &args.source;
    let Some(counts) = skip_missing(load_json::<Vec<(String, u32)>>(
        &source.input,
        source.script_id.as_deref(),
    ))?
    else {
        return Ok(());
    };
    let chart = match build_team_counts(&args.manager, &counts) {
        Ok(chart) => chart,
        Err(ChartError::MissingDataSource(msg)) => {
            tracing::warn!("{msg}; chart not rendered");
            return Ok(());
        }
    };
    write_category_chart(&source.out, &output_name("team-counts", &args.manager), &chart)
        .map_err(|e| e.to_string())?;
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ChartConfig, String> {
    match path {
        Some(path) => ChartConfig::load(path).map_err(|e| e.to_string()),
        None => Ok(ChartConfig::default()),
    }
}

fn skip_missing<T>(result: Result<T, InputError>) -> Result<Option<T>, String> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_missing_source() => {
            tracing::warn!("{err}; chart not rendered");
            Ok(None)
        }
        Err(err) => Err(err.to_string()),
    }
}

fn season_filter(seasons: Option<&[i32]>) -> SeasonFilter {
    match seasons {
        Some(seasons) => SeasonFilter::only(seasons.iter().copied()),
        None => SeasonFilter::All,
    }
}

fn output_name(prefix: &str, manager: &str) -> String {
    let slug: String = manager
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    format!("{prefix}-{}", slug.trim_matches('-'))
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
