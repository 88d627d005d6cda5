use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use u_grouping::grouping::{render, GroupingRunner, SolveResult};
use u_grouping::ilp::GoodLpSolver;
use u_grouping::settings::Settings;

const EXIT_INFEASIBLE: u8 = 1;
const EXIT_CONFIG: u8 = 2;
const EXIT_UNKNOWN: u8 = 3;

fn main() -> ExitCode {
    let settings = Settings::from_env();

    // Logs go to stderr. HiGHS writes its own log to stdout when verbose.
    let rust_log = settings
        .as_ref()
        .map(|s| s.rust_log.clone())
        .unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(rust_log)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = match settings {
        Ok(s) => s,
        Err(e) => {
            error!("configuration error: {e}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    let solver = GoodLpSolver::new();
    info!(
        "u-grouping v{} ({} backend)",
        env!("CARGO_PKG_VERSION"),
        solver.backend_name()
    );

    let result = match GroupingRunner::run(&settings.grouping, &solver, &settings.solver) {
        Ok(r) => r,
        Err(e) => {
            error!("configuration error: {e}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    print!("{}", render(&result));
    match result {
        SolveResult::Optimal(_) => ExitCode::SUCCESS,
        SolveResult::Infeasible => ExitCode::from(EXIT_INFEASIBLE),
        SolveResult::Unknown(reason) => {
            error!("no verdict: {reason}");
            ExitCode::from(EXIT_UNKNOWN)
        }
    }
}
