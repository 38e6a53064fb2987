use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use tracing::info;

use loan_advisor::config::AppConfig;
use loan_advisor::error::AppError;
use loan_advisor::telemetry;
use loan_advisor::workflows::loan::{
    dataset, decision_router, payslip, LoanScreeningService, ScreeningOutcome,
};

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Loan Screening Advisor",
    about = "Explain loan approval decisions and run the screening service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Screen applicant rows from a CSV dataset and print decisions
    Screen(ScreenArgs),
    /// Analyze extracted payslip text and print the salary-based tier
    Payslip(PayslipArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct ScreenArgs {
    /// Applicant CSV export (falls back to APP_DATASET_PATH)
    #[arg(long)]
    data: Option<PathBuf>,
    /// Zero-based row to screen; all rows when omitted
    #[arg(long)]
    row: Option<usize>,
}

#[derive(Args, Debug)]
struct PayslipArgs {
    /// Text file containing already-extracted payslip content
    #[arg(long)]
    text: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => run_server(args).await,
        Command::Screen(args) => run_screen(args),
        Command::Payslip(args) => run_payslip(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let service = Arc::new(LoanScreeningService::default());

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(decision_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "loan screening advisor ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_screen(args: ScreenArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let path = args
        .data
        .or(config.screening.dataset_path)
        .ok_or_else(|| {
            std::io::Error::new(
                ErrorKind::NotFound,
                "no dataset given; pass --data or set APP_DATASET_PATH",
            )
        })?;

    let requests = dataset::from_path(&path)?;
    let service = LoanScreeningService::default();

    match args.row {
        Some(index) => {
            let request = dataset::select_row(&requests, index)?;
            render_outcome(index, &service.screen(request));
        }
        None => {
            for (index, outcome) in service.screen_all(&requests).iter().enumerate() {
                render_outcome(index, outcome);
            }
        }
    }

    Ok(())
}

fn run_payslip(args: PayslipArgs) -> Result<(), AppError> {
    let text = std::fs::read_to_string(&args.text)?;

    let entries = payslip::parse_salary_lines(&text);
    let summary = payslip::summarize(&entries);

    println!("Payslip line items");
    if entries.is_empty() {
        println!("- none recognized");
    }
    for (label, amount) in &entries {
        println!("- {label}: {amount:.2}");
    }

    println!("\nTotal earnings: {:.2}", summary.total_earnings);
    println!("Net salary: {:.2}", summary.net_salary);
    println!("Loan eligibility: {}", summary.eligibility.message());

    Ok(())
}

fn render_outcome(index: usize, outcome: &ScreeningOutcome) {
    let candidate = outcome
        .candidate_id
        .as_ref()
        .map(|id| id.0.as_str())
        .unwrap_or("unidentified");

    println!(
        "Row {index} | {candidate} | {}",
        outcome.decision.status.label()
    );
    println!(
        "  DTI {} | expense ratio {} | disposable income {:.0}",
        fmt_ratio(outcome.ratios.debt_to_income),
        fmt_ratio(outcome.ratios.expense_ratio),
        outcome.ratios.disposable_income
    );
    for reason in &outcome.decision.reasons {
        println!("  - {reason}");
    }
}

fn fmt_ratio(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        "n/a".to_string()
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
