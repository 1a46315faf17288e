//! Command-line access to the pool administration API.

use clap::{Args, Parser, Subcommand};
use dotenvy::dotenv;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use albrd_admin::api::ApiClient;
use albrd_admin::errors::{AppError, ErrorModel, MappingError};
use albrd_admin::forms::attendance::{AttendanceParams, AttendanceParamsDto};
use albrd_admin::forms::page::{DEFAULT_PAGE_SIZE, PageParams, PageParamsDto};
use albrd_admin::forms::quota::{QuotaParams, QuotaParamsDto};
use albrd_admin::forms::sale::{SaleDetailParams, SaleDetailParamsDto};
use albrd_admin::forms::survey::{
    ResultDeleteParams, ResultDeleteParamsDto, SurveyReportParams, SurveyReportParamsDto,
};
use albrd_admin::models::config::AppConfig;
use albrd_admin::services::{pool, report, survey};
use albrd_admin::transport::{HttpTransport, Session};

#[derive(Parser)]
#[command(
    name = "albrd-admin",
    version,
    about = "Query the pool administration API",
    long_about = "Query the pool administration API.\n\n\
                  Settings are read from config/default.yaml, config/{APP_ENV}.yaml \
                  and APP_* environment variables."
)]
struct Cli {
    /// Session token sent with every request (overrides `session_token`).
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List pools.
    Pools(PageArgs),

    /// List trainers.
    Trainers(PageArgs),

    /// Daily attendance of one pool.
    Attendance {
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long)]
        end_date: Option<String>,
        #[arg(long)]
        pool_id: Option<String>,
    },

    /// List survey questions.
    Questions,

    /// Survey report for a date range.
    Report {
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
        #[arg(long)]
        pool_id: Option<String>,
        #[arg(long)]
        question_id: Option<String>,
    },

    /// Sale lines for a date range.
    Sales {
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long)]
        end_date: Option<String>,
        #[arg(long)]
        pool_id: Option<String>,
    },

    /// Quota schedule of one pool.
    Quotas {
        #[arg(long)]
        pool_id: Option<String>,
    },

    /// Delete one survey result.
    DeleteResult {
        #[arg(long)]
        result_id: Option<String>,
    },
}

#[derive(Args)]
struct PageArgs {
    #[arg(long, default_value = "0")]
    start_index: String,

    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE.to_string())]
    max_results: String,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Invalid(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ErrorModel),

    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

impl From<MappingError> for CliError {
    fn from(err: MappingError) -> Self {
        CliError::Invalid(err.into())
    }
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Invalid(_) => 2,
            CliError::Service(_) | CliError::Output(_) => 1,
        }
    }
}

/// Builds a form payload from the arguments that were given.
fn payload(fields: &[(&str, Option<&String>)]) -> Value {
    let map: Map<String, Value> = fields
        .iter()
        .filter_map(|(name, value)| {
            value.map(|value| (name.to_string(), Value::String(value.clone())))
        })
        .collect();
    Value::Object(map)
}

fn render<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

async fn run(api: &ApiClient, session: &Session, command: Command) -> Result<String, CliError> {
    match command {
        Command::Pools(args) => {
            let dto = PageParamsDto::from_payload(&args.payload())?;
            let params = PageParams::try_from(&dto)?;
            render(&pool::list_pools(api, session, &params).await?.view(&params))
        }
        Command::Trainers(args) => {
            let dto = PageParamsDto::from_payload(&args.payload())?;
            let params = PageParams::try_from(&dto)?;
            render(&pool::list_trainers(api, session, &params).await?.view(&params))
        }
        Command::Attendance {
            start_date,
            end_date,
            pool_id,
        } => {
            let dto = AttendanceParamsDto::from_payload(&payload(&[
                ("startDate", start_date.as_ref()),
                ("endDate", end_date.as_ref()),
                ("poolId", pool_id.as_ref()),
            ]))?;
            let params = AttendanceParams::try_from(&dto)?;
            render(&report::list_attendance(api, session, &params).await?)
        }
        Command::Questions => render(&survey::list_questions(api, session).await?),
        Command::Report {
            from,
            to,
            pool_id,
            question_id,
        } => {
            let dto = SurveyReportParamsDto::from_payload(&payload(&[
                ("from", from.as_ref()),
                ("to", to.as_ref()),
                ("poolId", pool_id.as_ref()),
                ("questionId", question_id.as_ref()),
            ]))?;
            let params = SurveyReportParams::try_from(&dto)?;
            render(&survey::get_survey_report(api, session, &params).await?)
        }
        Command::Sales {
            start_date,
            end_date,
            pool_id,
        } => {
            let dto = SaleDetailParamsDto::from_payload(&payload(&[
                ("startDate", start_date.as_ref()),
                ("endDate", end_date.as_ref()),
                ("poolId", pool_id.as_ref()),
            ]))?;
            let params = SaleDetailParams::try_from(&dto)?;
            render(&report::list_sale_details(api, session, &params).await?)
        }
        Command::Quotas { pool_id } => {
            let dto = QuotaParamsDto::from_payload(&payload(&[("poolId", pool_id.as_ref())]))?;
            let params = QuotaParams::try_from(&dto)?;
            render(&pool::list_quotas(api, session, &params).await?)
        }
        Command::DeleteResult { result_id } => {
            let dto =
                ResultDeleteParamsDto::from_payload(&payload(&[("resultId", result_id.as_ref())]))?;
            let params = ResultDeleteParams::try_from(&dto)?;
            survey::delete_result(api, session, &params).await?;
            Ok(format!("Resultado {} eliminado", params.result_id))
        }
    }
}

impl PageArgs {
    fn payload(&self) -> Value {
        payload(&[
            ("startIndex", Some(&self.start_index)),
            ("maxResults", Some(&self.max_results)),
        ])
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    let app_config = match AppConfig::load() {
        Ok(app_config) => app_config,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    log::debug!(
        "Identity pool `{}` in region `{}`",
        app_config.identity.user_pool_id,
        app_config.identity.region
    );

    let transport =
        match HttpTransport::from_base_url(&app_config.api_base_url, app_config.request_timeout()) {
            Ok(transport) => transport,
            Err(err) => {
                log::error!("Failed to build HTTP client: {err}");
                std::process::exit(1);
            }
        };

    let api = ApiClient::new(transport);
    let session = Session::new(cli.token.or(app_config.session_token));

    match run(&api, &session, cli.command).await {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(err.exit_code());
        }
    }
}
