//! Household Balance command line.
//!
//! ```text
//! household-balance sample <initial|WEEK>
//! household-balance report <responses.json> [initial|WEEK]
//! ```
//!
//! Output is JSON on stdout; logs go to stderr.

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use household_balance::adapters::{FileQuestionBank, InMemoryHouseholdStore};
use household_balance::application::{
    RecommendTasksHandler, RecommendTasksQuery, RecordCheckInCommand, RecordCheckInHandler,
    SampleCheckInHandler, SampleCheckInQuery,
};
use household_balance::config::{AppConfig, LoggingConfig};
use household_balance::domain::balance::BalanceSnapshot;
use household_balance::domain::foundation::{FamilyId, Period};
use household_balance::domain::history::TrendInsights;
use household_balance::domain::recommendations::TaskRecommendation;
use household_balance::domain::survey::{FamilyPriorities, ResponseMap};

const RECOMMENDATION_LIMIT: usize = 5;

/// Household balance check-ins and reports.
#[derive(Debug, Parser)]
#[command(name = "household-balance", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the check-in questions sampled for a period
    Sample {
        /// `initial` or a week number
        #[arg(default_value = "initial")]
        period: Period,
    },

    /// Score a responses file and print the snapshot, insights and recommendations
    Report {
        /// JSON file with the answers, optionally wrapped with priorities
        responses: PathBuf,

        /// `initial` or a week number
        #[arg(default_value = "initial")]
        period: Period,
    },
}

/// A responses file: either a bare answer map or answers plus priorities.
#[derive(Deserialize)]
#[serde(untagged)]
enum ReportInput {
    Full {
        responses: ResponseMap,
        #[serde(default)]
        priorities: FamilyPriorities,
    },
    Bare(ResponseMap),
}

impl ReportInput {
    fn into_parts(self) -> (ResponseMap, FamilyPriorities) {
        match self {
            ReportInput::Full {
                responses,
                priorities,
            } => (responses, priorities),
            ReportInput::Bare(responses) => (responses, FamilyPriorities::neutral()),
        }
    }
}

#[derive(Serialize)]
struct Report {
    snapshot: BalanceSnapshot,
    insights: Option<TrendInsights>,
    recommendations: Vec<TaskRecommendation>,
}

fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    init_tracing(&config.logging);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return Err(e.into());
    }

    let bank = Arc::new(FileQuestionBank::new(config.question_bank.path.clone()));
    let store = Arc::new(InMemoryHouseholdStore::new());
    let family_id = FamilyId::new();

    let output = match cli.command {
        Command::Sample { period } => {
            store
                .register_family(family_id, FamilyPriorities::neutral())
                .await;
            let handler =
                SampleCheckInHandler::new(bank, store, config.sampler.settings());
            let questions = handler
                .handle(SampleCheckInQuery { family_id, period })
                .await?;
            serde_json::to_string_pretty(&questions)?
        }
        Command::Report { responses, period } => {
            let contents = tokio::fs::read_to_string(&responses).await?;
            let (responses, priorities) =
                serde_json::from_str::<ReportInput>(&contents)?.into_parts();
            info!(answers = responses.len(), period = %period, "Building balance report");

            store.register_family(family_id, priorities).await;
            let recorded = RecordCheckInHandler::new(
                bank.clone(),
                store.clone(),
                store.clone(),
                store.clone(),
            )
            .handle(RecordCheckInCommand {
                family_id,
                period,
                responses,
            })
            .await?;
            let recommendations = RecommendTasksHandler::new(bank, store.clone(), store)
                .handle(RecommendTasksQuery {
                    family_id,
                    period,
                    limit: RECOMMENDATION_LIMIT,
                })
                .await?;

            serde_json::to_string_pretty(&Report {
                snapshot: recorded.snapshot,
                insights: recorded.insights,
                recommendations,
            })?
        }
    };

    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("household-balance").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn sample_defaults_to_initial() {
        let cli = parse(&["sample"]).unwrap();
        assert!(matches!(cli.command, Command::Sample { period: Period::Initial }));
    }

    #[test]
    fn sample_accepts_week_labels() {
        let cli = parse(&["sample", "week-3"]).unwrap();
        assert!(matches!(cli.command, Command::Sample { period: Period::Week(3) }));
    }

    #[test]
    fn report_takes_path_and_period() {
        let cli = parse(&["report", "answers.json", "2"]).unwrap();
        match cli.command {
            Command::Report { responses, period } => {
                assert_eq!(responses, PathBuf::from("answers.json"));
                assert_eq!(period, Period::Week(2));
            }
            other => panic!("Expected Report, got {:?}", other),
        }
    }

    #[test]
    fn report_requires_a_responses_file() {
        assert!(parse(&["report"]).is_err());
    }

    #[test]
    fn week_zero_and_unknown_commands_are_rejected() {
        assert!(parse(&["sample", "0"]).is_err());
        assert!(parse(&["sample", "soon"]).is_err());
        assert!(parse(&["tally"]).is_err());
    }
}
