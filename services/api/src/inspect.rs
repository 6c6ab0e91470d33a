use crate::infra::{load_inputs, scoring_service};
use clap::Args;
use credit_score::error::AppError;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct InspectArgs {
    /// Input mapping as inline JSON, e.g. '{"age": 30, "monthly_salary": 5e7}'
    #[arg(long, conflicts_with = "inputs_file")]
    pub(crate) inputs: Option<String>,
    /// Path to a JSON file holding the input mapping
    #[arg(long)]
    pub(crate) inputs_file: Option<PathBuf>,
}

pub(crate) fn run_classify(args: InspectArgs) -> Result<(), AppError> {
    let service = scoring_service()?;
    let inputs = load_inputs(args.inputs.as_deref(), args.inputs_file.as_deref())?;

    print_json(&service.classify_customer(&inputs))
}

pub(crate) fn run_breakdown(args: InspectArgs) -> Result<(), AppError> {
    let service = scoring_service()?;
    let inputs = load_inputs(args.inputs.as_deref(), args.inputs_file.as_deref())?;

    print_json(&service.score_breakdown(&inputs))
}

fn print_json<T: Serialize>(response: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(response)?;
    println!("{rendered}");
    Ok(())
}
