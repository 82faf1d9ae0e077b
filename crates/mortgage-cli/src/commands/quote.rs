use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use mortgage_core::normalize::normalize_amount;
use mortgage_core::repayment::{calculate_repayment, RepaymentInput};
use mortgage_core::types::RepaymentType;

use crate::input;

/// Arguments for a repayment quote
#[derive(Args)]
pub struct QuoteArgs {
    /// Amount borrowed; free text, separators and whitespace accepted
    #[arg(long)]
    pub amount: Option<String>,

    /// Annual interest rate as a whole percentage (5.25 means 5.25%)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Term in whole years
    #[arg(long)]
    pub term: Option<u32>,

    /// How the loan is paid down
    #[arg(long, value_enum, default_value = "repayment")]
    pub repayment_type: RepaymentTypeArg,

    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Command-line mirror of the core repayment type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RepaymentTypeArg {
    /// Level monthly payment covering interest and principal
    Repayment,
    /// Monthly payment covers interest only
    InterestOnly,
}

impl From<RepaymentTypeArg> for RepaymentType {
    fn from(arg: RepaymentTypeArg) -> Self {
        match arg {
            RepaymentTypeArg::Repayment => RepaymentType::Repayment,
            RepaymentTypeArg::InterestOnly => RepaymentType::InterestOnly,
        }
    }
}

pub fn run_quote(args: QuoteArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let quote_input: RepaymentInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(piped) = input::stdin::read_stdin()? {
        piped
    } else {
        let amount_text = args
            .amount
            .ok_or("--amount is required (or provide --input)")?;
        let normalized = normalize_amount(&amount_text);
        let principal = match normalized.principal {
            Some(principal) => principal,
            None if normalized.invalid => {
                return Err(format!(
                    "Amount '{amount_text}' contains characters other than digits and separators"
                )
                .into())
            }
            None => {
                return Err(
                    format!("Amount '{amount_text}' does not hold a usable number").into(),
                )
            }
        };

        RepaymentInput {
            principal,
            annual_rate_percent: args.rate.ok_or("--rate is required (or provide --input)")?,
            term_years: args.term.ok_or("--term is required (or provide --input)")?,
            repayment_type: args.repayment_type.into(),
        }
    };

    let result = calculate_repayment(&quote_input)?;
    Ok(serde_json::to_value(result)?)
}
