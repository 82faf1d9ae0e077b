//! Monthly repayment quoting for amortizing and interest-only mortgages.
//!
//! The level payment comes from the standard annuity formula with monthly
//! compounding. All math in `rust_decimal::Decimal`; the compounding factor
//! is built by iterative multiplication (no f64, no `powd`).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::MortgageError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate, RepaymentType};
use crate::MortgageResult;

/// Monthly payments per year of term.
const MONTHS_PER_YEAR: u32 = 12;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a repayment quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepaymentInput {
    /// Amount borrowed
    pub principal: Money,
    /// Annual interest rate as a whole percentage (5.25 = 5.25%)
    pub annual_rate_percent: Rate,
    /// Term of the loan in whole years
    pub term_years: u32,
    /// How the loan is paid down over the term
    pub repayment_type: RepaymentType,
}

/// Results of a repayment quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepaymentOutput {
    /// Level payment due each month
    pub monthly_payment: Money,
    /// Everything paid over the full term (monthly payment times months)
    pub total_repaid: Money,
    /// Portion of the total that is interest
    pub total_interest: Money,
    /// Number of monthly payments in the term
    pub months: u32,
    /// Periodic rate applied each month (annual percentage / 100 / 12)
    pub monthly_rate: Rate,
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Quote the monthly payment and lifetime cost of a mortgage.
///
/// Amortizing loans use the annuity formula `M = P * r * F / (F - 1)` with
/// `F = (1 + r)^n`, monthly rate `r = annual% / 100 / 12` and `n = years * 12`.
/// Interest-only loans pay `P * r` each month and leave the principal
/// outstanding at the end of the term. Totals are the monthly payment times
/// the number of months, at full precision; display rounding is the caller's
/// concern.
pub fn calculate_repayment(
    input: &RepaymentInput,
) -> MortgageResult<ComputationOutput<RepaymentOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_repayment_input(input)?;

    // --- Reasonableness warnings ---
    if input.annual_rate_percent > dec!(25) {
        warnings.push(format!(
            "Annual rate of {}% is outside normal mortgage territory; verify the quote",
            input.annual_rate_percent
        ));
    }
    if input.term_years > 40 {
        warnings.push(format!(
            "Term of {} years is longer than mainstream mortgage products offer",
            input.term_years
        ));
    }

    let months = input.term_years.checked_mul(MONTHS_PER_YEAR).ok_or_else(|| {
        MortgageError::FinancialImpossibility(
            "term length in months exceeds the representable range".into(),
        )
    })?;
    let monthly_rate = input.annual_rate_percent / dec!(100) / Decimal::from(MONTHS_PER_YEAR);

    let monthly_payment = match input.repayment_type {
        RepaymentType::Repayment => annuity_payment(input.principal, monthly_rate, months)?,
        RepaymentType::InterestOnly => {
            mul_checked(input.principal, monthly_rate, "monthly payment")?
        }
    };

    let total_repaid = mul_checked(monthly_payment, Decimal::from(months), "total repaid")?;
    let total_interest = match input.repayment_type {
        RepaymentType::Repayment => total_repaid - input.principal,
        // Payments never touch the principal, so all of them are interest.
        RepaymentType::InterestOnly => total_repaid,
    };

    let output = RepaymentOutput {
        monthly_payment,
        total_repaid,
        total_interest,
        months,
        monthly_rate,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        methodology(input.repayment_type),
        input,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn validate_repayment_input(input: &RepaymentInput) -> MortgageResult<()> {
    if input.principal <= Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must be positive".into(),
        });
    }
    if input.annual_rate_percent <= Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "annual_rate_percent".into(),
            reason: "Annual rate must be positive".into(),
        });
    }
    if input.term_years == 0 {
        return Err(MortgageError::InvalidInput {
            field: "term_years".into(),
            reason: "Term must be at least one year".into(),
        });
    }
    Ok(())
}

fn methodology(repayment_type: RepaymentType) -> &'static str {
    match repayment_type {
        RepaymentType::Repayment => "Level-payment annuity amortization, monthly compounding",
        RepaymentType::InterestOnly => "Interest-only servicing, principal outstanding at term",
    }
}

/// Level payment for an amortizing loan: `P * r * F / (F - 1)` where
/// `F = (1 + r)^n`.
fn annuity_payment(principal: Money, monthly_rate: Rate, months: u32) -> MortgageResult<Money> {
    let factor = compound_factor(monthly_rate, months)?;
    let denominator = factor - Decimal::ONE;
    if denominator.is_zero() {
        return Err(MortgageError::DivisionByZero {
            context: "annuity denominator (1+r)^n - 1".into(),
        });
    }
    let numerator = mul_checked(
        mul_checked(principal, monthly_rate, "annuity numerator")?,
        factor,
        "annuity numerator",
    )?;
    Ok(numerator / denominator)
}

/// Compute (1 + r)^n via iterative multiplication.
fn compound_factor(monthly_rate: Rate, months: u32) -> MortgageResult<Decimal> {
    let base = Decimal::ONE + monthly_rate;
    let mut factor = Decimal::ONE;
    for _ in 0..months {
        factor = mul_checked(factor, base, "compounding factor")?;
    }
    Ok(factor)
}

fn mul_checked(a: Decimal, b: Decimal, context: &str) -> MortgageResult<Decimal> {
    a.checked_mul(b).ok_or_else(|| {
        MortgageError::FinancialImpossibility(format!(
            "{context} exceeds the representable decimal range"
        ))
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
