//! Form state for an interactive repayment calculator.
//!
//! Holds the field values a front end collects, runs the quote on demand and
//! owns the single source of truth for whether a result is on display. A
//! result exists exactly when a submission calculated one and the form has
//! not been cleared since; an incomplete submission changes nothing.

use std::fmt;

use rust_decimal::Decimal;

use crate::normalize::normalize_amount;
use crate::repayment::{calculate_repayment, RepaymentInput};
use crate::types::{CalculationResult, Money, Rate, RepaymentType};
use crate::MortgageResult;

// ---------------------------------------------------------------------------
// Events and outcomes
// ---------------------------------------------------------------------------

/// Emitted by the form whenever the displayed result changes.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// A submission produced (or replaced) the displayed result.
    ResultChanged(CalculationResult),
    /// The form was cleared; any displayed result is gone.
    Cleared,
}

/// What a submission did.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Every field was present and usable; the result is now on display.
    Calculated(CalculationResult),
    /// One or more fields were missing or unusable; nothing changed.
    Incomplete(MissingFields),
}

/// Which required fields blocked a submission.
///
/// A field counts as missing when it was never entered, failed to normalize,
/// or holds a value the calculator cannot use (zero or negative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MissingFields {
    pub amount: bool,
    pub term: bool,
    pub rate: bool,
    pub repayment_type: bool,
}

impl MissingFields {
    /// True when at least one required field is missing.
    pub fn any(&self) -> bool {
        self.amount || self.term || self.rate || self.repayment_type
    }
}

// ---------------------------------------------------------------------------
// Form controller
// ---------------------------------------------------------------------------

/// State of the repayment calculator form.
///
/// Field changes are reported through the `on_*` methods; nothing recomputes
/// until [`LoanForm::on_submit`]. The stored result is replaced atomically on
/// a successful submission and removed entirely (not zeroed) by
/// [`LoanForm::on_clear`].
#[derive(Default)]
pub struct LoanForm {
    amount_text: String,
    principal: Option<Money>,
    amount_invalid: bool,
    term_years: Option<u32>,
    annual_rate_percent: Option<Rate>,
    repayment_type: Option<RepaymentType>,
    result: Option<CalculationResult>,
    observer: Option<Box<dyn FnMut(&FormEvent)>>,
}

impl LoanForm {
    /// An empty form: no fields, no result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a change to the amount field.
    ///
    /// The raw text is kept for redisplay; the normalized principal and the
    /// invalid flag are refreshed. The displayed result is untouched until
    /// the next submission.
    pub fn on_amount_changed(&mut self, text: &str) {
        self.amount_text = text.to_string();
        let normalized = normalize_amount(text);
        self.principal = normalized.principal;
        self.amount_invalid = normalized.invalid;
    }

    /// Record a change to the term field, in whole years.
    pub fn on_term_changed(&mut self, years: Option<u32>) {
        self.term_years = years;
    }

    /// Record a change to the rate field, as a whole percentage.
    pub fn on_rate_changed(&mut self, rate: Option<Rate>) {
        self.annual_rate_percent = rate;
    }

    /// Record a change to the repayment type selection.
    pub fn on_type_changed(&mut self, repayment_type: Option<RepaymentType>) {
        self.repayment_type = repayment_type;
    }

    /// Run the calculation over the current fields.
    ///
    /// With any required field missing or unusable this is a no-op: the
    /// previous result, if one is on display, stays on display. On success
    /// the result is replaced and observers are notified. An `Err` from the
    /// calculator (figures too large to represent) also leaves the form
    /// untouched.
    pub fn on_submit(&mut self) -> MortgageResult<SubmitOutcome> {
        let missing = self.missing_fields();
        let (Some(principal), Some(term_years), Some(rate), Some(repayment_type)) = (
            self.usable_principal(),
            self.usable_term(),
            self.usable_rate(),
            self.repayment_type,
        ) else {
            return Ok(SubmitOutcome::Incomplete(missing));
        };

        let input = RepaymentInput {
            principal,
            annual_rate_percent: rate,
            term_years,
            repayment_type,
        };
        let computed = calculate_repayment(&input)?;
        let result = CalculationResult {
            monthly_payment: computed.result.monthly_payment,
            total_repaid: computed.result.total_repaid,
        };

        self.result = Some(result.clone());
        self.emit(FormEvent::ResultChanged(result.clone()));
        Ok(SubmitOutcome::Calculated(result))
    }

    /// Reset every field and remove the displayed result.
    pub fn on_clear(&mut self) {
        self.amount_text.clear();
        self.principal = None;
        self.amount_invalid = false;
        self.term_years = None;
        self.annual_rate_percent = None;
        self.repayment_type = None;
        self.result = None;
        self.emit(FormEvent::Cleared);
    }

    /// Register a hook called on every result change and clear.
    pub fn set_observer(&mut self, observer: impl FnMut(&FormEvent) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// The amount field as last entered.
    pub fn amount_text(&self) -> &str {
        &self.amount_text
    }

    /// The normalized principal, when the amount field holds one.
    pub fn principal(&self) -> Option<Money> {
        self.principal
    }

    /// True when the amount field contains characters an amount never can.
    pub fn amount_invalid(&self) -> bool {
        self.amount_invalid
    }

    /// The result currently on display, if any.
    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    /// True when a result is on display.
    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    /// Which required fields would block a submission right now.
    pub fn missing_fields(&self) -> MissingFields {
        MissingFields {
            amount: self.usable_principal().is_none(),
            term: self.usable_term().is_none(),
            rate: self.usable_rate().is_none(),
            repayment_type: self.repayment_type.is_none(),
        }
    }

    fn usable_principal(&self) -> Option<Money> {
        self.principal.filter(|p| *p > Decimal::ZERO)
    }

    fn usable_term(&self) -> Option<u32> {
        self.term_years.filter(|y| *y > 0)
    }

    fn usable_rate(&self) -> Option<Rate> {
        self.annual_rate_percent.filter(|r| *r > Decimal::ZERO)
    }

    fn emit(&mut self, event: FormEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer(&event);
        }
    }
}

impl fmt::Debug for LoanForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoanForm")
            .field("amount_text", &self.amount_text)
            .field("principal", &self.principal)
            .field("amount_invalid", &self.amount_invalid)
            .field("term_years", &self.term_years)
            .field("annual_rate_percent", &self.annual_rate_percent)
            .field("repayment_type", &self.repayment_type)
            .field("result", &self.result)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
