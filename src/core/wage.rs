//! Gross / net wage estimate with a simplified progressive tax.
//!
//! The constants belong to one jurisdiction and one tax year. They are kept
//! in [`TaxRules`] so the configuration can override them; nothing is derived
//! from them.

use crate::errors::{AppError, AppResult};
use chrono::TimeDelta;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRules {
    /// Gross wage up to (and including) this amount is untaxed.
    pub threshold: Decimal,
    /// Gross → super-gross multiplier.
    pub super_gross_rate: Decimal,
    /// Super-gross is rounded half-up to a multiple of this.
    pub super_gross_rounding: Decimal,
    pub income_tax_rate: Decimal,
    /// Share of gross left after the employee's insurance contributions.
    pub net_share: Decimal,
    /// Flat monthly tax credit added back.
    pub tax_credit: Decimal,
}

impl Default for TaxRules {
    fn default() -> Self {
        Self {
            threshold: Decimal::from(10_000),
            super_gross_rate: Decimal::new(134, 2),
            super_gross_rounding: Decimal::from(100),
            income_tax_rate: Decimal::new(15, 2),
            net_share: Decimal::new(89, 2),
            tax_credit: Decimal::from(2070),
        }
    }
}

impl TaxRules {
    /// Reject values the formula cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        if self.super_gross_rounding <= Decimal::ZERO {
            return Err(AppError::Config(format!(
                "tax.super_gross_rounding must be positive, got {}",
                self.super_gross_rounding
            )));
        }
        let rates = [
            ("super_gross_rate", self.super_gross_rate),
            ("income_tax_rate", self.income_tax_rate),
            ("net_share", self.net_share),
        ];
        if let Some((name, value)) = rates.iter().find(|(_, v)| v.is_sign_negative()) {
            return Err(AppError::Config(format!(
                "tax.{name} cannot be negative, got {value}"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WageBreakdown {
    pub hours: i64,
    pub gross: Decimal,
    /// `None` when the gross wage is under the threshold.
    pub super_gross: Option<Decimal>,
    pub income_tax: Decimal,
    pub net: Decimal,
    pub tax: Decimal,
}

/// Validate an hourly wage typed by the user.
pub fn parse_hourly_wage(input: &str) -> AppResult<u32> {
    match input.trim().parse::<i64>() {
        Ok(w) if w > 0 => u32::try_from(w).map_err(|_| AppError::InvalidWageInput(input.into())),
        _ => Err(AppError::InvalidWageInput(input.into())),
    }
}

/// Compute the wage for `total` time worked at `hourly_wage`.
///
/// Only whole hours count towards the gross wage.
pub fn calculate(hourly_wage: u32, total: TimeDelta, rules: &TaxRules) -> AppResult<WageBreakdown> {
    if hourly_wage == 0 {
        return Err(AppError::InvalidWageInput(hourly_wage.to_string()));
    }

    let hours = total.num_hours();
    let gross = Decimal::from(hourly_wage) * Decimal::from(hours);

    if gross <= rules.threshold {
        return Ok(WageBreakdown {
            hours,
            gross,
            super_gross: None,
            income_tax: Decimal::ZERO,
            net: gross,
            tax: Decimal::ZERO,
        });
    }

    rules.validate()?;
    let step = rules.super_gross_rounding;
    let super_gross = (gross * rules.super_gross_rate)
        .checked_div(step)
        .ok_or_else(|| AppError::Config("super-gross wage out of range".into()))?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        * step;
    let income_tax = super_gross * rules.income_tax_rate;
    let net = gross * rules.net_share - income_tax + rules.tax_credit;

    Ok(WageBreakdown {
        hours,
        gross,
        super_gross: Some(super_gross),
        income_tax,
        net,
        tax: gross - net,
    })
}
