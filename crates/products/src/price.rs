use stocktrack_core::{DomainError, DomainResult};

/// Currency marker printed in front of every amount.
pub const CURRENCY_PREFIX: &str = "Rp";

/// Unit price of a product, in whole rupiah (fractions allowed but never shown).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Wrap an amount as-is. Non-negativity is only checked at input time,
    /// see [`Price::non_negative`].
    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Accept an entered amount as a price unless it is NaN, infinite or
    /// negative.
    pub fn non_negative(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::invalid_input(format!(
                "not a finite amount: {amount}"
            )));
        }
        if amount < 0.0 {
            return Err(DomainError::invalid_input("price cannot be negative"));
        }
        Ok(Self(amount))
    }
}

impl core::fmt::Display for Price {
    /// `Rp` followed by the amount rounded to whole units (ties to even) and
    /// grouped by thousands, e.g. `Rp12,000`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if !self.0.is_finite() {
            return write!(f, "{CURRENCY_PREFIX}{}", self.0);
        }

        let rounded = self.0.round_ties_even();
        // Avoid printing "-0" for small negative amounts.
        let rounded = if rounded == 0.0 { 0.0 } else { rounded };
        let digits = format!("{rounded:.0}");

        let (sign, digits) = match digits.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", digits.as_str()),
        };
        write!(f, "{CURRENCY_PREFIX}{sign}{}", group_thousands(digits))
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
