use std::fmt::{Debug, Display, Formatter};

use crate::quantity::{Quantity, cost::Cost, power::Kilowatts};

/// Demand charge: euro per kilowatt of billed peak, per month.
pub type MonthlyDemandRate = Quantity<f64, -1, -1, 1>;

impl MonthlyDemandRate {
    /// Savings over a full year for a sustained peak reduction.
    #[must_use]
    pub fn annual_savings(self, reduction: Kilowatts) -> Cost {
        Cost::from(self.0 * reduction.0 * 12.0)
    }
}

impl Display for MonthlyDemandRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} €/kW/mo", self.0)
    }
}

impl Debug for MonthlyDemandRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}€/kW/mo", self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_annual_savings() {
        let rate = MonthlyDemandRate::from(10.0);
        assert_abs_diff_eq!(rate.annual_savings(Kilowatts::from(5.0)).0, 600.0);
    }
}
