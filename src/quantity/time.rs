use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

pub type Years = Quantity<f64, 0, 1, 0>;

impl Display for Years {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} y", self.0)
    }
}

impl Debug for Years {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}y", self.0)
    }
}
