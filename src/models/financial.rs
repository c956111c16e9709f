//! Financial series setup.

use crate::gp_entity;

gp_entity! {
    /// Multicurrency Setup
    pub struct MulticurrencySetup : "MC40000" {
        functional_currency: String => "FUNLCURR", StripString(15), key;
    }
}

impl MulticurrencySetup {
    pub fn new(functional_currency: impl Into<String>) -> Self {
        Self {
            functional_currency: functional_currency.into(),
        }
    }
}
