use crate::Amount;

/// A priced, quantified cart line. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    name: String,
    unit_price: Amount,
    quantity: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, unit_price: impl Into<Amount>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            unit_price: unit_price.into(),
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Amount {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `unit_price × quantity`
    pub fn line_total(&self) -> Amount {
        Amount::new(self.unit_price.as_f64() * f64::from(self.quantity))
    }

    /// Same name and unit price; quantity is ignored.
    pub fn matches(&self, other: &Item) -> bool {
        self.name == other.name && self.unit_price == other.unit_price
    }
}
