use std::sync::atomic::{AtomicU32, Ordering};

use crate::Amount;

/// A percentage discount with a cap and a global usage limit.
///
/// A coupon is meant to be shared (`Arc<Coupon>`) by every cart it is applied
/// to. The usage counter belongs to the coupon, not to any cart.
#[derive(Debug)]
pub struct Coupon {
    code: String,
    discount_percentage: f64,
    max_discount: Amount,
    usage_limit: u32,
    usage_count: AtomicU32,
}

impl Coupon {
    pub fn new(
        code: impl Into<String>,
        discount_percentage: f64,
        max_discount: impl Into<Amount>,
        usage_limit: u32,
    ) -> Self {
        Self {
            code: code.into(),
            discount_percentage,
            max_discount: max_discount.into(),
            usage_limit,
            usage_count: AtomicU32::new(0),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn discount_percentage(&self) -> f64 {
        self.discount_percentage
    }

    pub fn max_discount(&self) -> Amount {
        self.max_discount
    }

    pub fn usage_limit(&self) -> u32 {
        self.usage_limit
    }

    pub fn usage_count(&self) -> u32 {
        self.usage_count.load(Ordering::Acquire)
    }

    pub fn can_be_applied(&self) -> bool {
        self.usage_count() < self.usage_limit
    }

    /// Discount granted against `total`, or `None` once the coupon is used up.
    pub fn apply(&self, total: Amount) -> Option<Amount> {
        if !self.can_be_applied() {
            return None;
        }
        self.discount_for(total)
    }

    /// Discount against `total` regardless of usage.
    ///
    /// A total below the cap yields a zero discount, not a discount capped at
    /// the total. A computed discount that is not positive yields `None`.
    pub fn discount_for(&self, total: Amount) -> Option<Amount> {
        if total < self.max_discount {
            return Some(Amount::ZERO);
        }
        let discount = total
            .percentage(self.discount_percentage)
            .min(self.max_discount);
        discount.is_positive().then_some(discount)
    }

    pub fn increment_usage(&self) {
        self.usage_count.fetch_add(1, Ordering::AcqRel);
    }

    /// Take one usage slot if any is left.
    pub fn try_claim(&self) -> bool {
        let limit = self.usage_limit;
        self.usage_count
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |count| {
                (count < limit).then(|| count + 1)
            })
            .is_ok()
    }
}
