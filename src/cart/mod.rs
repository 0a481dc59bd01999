//! Shopping cart with stacked coupon discounts.
//!
//! Coupons are applied in the order they were added to the cart, each one
//! against the remainder left by the previous ones.

use std::sync::Arc;

use tracing::{debug, info};

use crate::Amount;

mod coupon;
pub use coupon::Coupon;

mod error;
pub use error::CouponError;

mod item;
pub use item::Item;

/// When a coupon consumes one of its usage slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UsagePolicy {
    /// A slot is taken as soon as the coupon is accepted by a cart.
    OnApply,
    /// A slot is taken each time the coupon actually discounts a final price.
    /// A coupon that is applied but never priced consumes nothing.
    #[default]
    OnPricing,
}

/// A cart of items and the coupons applied to it.
#[derive(Debug, Default)]
pub struct ShoppingCart {
    items: Vec<Item>,
    coupons: Vec<Arc<Coupon>>,
    policy: UsagePolicy,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: UsagePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> UsagePolicy {
        self.policy
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Coupons in application order.
    pub fn applied_coupons(&self) -> &[Arc<Coupon>] {
        &self.coupons
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove the first item with the same name and unit price, if any.
    pub fn remove_item(&mut self, item: &Item) {
        if let Some(index) = self.items.iter().position(|i| i.matches(item)) {
            self.items.remove(index);
        }
    }

    pub fn calculate_total_price(&self) -> Amount {
        self.items.iter().map(Item::line_total).sum()
    }

    pub fn apply_coupon(&mut self, coupon: &Arc<Coupon>) -> bool {
        self.try_apply_coupon(coupon).is_ok()
    }

    /// Add a coupon to the cart.
    ///
    /// Fails if a coupon with the same code is already applied, or if the
    /// coupon has no usage left.
    pub fn try_apply_coupon(&mut self, coupon: &Arc<Coupon>) -> Result<(), CouponError> {
        let result = self.accept_coupon(coupon);
        match &result {
            Ok(()) => info!(
                code = coupon.code(),
                usage = coupon.usage_count(),
                limit = coupon.usage_limit(),
                "coupon applied"
            ),
            Err(e) => info!(code = coupon.code(), reason = %e, "coupon skipped"),
        }
        result
    }

    /// Total after stacking every applied coupon, never below zero.
    ///
    /// Under [`UsagePolicy::OnPricing`] each coupon that grants a discount
    /// consumes one usage slot per call.
    pub fn calculate_final_price(&self) -> Amount {
        let total = self.calculate_total_price();
        let mut remaining = total;

        for coupon in &self.coupons {
            let discount = match self.policy {
                UsagePolicy::OnPricing => coupon
                    .apply(remaining)
                    .filter(|_| coupon.try_claim()),
                UsagePolicy::OnApply => coupon.discount_for(remaining),
            };

            if let Some(discount) = discount {
                debug!(
                    code = coupon.code(),
                    remaining = %remaining,
                    discount = %discount,
                    "coupon discount"
                );
                remaining -= discount;
            }
        }

        remaining.max(Amount::ZERO)
    }

    fn accept_coupon(&mut self, coupon: &Arc<Coupon>) -> Result<(), CouponError> {
        if self.coupons.iter().any(|c| c.code() == coupon.code()) {
            return Err(CouponError::AlreadyApplied(coupon.code().to_string()));
        }

        let usable = match self.policy {
            UsagePolicy::OnPricing => coupon.can_be_applied(),
            UsagePolicy::OnApply => coupon.try_claim(),
        };
        if !usable {
            return Err(CouponError::Exhausted {
                code: coupon.code().to_string(),
                limit: coupon.usage_limit(),
            });
        }

        self.coupons.push(Arc::clone(coupon));
        Ok(())
    }
}
