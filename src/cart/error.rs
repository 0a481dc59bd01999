use thiserror::Error;

/// Reason a coupon was not applied to a cart.
#[derive(Debug, Error)]
pub enum CouponError {
    #[error("coupon {0} is already applied to this cart")]
    AlreadyApplied(String),

    #[error("coupon {code} reached its usage limit of {limit}")]
    Exhausted { code: String, limit: u32 },
}
