pub mod account;
pub mod amount;
pub mod cart;
pub mod csv;
pub mod model;

pub use account::BankAccount;
pub use amount::Amount;
pub use cart::{Coupon, Item, ShoppingCart, UsagePolicy};
pub use model::{Operation, Transaction, TransactionKind};
