//! Pure data structures implementing the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! plus the payloads used to create, update and filter them.

pub mod order;
pub mod product;
pub mod user;

pub use order::*;
pub use product::*;
pub use user::*;

use rust_decimal::Decimal;

/// Normalizes a monetary amount to exactly two decimal places, so it renders as `"20.00"`.
/// Stored prices never carry more than two places, so for them this only pads.
pub fn money(amount: Decimal) -> Decimal {
    let mut amount = amount.round_dp(2);
    amount.rescale(2);
    amount
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_renders_two_places() {
        assert_eq!(money(Decimal::from(20)).to_string(), "20.00");
        assert_eq!(money(Decimal::new(1999, 3)).to_string(), "2.00");
        assert_eq!(money(Decimal::new(125, 1)).to_string(), "12.50");
    }
}
