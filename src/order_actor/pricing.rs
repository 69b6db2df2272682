//! # Order Total Calculator
//!
//! Turns requested `(product, quantity)` lines into priced lines and a grand total.
//! Each product's current unit price is read from the Product actor; the price it
//! had at that moment is what the order keeps.

use super::OrderError;
use crate::clients::ProductClient;
use crate::model::{money, LineRequest, Product};
use actor_framework::ActorClient;
use rust_decimal::Decimal;
use tracing::debug;

/// A resolved line: the product as read, how many, and what they cost together.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedLine {
    pub product: Product,
    pub quantity: u32,
    pub price: Decimal,
}

/// Every line of a basket, in request order, with the sum of their prices.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedOrder {
    pub lines: Vec<PricedLine>,
    pub total: Decimal,
}

/// `unit_price * quantity`, rejecting quantities below one or above `u32::MAX`.
pub fn line_price(unit_price: Decimal, quantity: i64) -> Result<(u32, Decimal), OrderError> {
    if quantity <= 0 {
        return Err(OrderError::ValidationError(format!(
            "quantity must be at least 1, got {}",
            quantity
        )));
    }
    let quantity = u32::try_from(quantity).map_err(|_| {
        OrderError::ValidationError(format!("quantity {} is too large", quantity))
    })?;
    let price = unit_price
        .checked_mul(Decimal::from(quantity))
        .ok_or_else(|| OrderError::ValidationError("line price overflows".into()))?;
    Ok((quantity, money(price)))
}

/// Prices every requested line.
///
/// Fails on the first line whose product does not exist
/// ([`OrderError::ProductNotFound`]) or whose quantity is invalid
/// ([`OrderError::ValidationError`]). An empty basket is a validation error.
pub async fn price_order(
    items: &[LineRequest],
    products: &ProductClient,
) -> Result<PricedOrder, OrderError> {
    if items.is_empty() {
        return Err(OrderError::ValidationError(
            "an order needs at least one item".into(),
        ));
    }

    let mut lines = Vec::with_capacity(items.len());
    let mut total = Decimal::ZERO;

    for item in items {
        let product_id = item
            .product()
            .ok_or_else(|| OrderError::ProductNotFound(format!("product_{}", item.product_id)))?;
        let product = products
            .get(product_id)
            .await
            .map_err(|e| OrderError::from_product(product_id, e))?
            .ok_or_else(|| OrderError::ProductNotFound(product_id.to_string()))?;

        let (quantity, price) = line_price(product.price, item.quantity)?;
        debug!(product_id = %product.id, quantity, %price, "Priced line");

        total = total
            .checked_add(price)
            .ok_or_else(|| OrderError::ValidationError("order total overflows".into()))?;
        lines.push(PricedLine {
            product,
            quantity,
            price,
        });
    }

    Ok(PricedOrder {
        lines,
        total: money(total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductId, UserId};
    use actor_framework::mock::MockClient;
    use chrono::Utc;

    fn product(id: u32, price: i64) -> Product {
        Product {
            id: ProductId(id),
            vendor_id: UserId(1),
            name: format!("Product {}", id),
            description: String::new(),
            price: money(Decimal::from(price)),
            stock: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn line(product_id: u32, quantity: i64) -> LineRequest {
        LineRequest::new(ProductId(product_id), quantity)
    }

    #[test]
    fn line_price_multiplies() {
        let (quantity, price) = line_price(Decimal::new(1999, 2), 3).unwrap();
        assert_eq!(quantity, 3);
        assert_eq!(price.to_string(), "59.97");
    }

    #[test]
    fn line_price_rejects_non_positive_quantities() {
        assert!(matches!(
            line_price(Decimal::ONE, 0),
            Err(OrderError::ValidationError(_))
        ));
        assert!(matches!(
            line_price(Decimal::ONE, -2),
            Err(OrderError::ValidationError(_))
        ));
        assert!(matches!(
            line_price(Decimal::ONE, i64::from(u32::MAX) + 1),
            Err(OrderError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn totals_every_line() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_get(ProductId(1)).return_ok(Some(product(1, 10)));
        mock.expect_get(ProductId(2)).return_ok(Some(product(2, 5)));
        let products = ProductClient::new(mock.client());

        let priced = price_order(&[line(1, 2), line(2, 3)], &products)
            .await
            .unwrap();

        let prices: Vec<String> = priced.lines.iter().map(|l| l.price.to_string()).collect();
        assert_eq!(prices, vec!["20.00", "15.00"]);
        assert_eq!(priced.total.to_string(), "35.00");
        mock.verify();
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_get(ProductId(1)).return_ok(Some(product(1, 10)));
        mock.expect_get(ProductId(99)).return_ok(None);
        let products = ProductClient::new(mock.client());

        let result = price_order(&[line(1, 1), line(99, 1)], &products).await;
        assert_eq!(result, Err(OrderError::ProductNotFound("product_99".into())));
    }

    #[tokio::test]
    async fn ids_outside_the_id_range_are_not_found_without_lookups() {
        let mock = MockClient::<Product>::new();
        let products = ProductClient::new(mock.client());

        for raw in [-1, i64::from(u32::MAX) + 1] {
            let items = [LineRequest {
                product_id: raw,
                quantity: 1,
            }];
            let result = price_order(&items, &products).await;
            assert_eq!(result, Err(OrderError::ProductNotFound(format!("product_{}", raw))));
        }
        mock.verify();
    }

    #[tokio::test]
    async fn empty_basket_is_rejected_without_lookups() {
        let mock = MockClient::<Product>::new();
        let products = ProductClient::new(mock.client());

        let result = price_order(&[], &products).await;
        assert!(matches!(result, Err(OrderError::ValidationError(_))));
        mock.verify();
    }
}
