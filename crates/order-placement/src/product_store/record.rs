//! [`Record`] implementation for [`Product`], including stock changes.

use super::changes::StockChange;
use super::error::ProductError;
use crate::model::{Product, ProductDraft, ProductId};
use store_actor::Record;

impl Record for Product {
    type Id = ProductId;
    type Draft = ProductDraft;
    type Change = StockChange;
    type Error = ProductError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn from_draft(id: ProductId, draft: ProductDraft) -> Result<Self, ProductError> {
        let product = Product::new(id, draft.name, draft.price, draft.quantity);
        validate(&product)?;
        Ok(product)
    }

    /// # Changes
    /// - `Decrement`: takes stock, refusing to go below zero
    /// - `Restock`: adds stock
    fn apply(&mut self, change: StockChange) -> Result<(), ProductError> {
        match change {
            StockChange::Decrement(requested) => {
                if self.quantity < requested {
                    return Err(ProductError::InsufficientStock {
                        product_id: self.id.clone(),
                        requested,
                        available: self.quantity,
                    });
                }
                self.quantity -= requested;
            }
            StockChange::Restock(amount) => {
                self.quantity = self
                    .quantity
                    .checked_add(amount)
                    .ok_or_else(|| ProductError::StockOverflow(self.id.clone()))?;
            }
        }
        Ok(())
    }
}

/// Checks the fields every stored product must have.
pub fn validate(product: &Product) -> Result<(), ProductError> {
    if !product.price.is_finite() || product.price < 0.0 {
        return Err(ProductError::InvalidPrice {
            product_id: product.id.clone(),
            price: product.price,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decrement_takes_stock() {
        let mut product = Product::new("p1", "Widget", 10.0, 5);
        product.apply(StockChange::Decrement(2)).unwrap();
        assert_eq!(product.quantity, 3);

        product.apply(StockChange::Decrement(3)).unwrap();
        assert_eq!(product.quantity, 0);
    }

    #[test]
    fn test_decrement_below_zero_is_refused() {
        let mut product = Product::new("p1", "Widget", 10.0, 5);
        let result = product.apply(StockChange::Decrement(6));

        assert_eq!(
            result,
            Err(ProductError::InsufficientStock {
                product_id: ProductId::from("p1"),
                requested: 6,
                available: 5,
            })
        );
        assert_eq!(product.quantity, 5);
    }

    #[test]
    fn test_restock_overflow_is_refused() {
        let mut product = Product::new("p1", "Widget", 10.0, u32::MAX - 1);
        assert!(product.apply(StockChange::Restock(1)).is_ok());
        assert_eq!(
            product.apply(StockChange::Restock(1)),
            Err(ProductError::StockOverflow(ProductId::from("p1")))
        );
    }

    #[test]
    fn test_negative_or_nan_price_is_refused() {
        let draft = |price| ProductDraft {
            name: "Widget".to_string(),
            price,
            quantity: 1,
        };
        assert!(Product::from_draft(ProductId::from(1), draft(0.0)).is_ok());
        assert!(Product::from_draft(ProductId::from(1), draft(-0.5)).is_err());
        assert!(Product::from_draft(ProductId::from(1), draft(f64::NAN)).is_err());
    }
}
