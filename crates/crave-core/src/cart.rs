//! # Cart Module
//!
//! The cart and its pricing math: the only place in the system where
//! subtotal, tax and total are derived.
//!
//! ## Pricing Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Pricing                                      │
//! │                                                                         │
//! │  subtotal = Σ (unit_price × quantity)       over all cart lines        │
//! │  tax      = subtotal × 10%                  (DEFAULT_TAX_RATE_BPS)     │
//! │  total    = subtotal + tax                                              │
//! │                                                                         │
//! │  Tax is computed ONCE on the subtotal, not per line. Totals are        │
//! │  derived values, recomputed on every read, never stored in the cart.   │
//! │                                                                         │
//! │  Example:  2 × $10.00 + 1 × $5.00                                      │
//! │            subtotal $25.00, tax $2.50, total $27.50                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{MenuItem, TaxRate};
use crate::validation;
use crate::{DEFAULT_TAX_RATE_BPS, MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart Item
// =============================================================================

/// An item in the cart.
///
/// ## Design Notes
/// - `menu_item_id`: Reference to the menu item (for the order line insert)
/// - `name` / `unit_price_cents`: Frozen copy of menu data at time of adding.
///   The cart displays consistent data even if the menu changes afterwards,
///   and the frozen price is what the order line records.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Menu item ID (UUID)
    pub menu_item_id: String,

    /// Item name at time of adding (frozen)
    pub name: String,

    /// Price in cents at time of adding (frozen)
    pub unit_price_cents: i64,

    /// Quantity in cart (always positive)
    pub quantity: i64,

    /// When this item was added to the cart
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a new cart item from a menu item and quantity.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. If the menu price changes
    /// afterwards, this cart line retains the original price.
    pub fn from_menu_item(item: &MenuItem, quantity: i64) -> Self {
        CartItem {
            menu_item_id: item.id.clone(),
            name: item.name.clone(),
            unit_price_cents: item.price_cents,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The cart of menu items awaiting order placement.
///
/// ## Invariants
/// - Items are unique by `menu_item_id` (adding the same item again
///   increases quantity)
/// - Quantity must be > 0 (updating to 0 removes the item)
/// - Maximum unique items: 100
/// - Maximum quantity per item: 99
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Items in the cart
    pub items: Vec<CartItem>,

    /// When the cart was created/last cleared
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a menu item to the cart or increases quantity if already present.
    ///
    /// ## Errors
    /// - `CoreError::Validation` when quantity is not in 1..=99
    /// - `CoreError::QuantityTooLarge` when the merged line would exceed 99
    /// - `CoreError::CartTooLarge` when the cart already holds 100 lines
    pub fn add_item(&mut self, item: &MenuItem, quantity: i64) -> CoreResult<()> {
        validation::validate_quantity(quantity)?;

        // Merge into the existing line if the item is already in the cart
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|i| i.menu_item_id == item.id)
        {
            let new_qty = line.quantity + quantity;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            line.quantity = new_qty;
            return Ok(());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.items.push(CartItem::from_menu_item(item, quantity));
        Ok(())
    }

    /// Updates the quantity of an item in the cart.
    ///
    /// ## Behavior
    /// - If quantity is 0: removes the item
    /// - Negative or > 99: `CoreError::Validation`
    /// - If item not found: `CoreError::MenuItemNotFound`
    pub fn update_quantity(&mut self, menu_item_id: &str, quantity: i64) -> CoreResult<()> {
        if quantity == 0 {
            return self.remove_item(menu_item_id);
        }

        validation::validate_quantity(quantity)?;

        if let Some(line) = self
            .items
            .iter_mut()
            .find(|i| i.menu_item_id == menu_item_id)
        {
            line.quantity = quantity;
            Ok(())
        } else {
            Err(CoreError::MenuItemNotFound(menu_item_id.to_string()))
        }
    }

    /// Removes an item from the cart by menu item ID.
    pub fn remove_item(&mut self, menu_item_id: &str) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.menu_item_id != menu_item_id);

        if self.items.len() == initial_len {
            Err(CoreError::MenuItemNotFound(menu_item_id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Returns the number of unique items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Calculates the subtotal (before tax).
    pub fn subtotal_cents(&self) -> i64 {
        self.items.iter().map(|i| i.line_total_cents()).sum()
    }

    /// Calculates the tax on the subtotal at the flat checkout rate.
    pub fn tax_cents(&self) -> i64 {
        Money::from_cents(self.subtotal_cents())
            .calculate_tax(TaxRate::from_bps(DEFAULT_TAX_RATE_BPS))
            .cents()
    }

    /// Calculates the grand total (subtotal + tax).
    pub fn total_cents(&self) -> i64 {
        self.subtotal_cents() + self.tax_cents()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns all derived totals in one pass.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for the order summary panel and API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: cart.subtotal_cents(),
            tax_cents: cart.tax_cents(),
            total_cents: cart.total_cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn menu_item(id: &str, price_cents: i64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            description: None,
            price_cents,
            category: Some("mains".to_string()),
            is_available: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        let item = menu_item("1", 999); // $9.99

        cart.add_item(&item, 2).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal_cents(), 1998); // $19.98
    }

    #[test]
    fn test_cart_add_same_item_increases_quantity() {
        let mut cart = Cart::new();
        let item = menu_item("1", 999);

        cart.add_item(&item, 2).unwrap();
        cart.add_item(&item, 3).unwrap();

        assert_eq!(cart.item_count(), 1); // Still one unique line
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_cart_quantity_cap() {
        let mut cart = Cart::new();
        let item = menu_item("1", 999);

        cart.add_item(&item, 50).unwrap();
        let err = cart.add_item(&item, 50).unwrap_err(); // 100 > 99
        assert!(matches!(err, CoreError::QuantityTooLarge { requested: 100, .. }));
    }

    #[test]
    fn test_add_item_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        let item = menu_item("1", 1000);

        assert!(matches!(
            cart.add_item(&item, 0),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            cart.add_item(&item, -3),
            Err(CoreError::Validation(_))
        ));

        // Rejected input must not leave a line behind: the cart stays
        // empty, keeps the entry guard's empty-cart redirect intact, and
        // derives no negative totals
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal_cents(), 0);
        assert_eq!(cart.total_cents(), 0);
    }

    #[test]
    fn test_update_quantity_rejects_non_positive() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("1", 1000), 2).unwrap();

        assert!(matches!(
            cart.update_quantity("1", -1),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            cart.update_quantity("1", 100),
            Err(CoreError::Validation(_))
        ));

        // The existing line is untouched by rejected updates
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal_cents(), 2000);
    }

    #[test]
    fn test_mutations_on_missing_item_are_typed() {
        let mut cart = Cart::new();

        assert!(matches!(
            cart.update_quantity("ghost", 2),
            Err(CoreError::MenuItemNotFound(_))
        ));
        assert!(matches!(
            cart.remove_item("ghost"),
            Err(CoreError::MenuItemNotFound(_))
        ));
    }

    /// The canonical pricing example: 2 × $10.00 + 1 × $5.00
    /// → subtotal $25.00, tax $2.50, total $27.50.
    #[test]
    fn test_cart_pricing_example() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("1", 1000), 2).unwrap();
        cart.add_item(&menu_item("2", 500), 1).unwrap();

        let totals = cart.totals();
        assert_eq!(totals.subtotal_cents, 2500);
        assert_eq!(totals.tax_cents, 250);
        assert_eq!(totals.total_cents, 2750);
    }

    #[test]
    fn test_tax_is_ten_percent_of_subtotal() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("1", 1234), 3).unwrap();
        cart.add_item(&menu_item("2", 77), 1).unwrap();

        let subtotal = Money::from_cents(cart.subtotal_cents());
        let expected = subtotal.calculate_tax(TaxRate::from_bps(1000));
        assert_eq!(cart.tax_cents(), expected.cents());
        assert_eq!(cart.total_cents(), cart.subtotal_cents() + cart.tax_cents());
    }

    #[test]
    fn test_empty_cart_yields_zero_totals() {
        let cart = Cart::new();
        let totals = cart.totals();
        assert!(cart.is_empty());
        assert_eq!(totals.subtotal_cents, 0);
        assert_eq!(totals.tax_cents, 0);
        assert_eq!(totals.total_cents, 0);
    }

    #[test]
    fn test_update_quantity_and_remove() {
        let mut cart = Cart::new();
        let item = menu_item("1", 500);

        cart.add_item(&item, 2).unwrap();
        cart.update_quantity("1", 5).unwrap();
        assert_eq!(cart.total_quantity(), 5);

        // Setting quantity to zero removes the line
        cart.update_quantity("1", 0).unwrap();
        assert!(cart.is_empty());

        assert!(cart.remove_item("1").is_err());
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("1", 999), 2).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_price_frozen_at_add_time() {
        let mut cart = Cart::new();
        let mut item = menu_item("1", 1000);
        cart.add_item(&item, 1).unwrap();

        // Menu price changes after the item was added
        item.price_cents = 9999;

        assert_eq!(cart.subtotal_cents(), 1000);
    }
}
