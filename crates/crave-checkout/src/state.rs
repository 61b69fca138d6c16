//! # Cart State
//!
//! The shared cart handle the checkout reads and (on success) clears.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple UI handlers may access/modify the cart
//! 2. Only one handler should modify the cart at a time
//! 3. Handlers can run concurrently on the host runtime
//!
//! The cart is the only shared mutable resource in the component; the
//! submission workflow snapshots it once, works on the snapshot, and only
//! touches the shared state again to clear it after a successful
//! submission. A failed submission leaves it untouched so the user can
//! retry.

use std::sync::{Arc, Mutex};

use crave_core::Cart;

/// Shared cart state.
///
/// ## Why Not RwLock?
/// Cart operations are quick and most of them modify state. A RwLock
/// would add complexity with minimal benefit.
#[derive(Debug, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| cart.totals());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_item(&item, 1))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crave_core::MenuItem;

    fn menu_item(id: &str, price_cents: i64) -> MenuItem {
        let now = Utc::now();
        MenuItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            description: None,
            price_cents,
            category: None,
            is_available: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_cart_state_read_write() {
        let state = CartState::new();
        assert!(state.with_cart(|c| c.is_empty()));

        state
            .with_cart_mut(|c| c.add_item(&menu_item("1", 999), 2))
            .unwrap();

        assert_eq!(state.with_cart(|c| c.subtotal_cents()), 1998);
    }
}
