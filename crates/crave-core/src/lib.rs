//! # crave-core: Pure Business Logic for Crave
//!
//! This crate is the **heart** of Crave, a food-ordering application.
//! It contains all business logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Crave Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Web Frontend                                │   │
//! │  │    Menu UI ──► Cart UI ──► Checkout UI ──► Confirmation        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    crave-checkout                               │   │
//! │  │    entry guards, order submission workflow, effects            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ crave-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │  MenuItem │  │   Money   │  │   Cart    │  │   rules   │  │   │
//! │  │   │   Order   │  │  TaxCalc  │  │ CartItem  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    crave-db (Database Layer)                    │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, Customer, Order, OrderItem)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart and pricing math (subtotal, tax, total)
//! - [`form`] - Contact form value type
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use crave_core::money::Money;
//! use crave_core::types::TaxRate;
//!
//! // Create money from cents (never from floats!)
//! let subtotal = Money::from_cents(2500); // $25.00
//!
//! // Calculate tax at the fixed 10% checkout rate
//! let tax_rate = TaxRate::from_bps(crave_core::DEFAULT_TAX_RATE_BPS);
//! let tax = subtotal.calculate_tax(tax_rate);
//!
//! // Tax on $25.00 at 10% = $2.50
//! assert_eq!(tax.cents(), 250);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod form;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use crave_core::Money` instead of
// `use crave_core::money::Money`

pub use cart::{Cart, CartItem, CartTotals};
pub use error::{CoreError, ValidationError};
pub use form::ContactForm;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Checkout tax rate in basis points (1000 bps = 10%).
///
/// ## Why a constant?
/// v0.1 charges a single flat rate at checkout. Per-item or per-region
/// rates would move this onto [`types::MenuItem`] or a config table; until
/// then every total in the system derives from this one value.
pub const DEFAULT_TAX_RATE_BPS: u32 = 1000;

/// Maximum unique items allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable order sizes.
/// Can be made configurable in future versions.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single item in cart
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 100 instead of 10)
pub const MAX_ITEM_QUANTITY: i64 = 99;
