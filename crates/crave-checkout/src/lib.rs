//! # crave-checkout: The Checkout Component
//!
//! Everything the checkout page does, minus the markup. The presentation
//! layer renders a cart summary and a contact form; this crate owns the
//! behavior behind the "Place Order" button.
//!
//! ## Component Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Checkout Flow                                     │
//! │                                                                         │
//! │  Page entry                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  entry_guard(session, cart)                                            │
//! │       ├── no session  → Route::Auth   (no db calls, no render)         │
//! │       ├── empty cart  → Route::Cart   (no db calls, no render)         │
//! │       └── ok          → render summary + form                          │
//! │                                                                         │
//! │  "Place Order" clicked                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  place_order(db, session, cart_state, form)                            │
//! │       │                                                                 │
//! │       ├── 1. customer lookup by session user id    → Lookup error      │
//! │       ├── 2. insert pending order, get its id      → Insert error      │
//! │       ├── 3. batch-insert order items              → Insert error      │
//! │       │                                                                 │
//! │       ├── success: clear cart, success toast, Route::Home              │
//! │       └── failure: destructive toast, cart untouched, stay put         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`checkout`] - Entry guard and the submission workflow
//! - [`effect`] - Toast and navigation effect values
//! - [`session`] - The authenticated session handle
//! - [`state`] - Shared cart state
//! - [`error`] - Submission error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod effect;
pub mod error;
pub mod session;
pub mod state;

// =============================================================================
// Re-exports
// =============================================================================

pub use checkout::{entry_guard, place_order, submit_order, CheckoutOutcome, OrderConfirmation};
pub use effect::{Route, Severity, Toast};
pub use error::SubmitError;
pub use session::Session;
pub use state::CartState;
