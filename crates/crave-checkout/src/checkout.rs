//! # Checkout Workflow
//!
//! Entry guards and the 3-step order submission sequence.
//!
//! ## The Submission Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Order Submission Workflow                              │
//! │                                                                         │
//! │  1. LOOK UP CUSTOMER                                                   │
//! │     └── customers.find_by_user_id(session.user_id)                     │
//! │     └── missing row or query error → SubmitError::Lookup               │
//! │                                                                         │
//! │  2. INSERT ORDER                                                       │
//! │     └── orders.create() → pending order with generated id              │
//! │     └── rejected write → SubmitError::Insert                           │
//! │                                                                         │
//! │  3. INSERT ORDER ITEMS                                                 │
//! │     └── orders.add_items(order.id, lines) — one multi-row INSERT       │
//! │     └── rejected write → SubmitError::Insert                           │
//! │                                                                         │
//! │  Any failure aborts the remaining steps. There is no compensating      │
//! │  rollback: a step-3 failure leaves the step-2 order behind. There is   │
//! │  no automatic retry; the cart is left intact so the user can retry.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No state machine beyond this linear sequence; the only branching is the
//! entry guards and the per-step failure check.

use tracing::{debug, info, warn};

use crave_core::{Cart, ContactForm};
use crave_db::repository::order::{NewOrder, NewOrderItem};
use crave_db::Database;

use crate::effect::{Route, Toast};
use crate::error::{SubmitError, SubmitResult};
use crate::session::Session;
use crate::state::CartState;

// =============================================================================
// Entry Guard
// =============================================================================

/// Checks the checkout preconditions, returning a redirect when one fails.
///
/// Runs once per page entry, before anything renders and before any
/// database call is made:
/// - no session → `Route::Auth`
/// - empty cart → `Route::Cart`
/// - both hold → `None`, the page renders and submission may proceed
///
/// These are guards, not error paths; a redirect here is normal flow.
pub fn entry_guard(session: Option<&Session>, cart: &Cart) -> Option<Route> {
    if session.is_none() {
        debug!("Checkout entered without session, redirecting to auth");
        return Some(Route::Auth);
    }

    if cart.is_empty() {
        debug!("Checkout entered with empty cart, redirecting to cart");
        return Some(Route::Cart);
    }

    None
}

// =============================================================================
// Confirmation
// =============================================================================

/// What a successful submission hands back to the UI.
#[derive(Debug, Clone)]
pub struct OrderConfirmation {
    /// Full order id (UUID).
    pub order_id: String,
    /// Grand total that was persisted.
    pub total_cents: i64,
    /// Number of line items written.
    pub item_count: usize,
}

impl OrderConfirmation {
    /// The truncated order id shown in the confirmation toast.
    pub fn short_id(&self) -> &str {
        let end = self.order_id.len().min(8);
        &self.order_id[..end]
    }
}

// =============================================================================
// Submission
// =============================================================================

/// Runs the 3-step submission sequence against the database.
///
/// Callers run [`entry_guard`] first; this function assumes an
/// authenticated session and a non-empty cart. It does not touch shared
/// state — it works on the cart snapshot it is given. [`place_order`] is
/// the wrapper that owns the user-visible outcome.
///
/// ## Errors
/// - [`SubmitError::Lookup`] — no customer row for the session's user, or
///   the lookup query failed (step 1)
/// - [`SubmitError::Insert`] — the order or item write was rejected
///   (steps 2-3)
pub async fn submit_order(
    db: &Database,
    session: &Session,
    cart: &Cart,
    form: &ContactForm,
) -> SubmitResult<OrderConfirmation> {
    // Step 1: resolve the session to a customer row
    let customer = db
        .customers()
        .find_by_user_id(&session.user_id)
        .await
        .map_err(SubmitError::lookup)?
        .ok_or_else(|| SubmitError::lookup("No customer record found for this account"))?;

    debug!(customer_id = %customer.id, "Customer resolved");

    // Step 2: insert the pending order with the cart-derived totals
    let totals = cart.totals();
    let order = db
        .orders()
        .create(NewOrder {
            customer_id: customer.id,
            subtotal_cents: totals.subtotal_cents,
            tax_cents: totals.tax_cents,
            total_cents: totals.total_cents,
            notes: form.notes.clone(),
        })
        .await
        .map_err(SubmitError::insert)?;

    // Step 3: batch-insert the line items, referencing the new order id
    let lines: Vec<NewOrderItem> = cart
        .items
        .iter()
        .map(|item| NewOrderItem {
            menu_item_id: item.menu_item_id.clone(),
            quantity: item.quantity,
            unit_price_cents: item.unit_price_cents,
        })
        .collect();

    db.orders()
        .add_items(&order.id, &lines)
        .await
        .map_err(SubmitError::insert)?;

    info!(
        order_id = %order.id,
        total = %order.total_cents,
        items = lines.len(),
        "Order placed"
    );

    Ok(OrderConfirmation {
        order_id: order.id,
        total_cents: order.total_cents,
        item_count: lines.len(),
    })
}

// =============================================================================
// Outcome
// =============================================================================

/// The user-visible result of a "Place Order" click.
#[derive(Debug, Clone)]
pub struct CheckoutOutcome {
    /// Present only on success.
    pub confirmation: Option<OrderConfirmation>,
    /// Always present: success or failure notification.
    pub toast: Toast,
    /// `Some(Route::Home)` on success; `None` on failure (stay on the page).
    pub route: Option<Route>,
}

impl CheckoutOutcome {
    /// Whether the order was placed.
    pub fn is_success(&self) -> bool {
        self.confirmation.is_some()
    }
}

/// Submits the cart and converts the result into user-visible effects.
///
/// ## Postconditions
/// On success: the shared cart is cleared, the toast references the
/// truncated order id, and the route is home.
///
/// On failure: the remaining steps were aborted, the toast carries the raw
/// error message with destructive styling, and the cart is left untouched
/// so the user may retry. Nothing written by earlier steps is rolled back.
///
/// ## Double Submission
/// Two overlapping calls are not deduplicated and may create two orders,
/// matching the source behavior this component preserves.
pub async fn place_order(
    db: &Database,
    session: &Session,
    cart_state: &CartState,
    form: &ContactForm,
) -> CheckoutOutcome {
    // Snapshot once; the shared cart is only touched again to clear it
    let cart = cart_state.with_cart(|c| c.clone());

    match submit_order(db, session, &cart, form).await {
        Ok(confirmation) => {
            cart_state.with_cart_mut(|c| c.clear());

            let toast = Toast::new(
                "Order Placed Successfully!",
                format!("Your order #{} has been placed.", confirmation.short_id()),
            );

            CheckoutOutcome {
                confirmation: Some(confirmation),
                toast,
                route: Some(Route::Home),
            }
        }
        Err(err) => {
            warn!(error = %err, "Order submission failed");

            CheckoutOutcome {
                confirmation: None,
                toast: Toast::destructive("Error", err.to_string()),
                route: None,
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
