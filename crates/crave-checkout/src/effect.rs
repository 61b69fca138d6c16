//! # Effects
//!
//! Values describing what the presentation layer should do: show a toast,
//! navigate somewhere. The component never renders or routes itself; it
//! returns these and the host UI interprets them.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Navigation
// =============================================================================

/// Client-side navigation targets the checkout can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// The home view ("/"). Requested after a successful submission.
    Home,
    /// The sign-in view ("/auth"). Requested when no session exists.
    Auth,
    /// The cart view ("/cart"). Requested when the cart is empty.
    Cart,
}

// =============================================================================
// Toast
// =============================================================================

/// Visual weight of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Normal styling (success and informational messages).
    Default,
    /// Error styling.
    Destructive,
}

/// A user-facing notification.
///
/// Emitted on both success and failure of an order submission; the toast
/// presentation layer is an external collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Toast {
    /// Creates a default-styled toast.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Toast {
            title: title.into(),
            description: description.into(),
            severity: Severity::Default,
        }
    }

    /// Creates a destructive-styled toast.
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Toast {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_constructors() {
        let ok = Toast::new("Order Placed Successfully!", "Your order has been placed.");
        assert_eq!(ok.severity, Severity::Default);

        let err = Toast::destructive("Error", "something broke");
        assert_eq!(err.severity, Severity::Destructive);
        assert_eq!(err.title, "Error");
    }
}
