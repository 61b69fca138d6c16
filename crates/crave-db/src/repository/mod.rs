//! # Repositories
//!
//! One repository per aggregate. Each owns a clone of the pool and exposes
//! typed async operations; callers never see SQL.
//!
//! - [`customer`] - customer rows keyed by auth user id
//! - [`menu`] - the menu_items catalog
//! - [`order`] - orders and their line items

pub mod customer;
pub mod menu;
pub mod order;
