//! Layout computation for the dashboard.
//!
//! Two pure steps run on every initialization, in this order:
//! [`reconcile`] restores the saved widget order, then [`resolve`] and
//! [`partition`] split the ordered widgets into columns. Column boundaries are
//! positional, so reconciliation must come first.

mod columns;
mod reconcile;

pub use columns::{even_split, partition, resolve, sizes_of, width_percent, Column};
pub use reconcile::reconcile;
