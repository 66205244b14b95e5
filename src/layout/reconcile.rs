//! Restores a saved widget order onto the live widget set.

use std::collections::HashMap;

/// Reorders `items` according to the saved `positions`.
///
/// Walking `positions` in order, each id that names a live item moves that
/// item to the end of the working order. Ids with no live item are skipped.
/// Items never mentioned keep their relative order and end up in front of
/// every mentioned item. With no saved positions the order is unchanged.
///
/// The result always holds exactly the input items.
///
/// ```
/// use dashboard_layout::layout::reconcile;
///
/// let live = vec!["a", "b", "c"];
/// let saved = vec!["c".to_string(), "a".to_string()];
/// assert_eq!(reconcile(live, &saved, |s| *s), vec!["b", "c", "a"]);
/// ```
pub fn reconcile<T, F>(items: Vec<T>, positions: &[String], id_of: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    if positions.is_empty() {
        return items;
    }

    let index: HashMap<&str, usize> = items
        .iter()
        .enumerate()
        .map(|(i, item)| (id_of(item), i))
        .collect();

    let mut order: Vec<usize> = (0..items.len()).collect();
    let mut skipped = 0usize;
    for id in positions {
        match index.get(id.as_str()) {
            Some(&i) => {
                order.retain(|&j| j != i);
                order.push(i);
            }
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::debug!("Skipped {} saved position(s) with no live widget", skipped);
    }

    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    order.into_iter().filter_map(|i| slots[i].take()).collect()
}
