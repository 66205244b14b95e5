//! Column balancing: how many widgets go in each column.

/// One column of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<T> {
    /// Width as a percentage of the dashboard, `floor(100 / columns)`.
    pub width_percent: u8,
    /// Items in top-to-bottom order.
    pub items: Vec<T>,
}

impl<T> Column<T> {
    /// An empty column kept so the visual column count is preserved.
    pub fn is_placeholder(&self) -> bool {
        self.items.is_empty()
    }
}

/// Percentage width of each column.
pub fn width_percent(columns: usize) -> u8 {
    if columns == 0 {
        return 0;
    }
    (100 / columns).min(100) as u8
}

/// Spreads `count` items over `columns` columns.
///
/// The first `count % columns` columns receive `ceil(count / columns)` items
/// and the rest `floor(count / columns)`, so sizes differ by at most one and
/// earlier columns are never shorter than later ones.
pub fn even_split(count: usize, columns: usize) -> Vec<usize> {
    if columns == 0 {
        return Vec::new();
    }
    let base = count / columns;
    let extra = count % columns;
    (0..columns)
        .map(|i| if i < extra { base + 1 } else { base })
        .collect()
}

/// Column sizes for this run.
///
/// Stored sizes are used only when there is one per column and they add up
/// to the live item count; otherwise they are stale and the even split is
/// used instead. A total that overflows `usize` is stale as well.
pub fn resolve(stored: Option<&[usize]>, live_count: usize, columns: usize) -> Vec<usize> {
    match stored {
        Some(sizes) if sizes.len() == columns && checked_total(sizes) == Some(live_count) => {
            sizes.to_vec()
        }
        Some(sizes) => {
            tracing::debug!(
                "Discarding stale column sizes {:?} ({} widgets, {} columns)",
                sizes,
                live_count,
                columns
            );
            even_split(live_count, columns)
        }
        None => even_split(live_count, columns),
    }
}

fn checked_total(sizes: &[usize]) -> Option<usize> {
    sizes.iter().try_fold(0usize, |total, &size| total.checked_add(size))
}

/// Slices `items` into contiguous columns of the given `sizes`.
///
/// A zero size yields an empty placeholder column. If `sizes` does not cover
/// every item, the leftovers are appended to the last column.
pub fn partition<T>(items: Vec<T>, sizes: &[usize]) -> Vec<Column<T>> {
    let width = width_percent(sizes.len());
    let mut rest = items.into_iter();
    let mut columns: Vec<Column<T>> = sizes
        .iter()
        .map(|&size| Column {
            width_percent: width,
            items: rest.by_ref().take(size).collect(),
        })
        .collect();
    if let Some(last) = columns.last_mut() {
        last.items.extend(rest);
    }
    columns
}

/// Item counts of existing columns.
pub fn sizes_of<T>(columns: &[Column<T>]) -> Vec<usize> {
    columns.iter().map(|c| c.items.len()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_widgets_two_columns_is_three_two() {
        assert_eq!(resolve(None, 5, 2), vec![3, 2]);
    }

    #[test]
    fn even_split_is_balanced_for_all_small_inputs() {
        for count in 0..=20 {
            for columns in 1..=6 {
                let sizes = even_split(count, columns);
                assert_eq!(sizes.len(), columns);
                assert_eq!(sizes.iter().sum::<usize>(), count);
                let max = sizes.iter().max().copied().unwrap_or(0);
                let min = sizes.iter().min().copied().unwrap_or(0);
                assert!(max - min <= 1, "count={count} columns={columns} sizes={sizes:?}");
            }
        }
    }

    #[test]
    fn even_split_puts_larger_columns_first() {
        assert_eq!(even_split(5, 4), vec![2, 1, 1, 1]);
        assert_eq!(even_split(2, 3), vec![1, 1, 0]);
    }

    #[test]
    fn matching_stored_sizes_are_kept() {
        assert_eq!(resolve(Some(&[1, 4][..]), 5, 2), vec![1, 4]);
        assert_eq!(resolve(Some(&[0, 5][..]), 5, 2), vec![0, 5]);
    }

    #[test]
    fn stored_sizes_with_wrong_sum_fall_back() {
        assert_eq!(resolve(Some(&[2, 2][..]), 5, 2), vec![3, 2]);
    }

    #[test]
    fn overflowing_stored_sizes_fall_back() {
        assert_eq!(resolve(Some(&[usize::MAX, 2][..]), 5, 2), vec![3, 2]);
    }

    #[test]
    fn stored_sizes_wrapping_to_live_count_fall_back() {
        // usize::MAX + 6 wraps to 5 under unchecked addition.
        assert_eq!(resolve(Some(&[usize::MAX, 6][..]), 5, 2), vec![3, 2]);
    }

    #[test]
    fn stored_sizes_with_wrong_length_fall_back() {
        assert_eq!(resolve(Some(&[1, 1, 3][..]), 5, 2), vec![3, 2]);
        assert_eq!(resolve(Some(&[][..]), 5, 2), vec![3, 2]);
    }

    #[test]
    fn width_is_floor_of_hundred_over_columns() {
        assert_eq!(width_percent(1), 100);
        assert_eq!(width_percent(2), 50);
        assert_eq!(width_percent(3), 33);
        assert_eq!(width_percent(7), 14);
    }

    #[test]
    fn partition_slices_contiguously() {
        let cols = partition(vec!["a", "b", "c", "d", "e"], &[3, 2]);
        assert_eq!(cols[0].items, vec!["a", "b", "c"]);
        assert_eq!(cols[1].items, vec!["d", "e"]);
        assert!(cols.iter().all(|c| c.width_percent == 50));
    }

    #[test]
    fn zero_size_column_is_a_placeholder() {
        let cols = partition(vec!["a", "b"], &[0, 2, 0]);
        assert_eq!(cols.len(), 3);
        assert!(cols[0].is_placeholder());
        assert_eq!(cols[1].items, vec!["a", "b"]);
        assert!(cols[2].is_placeholder());
        assert_eq!(sizes_of(&cols), vec![0, 2, 0]);
    }

    #[test]
    fn partition_keeps_leftovers_in_last_column() {
        let cols = partition(vec![1, 2, 3, 4], &[1, 1]);
        assert_eq!(cols[1].items, vec![2, 3, 4]);
    }
}
