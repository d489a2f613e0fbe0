/// Returns the rows inside the inclusive `[start, end]` window.
///
/// A `[0, 0]` window means no window was set and returns `data` whole.
/// Bounds past the end of `data` are clamped; an inverted window is empty.
#[must_use]
pub fn slice_window<T>(data: &[T], start: usize, end: usize) -> &[T] {
    if data.is_empty() || (start == 0 && end == 0) {
        return data;
    }
    let begin = start.min(data.len());
    let stop = end.saturating_add(1).min(data.len());
    if begin >= stop {
        return &data[..0];
    }
    &data[begin..stop]
}

#[cfg(test)]
mod tests {
    use super::slice_window;

    #[test]
    fn window_is_inclusive_of_both_ends() {
        let data = [0, 1, 2, 3, 4];
        assert_eq!(slice_window(&data, 1, 3), &[1, 2, 3]);
    }

    #[test]
    fn window_end_is_clamped_to_data_length() {
        let data = [0, 1];
        assert_eq!(slice_window(&data, 1, 10), &[1]);
        assert_eq!(slice_window(&data, 0, usize::MAX), &[0, 1]);
    }

    #[test]
    fn unset_window_keeps_every_row() {
        let data = [0, 1, 2];
        assert_eq!(slice_window(&data, 0, 0), &[0, 1, 2]);
    }

    #[test]
    fn inverted_or_out_of_range_window_is_empty() {
        let data = [0, 1, 2];
        assert!(slice_window(&data, 2, 1).is_empty());
        assert!(slice_window(&data, 5, 9).is_empty());
    }
}
