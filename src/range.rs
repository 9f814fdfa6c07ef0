/// Resolves optional `start`/`end` bounds into a half-open range over a
/// buffer of `length` items, with `slice`-style semantics: negative bounds
/// count from the end, both bounds clamp into `[0, length]`, and an inverted
/// selection is empty.
pub(crate) fn resolve(length: usize, start: Option<isize>, end: Option<isize>) -> (usize, usize) {
    let clamp = |bound: isize| -> usize {
        if bound < 0 {
            length.saturating_sub(bound.unsigned_abs())
        } else {
            (bound as usize).min(length)
        }
    };
    let start = start.map_or(0, clamp);
    let end = end.map_or(length, clamp);
    (start, end.max(start))
}

#[cfg(test)]
mod tests {
    use super::resolve;

    #[test]
    fn defaults_to_full_range() {
        assert_eq!(resolve(10, None, None), (0, 10));
    }

    #[test]
    fn clamps_positive_bounds() {
        assert_eq!(resolve(10, Some(2), Some(5)), (2, 5));
        assert_eq!(resolve(10, Some(2), Some(100)), (2, 10));
        assert_eq!(resolve(10, Some(100), None), (10, 10));
    }

    #[test]
    fn resolves_negative_bounds() {
        assert_eq!(resolve(10, Some(-3), None), (7, 10));
        assert_eq!(resolve(10, Some(-100), Some(-1)), (0, 9));
        assert_eq!(resolve(10, None, Some(-10)), (0, 0));
    }

    #[test]
    fn inverted_selection_is_empty() {
        assert_eq!(resolve(10, Some(5), Some(2)), (5, 5));
        assert_eq!(resolve(10, Some(-1), Some(1)), (9, 9));
    }
}
