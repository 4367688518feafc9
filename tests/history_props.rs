use proptest::prelude::*;
use telemon::system::history::History;

proptest! {
    #[test]
    fn length_is_min_of_appends_and_capacity(
        capacity in 0usize..64,
        values in prop::collection::vec(-1.0e6f64..1.0e6, 0..200),
    ) {
        let mut history = History::new(capacity);
        for &v in &values {
            history.push(v);
        }
        prop_assert_eq!(history.len(), values.len().min(capacity));
        prop_assert!(history.len() <= history.capacity());
    }

    #[test]
    fn keeps_the_most_recent_values_in_order(
        capacity in 1usize..64,
        values in prop::collection::vec(-1.0e6f64..1.0e6, 0..200),
    ) {
        let mut history = History::new(capacity);
        for &v in &values {
            history.push(v);
        }
        let keep = values.len().min(capacity);
        let expected = values[values.len() - keep..].to_vec();
        prop_assert_eq!(history.values(), expected);
    }

    #[test]
    fn reading_is_idempotent(
        capacity in 0usize..32,
        values in prop::collection::vec(0.0f64..100.0, 0..64),
    ) {
        let mut history = History::new(capacity);
        for &v in &values {
            history.push(v);
        }
        let first = history.values();
        let second = history.values();
        prop_assert_eq!(first, second);
        prop_assert_eq!(history.capacity(), capacity);
    }
}
