use crate::{Item, Outcome};

/// Collects the first `limit` successful items accepted by `predicate`,
/// scanning `outcomes` in rank order. Failures are skipped.
///
/// Returns fewer than `limit` items when the outcomes run out first.
pub fn reduce<E, P>(outcomes: &[Outcome<E>], predicate: P, limit: usize) -> Vec<Item>
where
    P: Fn(&Item) -> bool,
{
    let mut selected = Vec::with_capacity(limit.min(outcomes.len()));
    if limit == 0 {
        return selected;
    }
    for item in outcomes.iter().filter_map(Outcome::item) {
        if !predicate(item) {
            continue;
        }
        selected.push(item.clone());
        if selected.len() >= limit {
            break;
        }
    }
    selected
}
