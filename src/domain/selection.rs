//! Exactly-one-of-N selection over optional fields
//!
//! Used wherever a set of flags is mutually exclusive: the caller labels each
//! optional value with a key and matches on the tagged outcome.

/// Outcome of selecting among optional fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<K, T> {
    /// No field is set.
    Empty,
    /// Exactly one field is set: its key and value.
    One(K, T),
    /// More than one field is set: the keys of all set fields, in input order.
    Many(Vec<K>),
}

/// Select the single set field among `fields`.
pub fn select_one<K, T, I>(fields: I) -> Selection<K, T>
where
    I: IntoIterator<Item = (K, Option<T>)>,
{
    let mut selected: Option<(K, T)> = None;
    let mut extra: Vec<K> = Vec::new();

    for (key, value) in fields {
        let Some(value) = value else { continue };
        if selected.is_none() && extra.is_empty() {
            selected = Some((key, value));
            continue;
        }
        if let Some((first, _)) = selected.take() {
            extra.push(first);
        }
        extra.push(key);
    }

    match (selected, extra.is_empty()) {
        (_, false) => Selection::Many(extra),
        (Some((key, value)), true) => Selection::One(key, value),
        (None, true) => Selection::Empty,
    }
}
