use std::collections::BTreeMap;

/// Ordered, immutable list of values of one primitive type.
pub type Sequence<T> = Vec<T>;

/// Mapping from string length to the words sharing that length, in input
/// order within each group. `BTreeMap` keeps key iteration deterministic.
pub type Grouping = BTreeMap<usize, Sequence<String>>;
