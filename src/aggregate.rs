use std::collections::HashMap;

use itertools::Itertools;
use tracing::warn;

/// Bucket identifier; tuple keys are stored sorted so field order never matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey(Vec<String>);

impl GroupKey {
    pub fn single(value: impl Into<String>) -> Self {
        GroupKey(vec![value.into()])
    }

    pub fn canonical<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GroupKey(values.into_iter().map(Into::into).sorted().collect())
    }

    pub fn parts(&self) -> &[String] {
        &self.0
    }

    pub fn render(&self, separator: &str) -> String {
        self.0.join(separator)
    }
}

/// Group key → member identifiers, members in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grouping {
    groups: HashMap<GroupKey, Vec<String>>,
}

impl Grouping {
    /// Bucket `records`; records whose `key` yields `None` are left out.
    pub fn build<T, K, M>(records: impl IntoIterator<Item = T>, mut key: K, mut member: M) -> Self
    where
        K: FnMut(&T) -> Option<GroupKey>,
        M: FnMut(&T) -> String,
    {
        let groups = records
            .into_iter()
            .filter_map(|r| key(&r).map(|k| (k, member(&r))))
            .into_group_map();
        Grouping { groups }
    }

    /// Add an empty group for every key of `universe` nobody mapped to.
    ///
    /// Observed keys outside the universe stay in the grouping.
    pub fn with_universe(mut self, universe: impl IntoIterator<Item = GroupKey>) -> Self {
        let universe: Vec<GroupKey> = universe.into_iter().collect();
        for key in self.groups.keys().filter(|k| !universe.contains(k)) {
            warn!(
                key = %key.render(";"),
                members = self.groups[key].len(),
                "group key outside the known universe"
            );
        }
        for key in universe {
            self.groups.entry(key).or_default();
        }
        self
    }

    pub fn members(&self, key: &GroupKey) -> Option<&[String]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups that have at least one member.
    pub fn populated(&self) -> usize {
        self.groups.values().filter(|m| !m.is_empty()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &[String])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }
}
