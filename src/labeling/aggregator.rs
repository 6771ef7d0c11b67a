use std::collections::BTreeMap;

use super::rows::Triple;

/// Rows grouped by subject.
///
/// Subjects iterate in first-appearance order and rows keep their source
/// order within a subject. Nothing is deduplicated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectGroups<T> {
    order: Vec<String>,
    groups: BTreeMap<String, Vec<T>>,
}

impl<T> Default for SubjectGroups<T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            groups: BTreeMap::new(),
        }
    }
}

impl<T> SubjectGroups<T> {
    fn push(&mut self, subject: &str, row: T) {
        match self.groups.get_mut(subject) {
            Some(rows) => rows.push(row),
            None => {
                self.order.push(subject.to_string());
                self.groups.insert(subject.to_string(), vec![row]);
            }
        }
    }

    /// Rows of one subject.
    #[must_use]
    pub fn get(&self, subject: &str) -> Option<&[T]> {
        self.groups.get(subject).map(Vec::as_slice)
    }

    /// Subjects with their rows, in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.order
            .iter()
            .filter_map(|subject| self.get(subject).map(|rows| (subject.as_str(), rows)))
    }

    /// Number of distinct subjects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<T> IntoIterator for SubjectGroups<T> {
    type Item = (String, Vec<T>);
    type IntoIter = std::vec::IntoIter<(String, Vec<T>)>;

    fn into_iter(mut self) -> Self::IntoIter {
        self.order
            .into_iter()
            .filter_map(|subject| {
                let rows = self.groups.remove(&subject)?;
                Some((subject, rows))
            })
            .collect::<Vec<_>>()
            .into_iter()
    }
}

/// Groups arbitrary rows by the subject `key` extracts from them.
pub fn group_by<T, F>(rows: impl IntoIterator<Item = T>, key: F) -> SubjectGroups<T>
where
    F: Fn(&T) -> &str,
{
    let mut groups = SubjectGroups::default();
    for row in rows {
        let subject = key(&row).to_string();
        groups.push(&subject, row);
    }
    groups
}

/// Groups triples by subject, one entry per entity.
pub fn group_by_subject(rows: impl IntoIterator<Item = Triple>) -> SubjectGroups<Triple> {
    group_by(rows, |triple| triple.subject.as_str())
}

/// Collapses triples into one object per predicate URI.
///
/// The first triple seen for a predicate wins; later ones for the same
/// predicate are discarded without distinction between repeats and
/// conflicting values.
pub fn first_values<'a>(rows: impl IntoIterator<Item = &'a Triple>) -> BTreeMap<&'a str, &'a str> {
    let mut values = BTreeMap::new();
    for triple in rows {
        values
            .entry(triple.predicate.as_str())
            .or_insert(triple.object.as_str());
    }
    values
}
