use std::collections::BTreeMap;
use std::path::PathBuf;

/// Label symbols in display order: `0`-`9` then `a`-`z`.
pub const LABEL_ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h',
    'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub const LABEL_COUNT: usize = LABEL_ALPHABET.len();

/// Directory names grouped under each label of [`LABEL_ALPHABET`].
///
/// Every label is present, possibly with an empty sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelAssignment {
    buckets: [Vec<String>; LABEL_COUNT],
}

impl Default for LabelAssignment {
    fn default() -> Self {
        Self {
            buckets: std::array::from_fn(|_| Vec::new()),
        }
    }
}

impl LabelAssignment {
    /// Names assigned to `label`, or `None` if `label` is not in the alphabet.
    pub fn get(&self, label: char) -> Option<&[String]> {
        label_index(label).map(|idx| self.buckets[idx].as_slice())
    }

    /// All labels in alphabet order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (char, &[String])> + '_ {
        LABEL_ALPHABET
            .iter()
            .zip(self.buckets.iter())
            .map(|(label, names)| (*label, names.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// More names than labels, so at least one label wrapped around.
    pub fn is_overflowing(&self) -> bool {
        self.buckets[0].len() > 1
    }

    pub fn label_of(&self, name: &str) -> Option<char> {
        self.iter()
            .find(|(_, names)| names.iter().any(|n| n == name))
            .map(|(label, _)| label)
    }
}

fn label_index(label: char) -> Option<usize> {
    LABEL_ALPHABET.iter().position(|c| *c == label)
}

/// Assign every directory name in `directories` to a label.
pub fn assign(directories: &BTreeMap<String, PathBuf>) -> LabelAssignment {
    assign_names(directories.keys().map(String::as_str))
}

/// Round-robin over the label alphabet in byte-wise sorted order: the name at
/// sorted position `i` goes to `LABEL_ALPHABET[i % 36]`.
///
/// Duplicate names collapse to one entry.
pub fn assign_names<I, S>(names: I) -> LabelAssignment
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut sorted: Vec<String> = names.into_iter().map(Into::into).collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut assignment = LabelAssignment::default();
    for (i, name) in sorted.into_iter().enumerate() {
        assignment.buckets[i % LABEL_COUNT].push(name);
    }
    assignment
}
