//! Data model for the extraction result — format-agnostic.

/// Everything extracted from a single input file: the filepath as given and
/// the normalized documentation blocks, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputEntry {
    pub file: String,
    pub members: Vec<String>,
}

/// The final mapping from namespace to entry — the sole externally visible
/// result of a run.
///
/// Keys are unique and keep their first-insertion position; re-inserting an
/// existing namespace replaces the value in place (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputDocument {
    entries: Vec<(String, OutputEntry)>,
}

impl OutputDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, namespace: String, entry: OutputEntry) {
        match self.entries.iter_mut().find(|(ns, _)| *ns == namespace) {
            Some((_, existing)) => *existing = entry,
            None => self.entries.push((namespace, entry)),
        }
    }

    #[allow(dead_code)]
    pub fn get(&self, namespace: &str) -> Option<&OutputEntry> {
        self.entries
            .iter()
            .find(|(ns, _)| ns == namespace)
            .map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OutputEntry)> {
        self.entries.iter().map(|(ns, entry)| (ns.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
