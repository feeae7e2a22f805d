use indexmap::IndexMap;

use crate::output::Output;

/// The complete set of output files produced by one build invocation,
/// keyed by emitted file name.
///
/// Entries enumerate in insertion order, so a bundle assembled in the
/// build tool's emit order is walked in that same order. The bundle is
/// produced by the host and read-only to every check that inspects it.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    files: IndexMap<String, Output>,
}

impl Bundle {
    pub fn new() -> Self {
        Self { files: IndexMap::new() }
    }

    pub fn insert(&mut self, file_name: impl Into<String>, output: Output) {
        self.files.insert(file_name.into(), output);
    }

    pub fn get(&self, file_name: &str) -> Option<&Output> {
        self.files.get(file_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Output)> {
        self.files.iter().map(|(name, output)| (name.as_str(), output))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FromIterator<(String, Output)> for Bundle {
    fn from_iter<I: IntoIterator<Item = (String, Output)>>(iter: I) -> Self {
        Self { files: iter.into_iter().collect() }
    }
}
