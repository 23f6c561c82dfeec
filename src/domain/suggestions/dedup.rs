use super::model::LinkIdentity;
use std::collections::HashMap;

/// Known link identities keyed on the exact URL string.
///
/// URLs are not canonicalized: `https://a.dev` and `https://a.dev/` are two
/// different links. Entries are never removed.
#[derive(Debug, Clone, Default)]
pub struct DeduplicationSet {
    entries: Vec<LinkIdentity>,
    index: HashMap<String, usize>,
}

impl DeduplicationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.index.contains_key(url)
    }

    /// Returns `true` when the URL was not known yet.
    /// A known URL without a title picks up the title of a later identity.
    pub fn add(&mut self, identity: LinkIdentity) -> bool {
        if let Some(&position) = self.index.get(&identity.url) {
            let existing = &mut self.entries[position];
            if existing.title.is_none() && identity.title.is_some() {
                existing.title = identity.title;
            }
            return false;
        }

        self.index.insert(identity.url.clone(), self.entries.len());
        self.entries.push(identity);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identities in insertion order
    pub fn identities(&self) -> &[LinkIdentity] {
        &self.entries
    }

    pub fn into_identities(self) -> Vec<LinkIdentity> {
        self.entries
    }
}

impl FromIterator<LinkIdentity> for DeduplicationSet {
    fn from_iter<I: IntoIterator<Item = LinkIdentity>>(iter: I) -> Self {
        let mut set = DeduplicationSet::new();
        for identity in iter {
            set.add(identity);
        }
        set
    }
}
