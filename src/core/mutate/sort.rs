//! Deterministic re-sorting of resource documents.

use crate::core::{
    document::{Entry, EntryKind, ResourceDocument},
    mutate::MutationOutcome,
    store::LanguageGroup,
};

struct SectionBucket {
    marker: Option<Entry>,
    keys: Vec<Entry>,
    metadata: Vec<Entry>,
}

impl SectionBucket {
    fn implicit() -> Self {
        Self {
            marker: None,
            keys: Vec::new(),
            metadata: Vec::new(),
        }
    }

    fn named(marker: Entry) -> Self {
        Self {
            marker: Some(marker),
            keys: Vec::new(),
            metadata: Vec::new(),
        }
    }

    fn name(&self) -> &str {
        match &self.marker {
            Some(Entry {
                kind: EntryKind::Section { name, .. },
                ..
            }) => name,
            _ => "",
        }
    }
}

/// Re-sort a document in place: sections ordered lexicographically by name
/// (entries before the first marker form an implicit unnamed section that
/// stays first), keys ordered lexicographically within each section, and
/// each metadata entry re-attached directly after its owning key.
///
/// Metadata whose owner is not in the same section is appended at the end
/// of that section, ordered by owner name. The operation is idempotent:
/// sorting a sorted document changes nothing.
pub fn sort_document(document: &mut ResourceDocument) {
    let mut buckets = vec![SectionBucket::implicit()];

    for entry in document.entries().to_vec() {
        match &entry.kind {
            EntryKind::Section { .. } => buckets.push(SectionBucket::named(entry)),
            EntryKind::Key { .. } => buckets
                .last_mut()
                .expect("buckets always holds the implicit section")
                .keys
                .push(entry),
            EntryKind::Metadata { .. } => buckets
                .last_mut()
                .expect("buckets always holds the implicit section")
                .metadata
                .push(entry),
        }
    }

    buckets[1..].sort_by(|a, b| a.name().cmp(b.name()));

    let mut sorted = Vec::with_capacity(document.entries().len());
    for bucket in buckets {
        let SectionBucket {
            marker,
            mut keys,
            mut metadata,
        } = bucket;

        if let Some(marker) = marker {
            sorted.push(marker);
        }

        keys.sort_by(|a, b| entry_name(a).cmp(entry_name(b)));
        for key in keys {
            let key_name = entry_name(&key).to_string();
            sorted.push(key);
            if let Some(at) = metadata
                .iter()
                .position(|m| matches!(&m.kind, EntryKind::Metadata { owner, .. } if *owner == key_name))
            {
                sorted.push(metadata.remove(at));
            }
        }

        // Ownerless metadata trails the section, ordered by owner name.
        metadata.sort_by(|a, b| entry_name(a).cmp(entry_name(b)));
        sorted.extend(metadata);
    }

    document.set_entries(sorted);
}

fn entry_name(entry: &Entry) -> &str {
    match &entry.kind {
        EntryKind::Section { name, .. } => name,
        EntryKind::Key { name, .. } => name,
        EntryKind::Metadata { owner, .. } => owner,
    }
}

/// Sort every document of the group and write each file back. Per-file
/// write failures are collected without touching the other files.
pub fn sort_group(group: &LanguageGroup) -> MutationOutcome {
    let mut outcome = MutationOutcome::default();

    for document in &group.documents {
        let mut document = document.clone();
        sort_document(&mut document);
        match document.write_back() {
            Ok(()) => outcome.written.push(document.path().to_path_buf()),
            Err(e) => outcome.failed.push((document.path().to_path_buf(), e)),
        }
    }

    outcome
}
