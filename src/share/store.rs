//! Share store implementations

use parking_lot::RwLock;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};
use uuid::Uuid;

use super::{validate_draft, ShareError, ShareResult};
use crate::types::{NoteDraft, ShareId, SharedNote};

/// Length of generated share ids
pub const SHARE_ID_LEN: usize = 8;

/// Fresh ids drawn before giving up on a create
const MAX_ID_ATTEMPTS: usize = 16;

/// Storage for shared note snapshots
///
/// Implementations must hand out a distinct id per successful `create`, even
/// when called concurrently, and never replace an existing entry.
pub trait ShareStore: Send + Sync + fmt::Debug {
    /// Snapshot a draft under a new share id
    fn create(&self, draft: NoteDraft) -> ShareResult<SharedNote>;

    /// Look up a snapshot by id
    fn get(&self, share_id: &str) -> ShareResult<SharedNote>;

    /// Number of stored snapshots
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

type IdGenerator = Box<dyn Fn() -> ShareId + Send + Sync>;

/// Generate an 8-character share id from a v4 UUID
pub fn generate_share_id() -> ShareId {
    Uuid::new_v4().simple().to_string()[..SHARE_ID_LEN].to_string()
}

/// Process-local share store; contents are lost on restart
pub struct InMemoryShareStore {
    notes: RwLock<HashMap<ShareId, SharedNote>>,
    next_id: IdGenerator,
}

impl InMemoryShareStore {
    pub fn new() -> Self {
        Self::with_id_generator(generate_share_id)
    }

    /// Use a custom id source (tests use this to force collisions)
    pub fn with_id_generator<F>(generator: F) -> Self
    where
        F: Fn() -> ShareId + Send + Sync + 'static,
    {
        Self {
            notes: RwLock::new(HashMap::new()),
            next_id: Box::new(generator),
        }
    }
}

impl Default for InMemoryShareStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InMemoryShareStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryShareStore")
            .field("notes", &self.notes.read().len())
            .finish()
    }
}

impl ShareStore for InMemoryShareStore {
    fn create(&self, draft: NoteDraft) -> ShareResult<SharedNote> {
        validate_draft(&draft)?;

        let mut pending = Some(draft);
        for _ in 0..MAX_ID_ATTEMPTS {
            let share_id = (self.next_id)();
            let mut notes = self.notes.write();
            match notes.entry(share_id) {
                Entry::Occupied(entry) => {
                    warn!("Share id collision on {}, drawing a new one", entry.key());
                }
                Entry::Vacant(entry) => {
                    let draft = pending.take().ok_or(ShareError::IdCollision)?;
                    let note = SharedNote::from_draft(entry.key().clone(), draft);
                    entry.insert(note.clone());
                    debug!("Stored shared note {}", note.share_id);
                    return Ok(note);
                }
            }
        }
        Err(ShareError::IdCollision)
    }

    fn get(&self, share_id: &str) -> ShareResult<SharedNote> {
        self.notes
            .read()
            .get(share_id)
            .cloned()
            .ok_or_else(|| ShareError::NotFound(share_id.to_string()))
    }

    fn len(&self) -> usize {
        self.notes.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_generated_ids_are_short_hex() {
        let id = generate_share_id();
        assert_eq!(id.len(), SHARE_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_create_then_get() {
        let store = InMemoryShareStore::new();
        let created = store
            .create(NoteDraft::new("C").with_title("T"))
            .unwrap();

        let fetched = store.get(&created.share_id).unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.title, "T");
        assert_eq!(fetched.content, "C");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_unknown_id() {
        let store = InMemoryShareStore::new();
        assert!(matches!(
            store.get("doesnotexist"),
            Err(ShareError::NotFound(id)) if id == "doesnotexist"
        ));
    }

    #[test]
    fn test_empty_content_rejected() {
        let store = InMemoryShareStore::new();
        assert!(matches!(
            store.create(NoteDraft::new("  ")),
            Err(ShareError::Validation(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_collision_draws_new_id() {
        let calls = AtomicUsize::new(0);
        let store = InMemoryShareStore::with_id_generator(move || {
            // aaaaaaaa, aaaaaaaa, bbbbbbbb, ...
            match calls.fetch_add(1, Ordering::SeqCst) {
                0 | 1 => "aaaaaaaa".to_string(),
                _ => "bbbbbbbb".to_string(),
            }
        });

        let first = store.create(NoteDraft::new("first")).unwrap();
        let second = store.create(NoteDraft::new("second")).unwrap();
        assert_eq!(first.share_id, "aaaaaaaa");
        assert_eq!(second.share_id, "bbbbbbbb");
        assert_eq!(store.get("aaaaaaaa").unwrap().content, "first");
    }

    #[test]
    fn test_exhausted_ids_fail() {
        let store = InMemoryShareStore::with_id_generator(|| "samesame".to_string());
        store.create(NoteDraft::new("first")).unwrap();
        assert!(matches!(
            store.create(NoteDraft::new("second")),
            Err(ShareError::IdCollision)
        ));
        assert_eq!(store.get("samesame").unwrap().content, "first");
    }

    #[test]
    fn test_concurrent_creates_get_distinct_ids() {
        let store = Arc::new(InMemoryShareStore::new());
        let ids: Vec<ShareId> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..64)
                .map(|i| {
                    let store = store.clone();
                    s.spawn(move || {
                        store
                            .create(NoteDraft::new(format!("note {}", i)))
                            .unwrap()
                            .share_id
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), 64);
        assert_eq!(store.len(), 64);
        for id in &ids {
            assert_eq!(store.get(id).unwrap().share_id, *id);
        }
    }
}
