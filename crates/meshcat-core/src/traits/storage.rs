use crate::errors::StorageError;
use crate::types::{MeshRecord, NewMeshRecord};

/// Insert + scan + bulk delete + note update. The only operations the
/// catalog engine performs against persisted state.
///
/// Implementations serialize every mutating call.
pub trait CatalogStore: Send + Sync {
    /// Persist a record, returning the store-assigned id.
    fn insert(&self, record: &NewMeshRecord) -> Result<i64, StorageError>;

    /// Every record, ordered by id ascending.
    fn scan(&self) -> Result<Vec<MeshRecord>, StorageError>;

    /// Remove all listed ids in one atomic batch. Unknown ids are ignored.
    /// Returns the number of rows actually removed.
    fn delete(&self, ids: &[i64]) -> Result<usize, StorageError>;

    /// Replace the note of one record. Returns `false` when the id is unknown.
    fn update_note(&self, id: i64, note: &str) -> Result<bool, StorageError>;
}
