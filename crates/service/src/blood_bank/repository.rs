use async_trait::async_trait;
use models::entry::{BloodBankEntry, BloodBankEntryInput};
use models::query::{EntryFilter, EntryQuery};

use crate::errors::ServiceError;

/// Trait abstraction for blood bank entry storage.
/// Implementations can be in-memory, file-backed, or database-backed.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Store a new entry under a freshly assigned id; any id supplied by
    /// the caller is ignored.
    async fn create(&self, input: BloodBankEntryInput) -> BloodBankEntry;
    async fn get(&self, id: u64) -> Result<BloodBankEntry, ServiceError>;
    /// Full replacement of every field except `id`.
    async fn update(&self, id: u64, input: BloodBankEntryInput) -> Result<BloodBankEntry, ServiceError>;
    async fn delete(&self, id: u64) -> Result<(), ServiceError>;
    /// The composite read: filter, then sort, then paginate.
    async fn query(&self, query: &EntryQuery) -> Vec<BloodBankEntry>;
    /// Filter-only read; same AND semantics as the first pipeline stage.
    async fn search(&self, filter: &EntryFilter) -> Vec<BloodBankEntry>;
}
