use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use models::entry::{BloodBankEntry, BloodBankEntryInput};
use models::query::{EntryFilter, EntryQuery, SortKey};

use crate::blood_bank::repository::EntryRepository;
use crate::errors::ServiceError;

struct Inner {
    /// Insertion-ordered; id lookup is an O(n) scan, fine at this scale.
    entries: Vec<BloodBankEntry>,
    /// Strictly increasing, starting at 1; ids are never reused.
    next_id: u64,
}

/// 内存仓储：进程内唯一实例，重启即清空（设计使然，非缺陷）
///
/// All reads and writes go through a single `RwLock`, so id assignment and
/// insertion are atomic with respect to concurrent callers.
#[derive(Clone)]
pub struct BloodBankStore {
    inner: Arc<RwLock<Inner>>,
}

impl BloodBankStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: Arc::new(RwLock::new(Inner { entries: Vec::new(), next_id: 1 })),
        })
    }

    /// 创建新记录：分配 id 并追加到集合尾部
    pub async fn create(&self, input: BloodBankEntryInput) -> BloodBankEntry {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        let entry = BloodBankEntry::from_input(id, input);
        inner.entries.push(entry.clone());
        info!(id, donor = %entry.donor_name, blood_type = %entry.blood_type, "created blood bank entry");
        entry
    }

    /// 根据 id 获取
    pub async fn get(&self, id: u64) -> Result<BloodBankEntry, ServiceError> {
        let inner = self.inner.read().await;
        inner
            .entries
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("entry"))
    }

    /// 更新指定记录（整体替换，id 不变）
    pub async fn update(&self, id: u64, input: BloodBankEntryInput) -> Result<BloodBankEntry, ServiceError> {
        let mut inner = self.inner.write().await;
        let entry = inner
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ServiceError::not_found("entry"))?;
        entry.replace_with(input);
        let updated = entry.clone();
        info!(id, "updated blood bank entry");
        Ok(updated)
    }

    /// 删除指定记录
    pub async fn delete(&self, id: u64) -> Result<(), ServiceError> {
        let mut inner = self.inner.write().await;
        let idx = inner
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ServiceError::not_found("entry"))?;
        inner.entries.remove(idx);
        info!(id, "deleted blood bank entry");
        Ok(())
    }

    /// 组合查询：过滤 → 排序 → 分页，固定顺序
    pub async fn query(&self, query: &EntryQuery) -> Vec<BloodBankEntry> {
        let inner = self.inner.read().await;
        let mut out: Vec<BloodBankEntry> = inner
            .entries
            .iter()
            .filter(|e| query.filter.matches(e))
            .cloned()
            .collect();
        drop(inner);

        if let Some(key) = query.sort_by {
            // sort_by is stable, so ties keep their insertion order
            out.sort_by(|a, b| {
                let ord = match key {
                    SortKey::BloodType => a.blood_type.cmp(&b.blood_type),
                    SortKey::CollectionDate => a.collection_date.cmp(&b.collection_date),
                    SortKey::DonorName => a.donor_name.cmp(&b.donor_name),
                };
                if query.descending { ord.reverse() } else { ord }
            });
        }

        match query.page.window() {
            Some((skip, take)) => out.into_iter().skip(skip).take(take).collect(),
            None => out,
        }
    }

    /// 条件搜索：仅过滤，不排序不分页
    pub async fn search(&self, filter: &EntryFilter) -> Vec<BloodBankEntry> {
        let inner = self.inner.read().await;
        inner
            .entries
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect()
    }

    /// Number of stored entries; used by tests and logging.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl EntryRepository for BloodBankStore {
    async fn create(&self, input: BloodBankEntryInput) -> BloodBankEntry { self.create(input).await }
    async fn get(&self, id: u64) -> Result<BloodBankEntry, ServiceError> { self.get(id).await }
    async fn update(&self, id: u64, input: BloodBankEntryInput) -> Result<BloodBankEntry, ServiceError> { self.update(id, input).await }
    async fn delete(&self, id: u64) -> Result<(), ServiceError> { self.delete(id).await }
    async fn query(&self, query: &EntryQuery) -> Vec<BloodBankEntry> { self.query(query).await }
    async fn search(&self, filter: &EntryFilter) -> Vec<BloodBankEntry> { self.search(filter).await }
}
