use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use models::entry::{BloodBankEntry, BloodBankEntryInput};
use models::query::{EntryFilter, EntryQuery, PageParams, SortKey};
use service::blood_bank::BloodBankStore;
use service::errors::ServiceError;

use crate::errors::JsonApiError;

/// 列表查询参数：过滤 + 排序 + 分页，全部可选
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub blood_type: Option<String>,
    pub status: Option<String>,
    pub donor_name: Option<String>,
    /// one of `blood_type`, `collection_date`, `donor_name`; unknown keys are ignored
    pub sort_by: Option<String>,
    #[serde(default)]
    pub descending: bool,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl ListQuery {
    fn into_entry_query(self) -> EntryQuery {
        EntryQuery {
            filter: EntryFilter {
                blood_type: self.blood_type,
                status: self.status,
                donor_name: self.donor_name,
            },
            sort_by: self.sort_by.as_deref().and_then(SortKey::parse),
            descending: self.descending,
            page: PageParams { page: self.page, size: self.size },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub blood_type: Option<String>,
    pub status: Option<String>,
    pub donor_name: Option<String>,
}

/// 创建血库记录
pub async fn create(
    State(store): State<Arc<BloodBankStore>>,
    Json(input): Json<BloodBankEntryInput>,
) -> (StatusCode, Json<BloodBankEntry>) {
    let entry = store.create(input).await;
    info!(id = entry.id, donor = %entry.donor_name, "create blood bank entry");
    (StatusCode::CREATED, Json(entry))
}

/// 列出记录：支持过滤、排序、分页
pub async fn list(
    State(store): State<Arc<BloodBankStore>>,
    Query(q): Query<ListQuery>,
) -> Json<Vec<BloodBankEntry>> {
    let query = q.into_entry_query();
    let entries = store.query(&query).await;
    info!(count = entries.len(), "list blood bank entries");
    Json(entries)
}

/// 获取指定记录
pub async fn get_by_id(
    State(store): State<Arc<BloodBankStore>>,
    Path(id): Path<u64>,
) -> Result<Json<BloodBankEntry>, JsonApiError> {
    store.get(id).await.map(Json).map_err(|e| match e {
        ServiceError::NotFound(_) => {
            JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string()))
        }
    })
}

/// 更新指定记录（整体替换）
pub async fn update(
    State(store): State<Arc<BloodBankStore>>,
    Path(id): Path<u64>,
    Json(input): Json<BloodBankEntryInput>,
) -> Result<Json<BloodBankEntry>, JsonApiError> {
    match store.update(id, input).await {
        Ok(entry) => {
            info!(id = entry.id, "updated blood bank entry");
            Ok(Json(entry))
        }
        Err(e @ ServiceError::NotFound(_)) => {
            Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string())))
        }
    }
}

/// 删除指定记录
pub async fn delete(
    State(store): State<Arc<BloodBankStore>>,
    Path(id): Path<u64>,
) -> StatusCode {
    match store.delete(id).await {
        Ok(()) => {
            info!(id, "deleted blood bank entry");
            StatusCode::NO_CONTENT
        }
        Err(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
    }
}

/// 条件搜索：血型/状态精确匹配（忽略大小写），捐献者姓名子串匹配
pub async fn search(
    State(store): State<Arc<BloodBankStore>>,
    Query(q): Query<SearchQuery>,
) -> Json<Vec<BloodBankEntry>> {
    let filter = EntryFilter {
        blood_type: q.blood_type,
        status: q.status,
        donor_name: q.donor_name,
    };
    let entries = store.search(&filter).await;
    info!(count = entries.len(), "search blood bank entries");
    Json(entries)
}
