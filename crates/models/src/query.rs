use serde::Deserialize;

use crate::entry::BloodBankEntry;

/// Filter criteria combined with AND semantics; an unset criterion applies
/// no constraint. Matching is case-insensitive, unlike sorting.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EntryFilter {
    pub blood_type: Option<String>,
    pub status: Option<String>,
    pub donor_name: Option<String>,
}

impl EntryFilter {
    pub fn matches(&self, entry: &BloodBankEntry) -> bool {
        if let Some(bt) = &self.blood_type {
            if !entry.blood_type.eq_ignore_ascii_case(bt) {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if !entry.status.eq_ignore_ascii_case(status) {
                return false;
            }
        }
        if let Some(name) = &self.donor_name {
            if !entry.donor_name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.blood_type.is_none() && self.status.is_none() && self.donor_name.is_none()
    }
}

/// Keys a listing may be ordered by. Sorting compares strings with their
/// default `Ord` (case-sensitive), intentionally distinct from the
/// case-insensitive filter matching above.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    BloodType,
    CollectionDate,
    DonorName,
}

impl SortKey {
    /// Parse a caller-supplied key; unknown values yield `None` so a bad
    /// key degrades to "no sort" instead of failing the request.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "blood_type" | "bloodtype" => Some(Self::BloodType),
            "collection_date" | "collectiondate" => Some(Self::CollectionDate),
            "donor_name" | "donorname" => Some(Self::DonorName),
            _ => None,
        }
    }
}

/// 分页参数：1 基页码 + 每页条数，两者都提供时才生效
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl PageParams {
    /// Resolve to a `(skip, take)` window, or `None` when either parameter
    /// is absent. `page <= 1` skips nothing; `size == 0` takes nothing.
    pub fn window(&self) -> Option<(usize, usize)> {
        let (page, size) = (self.page?, self.size?);
        let skip = (page.saturating_sub(1) as usize).saturating_mul(size as usize);
        Some((skip, size as usize))
    }
}

/// The composite read request: filter, then sort, then paginate.
#[derive(Clone, Debug, Default)]
pub struct EntryQuery {
    pub filter: EntryFilter,
    pub sort_by: Option<SortKey>,
    pub descending: bool,
    pub page: PageParams,
}
