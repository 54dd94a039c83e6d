use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 血库记录：单条献血库存数据
/// - blood_type: 例如 `O+`、`AB-`
/// - quantity: 采集量（毫升）
/// - status: 例如 `Available`、`Reserved`、`Expired`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BloodBankEntry {
    pub id: u64,
    pub donor_name: String,
    pub age: u32,
    pub blood_type: String,
    pub contact_info: String,
    pub quantity: f64,
    pub collection_date: NaiveDate,
    pub expiration_date: NaiveDate,
    pub status: String,
}

/// 创建/更新输入模型：不包含 id，由仓储分配
///
/// Update is a full replacement of every field except `id`; a field the
/// caller omits deserializes to its default value rather than keeping the
/// stored one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BloodBankEntryInput {
    #[serde(default)]
    pub donor_name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub blood_type: String,
    #[serde(default)]
    pub contact_info: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub collection_date: NaiveDate,
    #[serde(default)]
    pub expiration_date: NaiveDate,
    #[serde(default)]
    pub status: String,
}

impl BloodBankEntry {
    /// Materialize a stored entry from an input under a repository-assigned id.
    pub fn from_input(id: u64, input: BloodBankEntryInput) -> Self {
        Self {
            id,
            donor_name: input.donor_name,
            age: input.age,
            blood_type: input.blood_type,
            contact_info: input.contact_info,
            quantity: input.quantity,
            collection_date: input.collection_date,
            expiration_date: input.expiration_date,
            status: input.status,
        }
    }

    /// Overwrite every field except `id` with the input's fields.
    pub fn replace_with(&mut self, input: BloodBankEntryInput) {
        self.donor_name = input.donor_name;
        self.age = input.age;
        self.blood_type = input.blood_type;
        self.contact_info = input.contact_info;
        self.quantity = input.quantity;
        self.collection_date = input.collection_date;
        self.expiration_date = input.expiration_date;
        self.status = input.status;
    }
}
