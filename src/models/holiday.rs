use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A closure date. `branch_id` of `None` (JSON `null`) closes every branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holiday {
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "branchId")]
    pub branch_id: Option<i64>,
    pub reason: String,
}

impl Holiday {
    pub fn is_global(&self) -> bool {
        self.branch_id.is_none()
    }

    pub fn applies_to(&self, branch_id: i64) -> bool {
        match self.branch_id {
            None => true,
            Some(id) => id == branch_id,
        }
    }
}
