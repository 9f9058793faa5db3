use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub job_title: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub employee_code: String,
}
