use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    pub attending: bool,
    /// Creation-time reference to the owning event. Never revalidated after
    /// creation; omitted from the wire when the client supplied none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
}
