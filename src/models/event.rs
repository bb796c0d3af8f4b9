use serde::{Deserialize, Serialize};

use crate::models::guest::Guest;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_id: String,
    pub event_name: String,
    pub event_location: String,
    pub guest_list: Vec<Guest>,
}
