use serde::{Deserialize, Serialize};

/// One row of the helpline dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelplineRecord {
    pub country_code: String,
    pub country: String,
    pub emergency: String,
    pub primary: String,
    pub secondary: String,
}
