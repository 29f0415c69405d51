use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
}

impl Exercise {
    pub fn box_breathing() -> Self {
        Self {
            id: "box".to_string(),
            name: "Box Breathing (4-4-4-4)".to_string(),
        }
    }
}

/// The fixed exercise catalogue.
pub fn catalogue() -> Vec<Exercise> {
    vec![Exercise::box_breathing()]
}
