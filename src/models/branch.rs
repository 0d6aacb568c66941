use serde::{Deserialize, Serialize};

use super::Room;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub floors: Vec<Floor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Floor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "floorNumber")]
    pub floor_number: i32,
    pub rooms: Vec<Room>,
}

impl Branch {
    /// Short display name: everything before the "—" separator, trimmed.
    /// Branch names come back as "Koramangala — 5th Block" and selectors
    /// only show the first part.
    pub fn short_name(&self) -> &str {
        self.name.split('—').next().unwrap_or(self.name.as_str()).trim()
    }

    pub fn floor(&self, floor_number: i32) -> Option<&Floor> {
        self.floors.iter().find(|f| f.floor_number == floor_number)
    }
}

impl Floor {
    pub fn room(&self, room_id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == room_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_strips_separator_and_whitespace() {
        let branch = Branch {
            id: 1,
            name: "Koramangala — 5th Block".to_string(),
            address: "Bangalore".to_string(),
            floors: vec![],
        };
        assert_eq!(branch.short_name(), "Koramangala");
    }

    #[test]
    fn short_name_passes_through_plain_names() {
        let branch = Branch {
            id: 2,
            name: "Indiranagar".to_string(),
            address: "Bangalore".to_string(),
            floors: vec![],
        };
        assert_eq!(branch.short_name(), "Indiranagar");
    }
}
