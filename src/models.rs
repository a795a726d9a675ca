//! Frontend Models
//!
//! Data structures matching the complaint service payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Fixed demo identity attached to every submission
pub const DEMO_USER_ID: &str = "DEMO";

/// Complaint category. Names the client doesn't know decode as `Others`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Category {
    Roads,
    Water,
    Electricity,
    Health,
    Education,
    Sanitation,
    #[serde(rename = "Public Transport")]
    PublicTransport,
    #[serde(rename = "Waste Management")]
    WasteManagement,
    Safety,
    #[default]
    Others,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Roads,
        Category::Water,
        Category::Electricity,
        Category::Health,
        Category::Education,
        Category::Sanitation,
        Category::PublicTransport,
        Category::WasteManagement,
        Category::Safety,
        Category::Others,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Roads => "Roads",
            Category::Water => "Water",
            Category::Electricity => "Electricity",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Sanitation => "Sanitation",
            Category::PublicTransport => "Public Transport",
            Category::WasteManagement => "Waste Management",
            Category::Safety => "Safety",
            Category::Others => "Others",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Category::parse(&value).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

/// Administrative level a complaint is addressed to (passed through as-is)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Level {
    #[default]
    Local,
    State,
    Central,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Local, Level::State, Level::Central];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Local => "Local",
            Level::State => "State",
            Level::Central => "Central",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == value)
    }
}

/// Complaint status, only ever changed by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl Status {
    /// Exact value the service matches in `?status=`
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In Progress",
            Status::Resolved => "Resolved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// Complaint record (matches service)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub complaint_id: String,
    #[serde(default)]
    pub text: String,
    pub category: Category,
    pub priority: Priority,
    pub status: Status,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub district: Option<String>,
}

/// Ids arrive as strings or numbers depending on the backing store
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Signed(i64),
        Unsigned(u64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Signed(n) => n.to_string(),
        RawId::Unsigned(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
    })
}

/// A list response decoded row by row
#[derive(Debug, Default)]
pub struct DecodedList {
    pub complaints: Vec<Complaint>,
    /// One message per row that could not be read
    pub skipped: Vec<String>,
}

/// Decode each row on its own so a single malformed record
/// cannot blank the whole list.
pub fn decode_complaints(rows: Vec<serde_json::Value>) -> DecodedList {
    let mut decoded = DecodedList::default();
    for (index, row) in rows.into_iter().enumerate() {
        match serde_json::from_value::<Complaint>(row) {
            Ok(complaint) => decoded.complaints.push(complaint),
            Err(e) => decoded.skipped.push(format!("row {}: {}", index, e)),
        }
    }
    decoded
}

/// Aggregate counts computed by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub pending: u32,
    #[serde(default)]
    pub in_progress: u32,
    #[serde(default)]
    pub resolved: u32,
}

/// Body of `POST /complaints`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewComplaint {
    pub user_id: String,
    pub text: String,
    pub category: Category,
    pub priority: Priority,
    pub level: Level,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complaint_from_service_json() {
        let json = r#"{
            "complaint_id": "c-17",
            "text": "Streetlight out near the market",
            "category": "Public Transport",
            "priority": "High",
            "status": "In Progress",
            "location": { "lat": 12.97, "lng": 77.59 },
            "district": "Bengaluru Urban",
            "created_at": "2024-01-01T00:00:00Z"
        }"#;

        let complaint: Complaint = serde_json::from_str(json).unwrap();
        assert_eq!(complaint.complaint_id, "c-17");
        assert_eq!(complaint.category, Category::PublicTransport);
        assert_eq!(complaint.priority, Priority::High);
        assert_eq!(complaint.status, Status::InProgress);
        assert_eq!(complaint.location, Some(Location { lat: 12.97, lng: 77.59 }));
        assert_eq!(complaint.district.as_deref(), Some("Bengaluru Urban"));
    }

    #[test]
    fn test_complaint_optional_fields_absent() {
        let json = r#"{"complaint_id":"1","text":"Pothole","category":"Roads","priority":"Low","status":"Pending"}"#;
        let complaint: Complaint = serde_json::from_str(json).unwrap();
        assert!(complaint.location.is_none());
        assert!(complaint.district.is_none());
    }

    #[test]
    fn test_complaint_unknown_status_rejected() {
        let json = r#"{"complaint_id":"1","text":"x","category":"Roads","priority":"Low","status":"Closed"}"#;
        assert!(serde_json::from_str::<Complaint>(json).is_err());
    }

    #[test]
    fn test_stats_missing_fields_default_to_zero() {
        let stats: Stats = serde_json::from_str(r#"{"total": 4, "pending": 4}"#).unwrap();
        assert_eq!(stats, Stats { total: 4, pending: 4, in_progress: 0, resolved: 0 });
    }

    #[test]
    fn test_new_complaint_payload_shape() {
        let payload = NewComplaint {
            user_id: DEMO_USER_ID.to_string(),
            text: "No water since Monday".to_string(),
            category: Category::WasteManagement,
            priority: Priority::Medium,
            level: Level::State,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "user_id": "DEMO",
                "text": "No water since Monday",
                "category": "Waste Management",
                "priority": "Medium",
                "level": "State",
            })
        );
    }

    #[test]
    fn test_select_values_parse_back() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        for priority in Priority::ALL {
            assert_eq!(Priority::parse(priority.as_str()), Some(priority));
        }
        for level in Level::ALL {
            assert_eq!(Level::parse(level.as_str()), Some(level));
        }
        assert_eq!(Category::parse("Weather"), None);
    }

    #[test]
    fn test_numeric_id_accepted() {
        let json = r#"{"complaint_id":7,"text":"Pothole","category":"Roads","priority":"Low","status":"Pending"}"#;
        let complaint: Complaint = serde_json::from_str(json).unwrap();
        assert_eq!(complaint.complaint_id, "7");
    }

    #[test]
    fn test_unknown_category_falls_back_to_others() {
        let json = r#"{"complaint_id":"9","text":"Signal broken","category":"Traffic","priority":"High","status":"Pending"}"#;
        let complaint: Complaint = serde_json::from_str(json).unwrap();
        assert_eq!(complaint.category, Category::Others);
    }

    #[test]
    fn test_bad_row_does_not_blank_list() {
        let rows: Vec<serde_json::Value> = serde_json::from_str(
            r#"[
                {"complaint_id":"1","text":"Pothole on 5th","category":"Roads","priority":"Low","status":"Pending"},
                {"complaint_id":"2","text":"Odd one","category":"Roads","priority":"Low","status":"Closed"},
                {"complaint_id":3,"text":"Signal broken","category":"Traffic","priority":"High","status":"Resolved"}
            ]"#,
        )
        .unwrap();

        let decoded = decode_complaints(rows);
        let ids: Vec<_> = decoded.complaints.iter().map(|c| c.complaint_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(decoded.skipped.len(), 1);
        assert!(decoded.skipped[0].starts_with("row 1:"));
    }
}
