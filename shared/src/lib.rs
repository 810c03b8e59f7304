use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An expense as stored by the surrounding application.
///
/// The dialog only reads these to pre-fill its fields in edit mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub description: String,
    /// Amount in currency units (Rands)
    pub amount: f64,
    /// Category label; expected to match an `ExpenseCategory` but records
    /// written by older clients may carry anything
    pub category: String,
    /// Optional image reference (URL or local content URI)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Milliseconds since the Unix epoch; only the calendar date is meaningful
    pub date: i64,
}

/// Fixed set of expense categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Transport,
    Health,
    Shopping,
    #[serde(rename = "Housing Fund")]
    HousingFund,
    #[serde(rename = "Emergency Fund")]
    EmergencyFund,
    Bills,
    Entertainment,
    Utilities,
    Other,
}

impl ExpenseCategory {
    /// All categories in the order the selector shows them
    pub const ALL: [ExpenseCategory; 10] = [
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Health,
        ExpenseCategory::Shopping,
        ExpenseCategory::HousingFund,
        ExpenseCategory::EmergencyFund,
        ExpenseCategory::Bills,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Utilities,
        ExpenseCategory::Other,
    ];

    /// Human-readable label, also the stored text form
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Health => "Health",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::HousingFund => "Housing Fund",
            ExpenseCategory::EmergencyFund => "Emergency Fund",
            ExpenseCategory::Bills => "Bills",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Other => "Other",
        }
    }

    /// Category at `index` in the selector
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl Default for ExpenseCategory {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category text that does not name any `ExpenseCategory`
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown expense category: '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for ExpenseCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|category| category.label() == s)
            .copied()
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Record handed to the save callback when the expense form is confirmed.
///
/// Serializes to the same key set the storage layer expects:
/// `description`, `amount`, `category`, `date`, `userId` and, only when an
/// image was chosen, `imageUrl`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePayload {
    pub description: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    /// Local midnight of the selected calendar date, ms since the Unix epoch
    pub date: i64,
    /// Signed-in user, empty when nobody is signed in
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ExpensePayload {
    /// Convert the payload back into a stored record (the user id is dropped)
    pub fn to_record(&self) -> ExpenseRecord {
        ExpenseRecord {
            description: self.description.clone(),
            amount: self.amount,
            category: self.category.label().to_string(),
            image_url: self.image_url.clone(),
            date: self.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_and_labels() {
        let labels: Vec<&str> = ExpenseCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Food",
                "Transport",
                "Health",
                "Shopping",
                "Housing Fund",
                "Emergency Fund",
                "Bills",
                "Entertainment",
                "Utilities",
                "Other",
            ]
        );
        assert_eq!(ExpenseCategory::default(), ExpenseCategory::Food);
    }

    #[test]
    fn test_category_index_lookup() {
        for (i, category) in ExpenseCategory::ALL.iter().enumerate() {
            assert_eq!(ExpenseCategory::from_index(i), Some(*category));
        }
        assert_eq!(ExpenseCategory::from_index(10), None);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("Housing Fund".parse::<ExpenseCategory>(), Ok(ExpenseCategory::HousingFund));
        assert_eq!("Bills".parse::<ExpenseCategory>(), Ok(ExpenseCategory::Bills));

        let err = "Groceries".parse::<ExpenseCategory>().unwrap_err();
        assert_eq!(err, UnknownCategory("Groceries".to_string()));
        // Labels are matched exactly
        assert!("food".parse::<ExpenseCategory>().is_err());
    }

    #[test]
    fn test_category_serializes_as_label() {
        for category in ExpenseCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
            let back: ExpenseCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
    }

    #[test]
    fn test_payload_keys_without_image() {
        let payload = ExpensePayload {
            description: "Taxi".to_string(),
            amount: 80.0,
            category: ExpenseCategory::Transport,
            date: 1_700_000_000_000,
            user_id: String::new(),
            image_url: None,
        };

        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(|k| k.as_str()).collect();
        keys.sort();
        assert_eq!(keys, vec!["amount", "category", "date", "description", "userId"]);
        assert_eq!(object["category"], "Transport");
        assert_eq!(object["userId"], "");
    }

    #[test]
    fn test_payload_keys_with_image() {
        let payload = ExpensePayload {
            description: "Coffee".to_string(),
            amount: 45.5,
            category: ExpenseCategory::Food,
            date: 0,
            user_id: "uid-1".to_string(),
            image_url: Some("http://x/y.png".to_string()),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["imageUrl"], "http://x/y.png");
        assert_eq!(value["userId"], "uid-1");
        assert_eq!(value["amount"], 45.5);
    }

    #[test]
    fn test_record_deserializes_without_image() {
        let json = r#"{"description":"Rent","amount":5000.0,"category":"Housing Fund","date":1700000000000}"#;
        let record: ExpenseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.image_url, None);
        assert_eq!(record.category, "Housing Fund");
    }

    #[test]
    fn test_payload_to_record() {
        let payload = ExpensePayload {
            description: "Electricity".to_string(),
            amount: 650.25,
            category: ExpenseCategory::Utilities,
            date: 86_400_000,
            user_id: "uid-9".to_string(),
            image_url: None,
        };

        let record = payload.to_record();
        assert_eq!(record.description, "Electricity");
        assert_eq!(record.amount, 650.25);
        assert_eq!(record.category, "Utilities");
        assert_eq!(record.date, 86_400_000);
        assert_eq!(record.image_url, None);
    }
}
