//! Development seed data.
//!
//! Three named sample datasets that stand in for what the host would push.
//! They populate both the control panel's "send data" options and the
//! canned responses of the mock dispatcher. Not part of the production
//! contract.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Seed data errors
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Unknown dataset: {0} (expected currentUser, users or records)")]
    UnknownDataset(String),

    #[error("Invalid dataset file: {0}")]
    InvalidFile(#[from] serde_json::Error),
}

/// Name of one of the sample datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKey {
    CurrentUser,
    Users,
    Records,
}

impl DatasetKey {
    /// All keys, in panel order
    pub const ALL: [DatasetKey; 3] = [DatasetKey::CurrentUser, DatasetKey::Users, DatasetKey::Records];

    /// Key as it appears in the dataset file and the panel
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKey::CurrentUser => "currentUser",
            DatasetKey::Users => "users",
            DatasetKey::Records => "records",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            DatasetKey::CurrentUser => "Current User",
            DatasetKey::Users => "All Users",
            DatasetKey::Records => "Records",
        }
    }
}

impl FromStr for DatasetKey {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatasetKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| SeedError::UnknownDataset(s.to_string()))
    }
}

impl fmt::Display for DatasetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The bundle of sample datasets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockDataset {
    pub users: Value,
    pub current_user: Value,
    pub records: Value,
}

impl MockDataset {
    /// Parses a dataset bundle from JSON text
    ///
    /// The text must be an object with `users`, `currentUser` and `records`.
    pub fn from_json(text: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Returns the dataset for a key
    pub fn get(&self, key: DatasetKey) -> &Value {
        match key {
            DatasetKey::CurrentUser => &self.current_user,
            DatasetKey::Users => &self.users,
            DatasetKey::Records => &self.records,
        }
    }
}

impl Default for MockDataset {
    fn default() -> Self {
        Self {
            users: json!([
                { "id": 1, "name": "John Doe", "email": "john@example.com", "role": "Admin" },
                { "id": 2, "name": "Jane Smith", "email": "jane@example.com", "role": "User" },
                { "id": 3, "name": "Bob Johnson", "email": "bob@example.com", "role": "User" }
            ]),
            current_user: json!({
                "id": 1,
                "name": "John Doe",
                "permissions": ["read", "write", "delete"]
            }),
            records: json!([
                { "recordId": 101, "title": "Project Alpha", "status": "Active", "date": "2025-10-01" },
                { "recordId": 102, "title": "Project Beta", "status": "Pending", "date": "2025-10-05" },
                { "recordId": 103, "title": "Project Gamma", "status": "Completed", "date": "2025-09-28" }
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dataset_contents() {
        let data = MockDataset::default();
        assert_eq!(data.users.as_array().unwrap().len(), 3);
        assert_eq!(data.current_user["name"], "John Doe");
        assert_eq!(data.records[2]["title"], "Project Gamma");
    }

    #[test]
    fn test_dataset_key_parsing() {
        assert_eq!("currentUser".parse::<DatasetKey>().unwrap(), DatasetKey::CurrentUser);
        assert_eq!("users".parse::<DatasetKey>().unwrap(), DatasetKey::Users);
        assert!(matches!(
            "Users".parse::<DatasetKey>(),
            Err(SeedError::UnknownDataset(_))
        ));
    }

    #[test]
    fn test_get_by_key() {
        let data = MockDataset::default();
        assert_eq!(data.get(DatasetKey::Records), &data.records);
        assert_eq!(data.get(DatasetKey::CurrentUser)["id"], 1);
    }

    #[test]
    fn test_from_json() {
        let data = MockDataset::from_json(
            r#"{"users": [], "currentUser": {"id": 9}, "records": [{"recordId": 1}]}"#,
        )
        .unwrap();
        assert_eq!(data.current_user["id"], 9);
        assert_eq!(data.records[0]["recordId"], 1);
    }

    #[test]
    fn test_from_json_missing_field() {
        let result = MockDataset::from_json(r#"{"users": []}"#);
        assert!(matches!(result, Err(SeedError::InvalidFile(_))));
    }
}
