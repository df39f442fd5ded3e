use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub registration: String,
    pub make: String,
    pub model: String,
    pub year: String,
    pub fuel_type: String,
}

impl VehicleRecord {
    /// Display form used in booking rows, e.g. "Ford Focus (2018)".
    pub fn details(&self) -> String {
        format!("{} {} ({})", self.make, self.model, self.year)
    }
}

/// Canonical form of a registration plate: uppercased, all whitespace removed.
/// Directory lookups and customer input are normalized through here.
pub fn normalize_registration(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercase() {
        assert_eq!(normalize_registration("ab12cde"), "AB12CDE");
    }

    #[test]
    fn test_normalize_strips_whitespace() {
        assert_eq!(normalize_registration(" AB12 CDE "), "AB12CDE");
        assert_eq!(normalize_registration("ab\t12\ncde"), "AB12CDE");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_registration("   "), "");
    }

    #[test]
    fn test_details() {
        let v = VehicleRecord {
            registration: "AB12CDE".to_string(),
            make: "Ford".to_string(),
            model: "Focus".to_string(),
            year: "2018".to_string(),
            fuel_type: "Petrol".to_string(),
        };
        assert_eq!(v.details(), "Ford Focus (2018)");
    }
}
