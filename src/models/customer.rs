use serde::{Deserialize, Serialize};

/// Free-text contact details collected on the last wizard step. Nothing is
/// validated until submit; name, email and phone must then be non-blank.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
}

impl CustomerDetails {
    /// First required field that is empty or whitespace-only, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("name")
        } else if self.email.trim().is_empty() {
            Some("email")
        } else if self.phone.trim().is_empty() {
            Some("phone")
        } else {
            None
        }
    }
}
