use super::error::LawyerError;
use serde::{Deserialize, Serialize};

/// Unique identifier for a lawyer
pub type LawyerId = i64;

/// A lawyer of the firm as listed in the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lawyer {
    pub id: LawyerId,
    pub name: String,
    /// Practice area, e.g. "Family Law"
    pub specialty: String,
    /// Free-text duration, e.g. "15 years"
    pub experience: String,
    /// Portrait URI
    pub image: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Mutable fields of a lawyer, used for both add and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLawyer {
    pub name: String,
    pub specialty: String,
    pub experience: String,
    pub image: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl NewLawyer {
    /// Checks the columns the directory cannot display without.
    pub fn validate(&self) -> Result<(), LawyerError> {
        let required = [
            ("name", &self.name),
            ("specialty", &self.specialty),
            ("experience", &self.experience),
            ("image", &self.image),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(LawyerError::MissingField(field));
            }
        }
        Ok(())
    }
}

impl From<Lawyer> for NewLawyer {
    fn from(lawyer: Lawyer) -> Self {
        Self {
            name: lawyer.name,
            specialty: lawyer.specialty,
            experience: lawyer.experience,
            image: lawyer.image,
            bio: lawyer.bio,
            email: lawyer.email,
            phone: lawyer.phone,
        }
    }
}
