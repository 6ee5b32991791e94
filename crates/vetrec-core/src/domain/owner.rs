//! Owner domain types.
//!
//! These types represent owner records in the system, independent of any
//! infrastructure concerns (database, transport, etc.).

use serde::{Deserialize, Serialize};

/// An owner record that exists in the system with a database ID.
///
/// This represents a persisted owner with all its fields.
/// Use `NewOwner` for owners that haven't been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    /// Database ID of the owner (always present for persisted owners).
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name. Name search matches against this field first.
    pub last_name: String,
    /// Street address.
    pub address: String,
    /// City of residence.
    pub city: String,
    /// Telephone number, digits only.
    pub telephone: String,
}

/// An owner record to be inserted into the system (no ID yet).
///
/// After insertion, the repository returns an `Owner` with the
/// assigned ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOwner {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

impl Owner {
    /// Convert this owner to a `NewOwner` (drops the ID).
    #[must_use]
    pub fn to_new_owner(&self) -> NewOwner {
        NewOwner {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            telephone: self.telephone.clone(),
        }
    }
}
