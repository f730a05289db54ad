//! Shipping addresses and the per-user address book.

use crate::error::CommerceError;
use crate::ids::AddressId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A saved shipping address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: AddressId,
    pub street: String,
    pub city: String,
    pub state: String,
    /// Six-digit postal code.
    pub pincode: String,
    #[serde(default)]
    pub is_primary: bool,
}

impl Address {
    /// Format as single line.
    pub fn one_line(&self) -> String {
        format!("{}, {}, {} - {}", self.street, self.city, self.state, self.pincode)
    }
}

/// Address form data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddressDraft {
    pub street: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    #[serde(default)]
    pub is_primary: bool,
}

impl AddressDraft {
    /// Check that all fields are present and the pincode is six digits.
    pub fn validate(&self) -> Result<(), CommerceError> {
        for (field, value) in [
            ("street", &self.street),
            ("city", &self.city),
            ("state", &self.state),
            ("pincode", &self.pincode),
        ] {
            if value.trim().is_empty() {
                return Err(CommerceError::ValidationError(format!("{} is required", field)));
            }
        }
        let pincode = self.pincode.trim();
        if pincode.len() != 6 || !pincode.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CommerceError::InvalidPincode(pincode.to_string()));
        }
        Ok(())
    }

    fn into_address(self, id: AddressId) -> Address {
        Address {
            id,
            street: self.street.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            pincode: self.pincode.trim().to_string(),
            is_primary: self.is_primary,
        }
    }
}

impl From<&Address> for AddressDraft {
    fn from(address: &Address) -> Self {
        Self {
            street: address.street.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            pincode: address.pincode.clone(),
            is_primary: address.is_primary,
        }
    }
}

/// A user's addresses. At most one is primary; when the book is not
/// empty exactly one is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AddressBook {
    addresses: Vec<Address>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Address> {
        self.addresses.iter()
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn get(&self, id: &AddressId) -> Option<&Address> {
        self.addresses.iter().find(|a| &a.id == id)
    }

    pub fn primary(&self) -> Option<&Address> {
        self.addresses.iter().find(|a| a.is_primary)
    }

    /// Add an address. The first address, or one flagged primary, becomes
    /// the primary.
    pub fn add(&mut self, draft: AddressDraft) -> Result<AddressId, CommerceError> {
        draft.validate()?;
        let id = AddressId::generate();
        let make_primary = draft.is_primary || self.primary().is_none();
        let mut address = draft.into_address(id.clone());
        address.is_primary = false;
        self.addresses.push(address);
        if make_primary {
            self.mark_primary(&id);
        }
        debug!(address_id = %id, primary = make_primary, "address added");
        Ok(id)
    }

    /// Replace an address's fields. Flagging it primary moves the primary
    /// to it; clearing the flag on the current primary is ignored.
    pub fn update(&mut self, id: &AddressId, draft: AddressDraft) -> Result<(), CommerceError> {
        draft.validate()?;
        let make_primary = draft.is_primary;
        let slot = self
            .addresses
            .iter_mut()
            .find(|a| &a.id == id)
            .ok_or_else(|| CommerceError::AddressNotFound(id.to_string()))?;
        let was_primary = slot.is_primary;
        *slot = draft.into_address(id.clone());
        slot.is_primary = was_primary;
        if make_primary {
            self.mark_primary(id);
        }
        Ok(())
    }

    /// Remove an address. Removing the primary promotes the first
    /// remaining address.
    pub fn remove(&mut self, id: &AddressId) -> Result<Address, CommerceError> {
        let index = self
            .addresses
            .iter()
            .position(|a| &a.id == id)
            .ok_or_else(|| CommerceError::AddressNotFound(id.to_string()))?;
        let removed = self.addresses.remove(index);
        if removed.is_primary {
            if let Some(first) = self.addresses.first_mut() {
                first.is_primary = true;
            }
        }
        Ok(removed)
    }

    /// Make `id` the only primary address.
    pub fn set_primary(&mut self, id: &AddressId) -> Result<(), CommerceError> {
        if self.get(id).is_none() {
            return Err(CommerceError::AddressNotFound(id.to_string()));
        }
        self.mark_primary(id);
        Ok(())
    }

    fn mark_primary(&mut self, id: &AddressId) {
        for address in &mut self.addresses {
            address.is_primary = &address.id == id;
        }
    }
}

impl From<Vec<Address>> for AddressBook {
    fn from(addresses: Vec<Address>) -> Self {
        Self { addresses }
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Address;
    type IntoIter = std::slice::Iter<'a, Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.addresses.iter()
    }
}
