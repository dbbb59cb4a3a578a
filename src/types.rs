//! Shared types for the pet store UI
//!
//! The pet record mirrors what the minting service receives on submit.

use serde::Deserialize;

/// Generic API response wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[allow(dead_code)]
    pub data: Option<T>,
    pub error: Option<String>,
}

/// User-entered pet attributes collected by the mint form.
///
/// Every update produces a fresh value; the form replaces its copy wholesale
/// rather than mutating slots in place. Slots that were never touched stay
/// `None` all the way to the minting service.
#[derive(Clone, Debug, Default)]
pub struct Pet {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub age: Option<String>,
    /// Image chosen by the file selector widget.
    pub file: Option<web_sys::File>,
}

/// A text slot of the mint form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PetField {
    Name,
    Breed,
    Age,
}

impl Pet {
    /// Returns a copy with `field` set to `value` and everything else untouched.
    ///
    /// Values are stored exactly as the input widgets hand them over; the age
    /// select yields `"7"`, not `7`, and no trimming or coercion happens here.
    pub fn with_field(&self, field: PetField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            PetField::Name => next.name = Some(value),
            PetField::Breed => next.breed = Some(value),
            PetField::Age => next.age = Some(value),
        }
        next
    }

    /// Returns a copy with the image slot replaced.
    pub fn with_file(&self, file: web_sys::File) -> Self {
        let mut next = self.clone();
        next.file = Some(file);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_field_replaces_only_the_named_slot() {
        let pet = Pet::default()
            .with_field(PetField::Name, "Max".to_string())
            .with_field(PetField::Breed, "Bulldog".to_string());

        let updated = pet.with_field(PetField::Age, "3".to_string());

        assert_eq!(updated.name.as_deref(), Some("Max"));
        assert_eq!(updated.breed.as_deref(), Some("Bulldog"));
        assert_eq!(updated.age.as_deref(), Some("3"));
        // the prior value is untouched
        assert_eq!(pet.age, None);
    }

    #[test]
    fn age_is_kept_as_the_raw_string() {
        let pet = Pet::default().with_field(PetField::Age, "7".to_string());
        assert_eq!(pet.age.as_deref(), Some("7"));
    }

    #[test]
    fn repeated_updates_overwrite_the_same_slot() {
        let pet = Pet::default()
            .with_field(PetField::Breed, "Labrador".to_string())
            .with_field(PetField::Breed, "Poodle".to_string());
        assert_eq!(pet.breed.as_deref(), Some("Poodle"));
    }

    #[test]
    fn empty_pet_has_no_slots_set() {
        let pet = Pet::default();
        assert!(pet.name.is_none());
        assert!(pet.breed.is_none());
        assert!(pet.age.is_none());
        assert!(pet.file.is_none());
    }
}
