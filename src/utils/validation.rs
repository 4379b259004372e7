// utils/validation.rs
use crate::utils::error::Result;
use validator::{Validate, ValidationError};

/// Règle custom pour `#[validate(custom = "validate_model_year")]` : l'année est requise
pub fn validate_model_year(year: i32) -> std::result::Result<(), ValidationError> {
    if year == 0 {
        let mut error = ValidationError::new("required");
        error.message = Some("Year is required".into());
        return Err(error);
    }
    Ok(())
}

/// Fonction utilitaire pour valider un objet Validate
pub fn validate_object<T: Validate>(obj: &T) -> Result<()> {
    obj.validate()?;
    Ok(())
}
