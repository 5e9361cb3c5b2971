use validator::ValidationError;

use crate::error::WheelError;

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("blank_name"));
    }
    Ok(())
}

/// Trims editor input, returning `None` when nothing is left to add.
pub fn normalize_name(raw: &str) -> Option<String> {
    let name = raw.trim();
    validate_name(name).ok()?;
    Some(name.to_string())
}

/// Checks every label of a list, reporting the first blank one.
pub fn validate_names(names: &[String]) -> Result<(), WheelError> {
    match names.iter().position(|name| validate_name(name).is_err()) {
        Some(index) => Err(WheelError::InvalidName { index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_names_rejected() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name("Joueur 1").is_ok());
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize_name("  Ada \n"), Some("Ada".to_string()));
        assert_eq!(normalize_name("\t"), None);
    }

    #[test]
    fn test_list_reports_first_blank() {
        let names = vec!["A".to_string(), " ".to_string(), "".to_string()];
        assert_eq!(validate_names(&names), Err(WheelError::InvalidName { index: 1 }));
        assert_eq!(validate_names(&[]), Ok(()));
        assert_eq!(validate_names(&["A".to_string(), "A".to_string()]), Ok(()));
    }
}
