use super::ApiError;

pub fn validate_id(id: i32) -> Result<i32, ApiError> {
    if id <= 0 {
        return Err(ApiError::validation(format!(
            "Invalid ID: {}. ID must be a positive integer",
            id
        )));
    }
    Ok(id)
}

pub fn validate_slug(slug: &str) -> Result<&str, ApiError> {
    if slug.is_empty() {
        return Err(ApiError::validation("Slug cannot be empty"));
    }

    if slug.len() > 200 {
        return Err(ApiError::validation("Slug must be 200 characters or less"));
    }

    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ApiError::validation(
            "Slug can only contain lowercase letters, digits, and hyphens",
        ));
    }

    Ok(slug)
}

pub fn validate_section(section: &str) -> Result<&str, ApiError> {
    let trimmed = section.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation("Section cannot be empty"));
    }

    if trimmed.len() > 50 {
        return Err(ApiError::validation(
            "Section must be 50 characters or less",
        ));
    }

    Ok(trimmed)
}

pub fn validate_required(value: &str, field: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{} is required", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_id() {
        assert!(validate_id(1).is_ok());
        assert!(validate_id(12345).is_ok());
        assert!(validate_id(0).is_err());
        assert!(validate_id(-1).is_err());
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("my-first-post").is_ok());
        assert!(validate_slug("post-2024").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Has Spaces").is_err());
        assert!(validate_slug("UPPER").is_err());
        assert!(validate_slug(&"a".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_section() {
        assert!(validate_section("hero").is_ok());
        assert!(validate_section("  about ").is_ok());
        assert!(validate_section("").is_err());
        assert!(validate_section("   ").is_err());
    }
}
