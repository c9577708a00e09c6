//! `${VAR}` expansion in configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// A string without `${` is returned as is, so a lone `$VAR` stays literal.
/// Once `${` appears, bare `$VAR` references in the same string expand too.
/// `field` names the config key in errors.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |name| std::env::var(name).map(Some))
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

/// Expand every entry of a list field in place.
pub(crate) fn expand_env_all(values: &mut [String], field: &str) -> Result<(), ConfigError> {
    for (i, value) in values.iter_mut().enumerate() {
        *value = expand_env(value, &format!("{field}[{i}]"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_passes_through() {
        assert_eq!(expand_env("mermaid", "target.language").unwrap(), "mermaid");
        assert_eq!(expand_env("$LANG", "target.language").unwrap(), "$LANG");
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("PREWRAP_TEST_UNSET_LANGUAGE");
        }
        let value = expand_env("${PREWRAP_TEST_UNSET_LANGUAGE:-plantuml}", "target.language");
        assert_eq!(value.unwrap(), "plantuml");
    }

    #[test]
    fn test_set_variable_is_embedded() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("PREWRAP_TEST_SITE", "blog");
        }
        let value = expand_env("${PREWRAP_TEST_SITE}-diagram", "wrapper.class").unwrap();
        assert_eq!(value, "blog-diagram");
        unsafe {
            std::env::remove_var("PREWRAP_TEST_SITE");
        }
    }

    #[test]
    fn test_bare_variable_expands_alongside_braced() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("PREWRAP_TEST_BARE", "x");
        }
        assert_eq!(
            expand_env("$PREWRAP_TEST_BARE", "wrapper.class").unwrap(),
            "$PREWRAP_TEST_BARE"
        );
        assert_eq!(
            expand_env("$PREWRAP_TEST_BARE-${PREWRAP_TEST_BARE}", "wrapper.class").unwrap(),
            "x-x"
        );
        unsafe {
            std::env::remove_var("PREWRAP_TEST_BARE");
        }
    }

    #[test]
    fn test_unset_variable_names_field() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("PREWRAP_TEST_MISSING");
        }
        let err = expand_env("${PREWRAP_TEST_MISSING}", "wrapper.tag").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        let message = err.to_string();
        assert!(message.contains("wrapper.tag"));
        assert!(message.contains("PREWRAP_TEST_MISSING"));
    }

    #[test]
    fn test_list_errors_carry_index() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("PREWRAP_TEST_MISSING_STAGE");
        }
        let mut values = vec!["ok".to_owned(), "${PREWRAP_TEST_MISSING_STAGE}".to_owned()];
        let err = expand_env_all(&mut values, "pipeline.downstream").unwrap_err();
        assert!(err.to_string().contains("pipeline.downstream[1]"));
    }
}
