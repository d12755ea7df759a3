//! URL template interpolation.
//!
//! Endpoint paths are kept as templates with `<name>` placeholders and
//! filled in at call time. Placeholder values are restricted to simple
//! tokens; query-string values are encoded by the HTTP layer instead.

use crate::domain::errors::{ClientError, ClientResult};

/// Fill every `<name>` placeholder in `template` from `params`.
///
/// Fails if a placeholder has no matching parameter or a value contains
/// characters outside `[A-Za-z0-9_-]`. Unused parameters are ignored.
pub fn interpolate_url(template: &str, params: &[(&str, &str)]) -> ClientResult<String> {
    let mut interpolated = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('<') {
        let Some(len) = rest[start..].find('>') else {
            return Err(ClientError::Validation(format!(
                "unterminated placeholder in URL template: {template}"
            )));
        };
        interpolated.push_str(&rest[..start]);
        let name = &rest[start + 1..start + len];
        let value = params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| {
                ClientError::Validation(format!("no value supplied for placeholder <{name}>"))
            })?;
        if !is_url_token(value) {
            return Err(ClientError::Validation(format!(
                "invalid characters in value for <{name}>: {value:?}"
            )));
        }
        interpolated.push_str(value);
        rest = &rest[start + len + 1..];
    }
    interpolated.push_str(rest);
    Ok(interpolated)
}

fn is_url_token(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
