//! Bridge from `validator` derive errors to the core error taxonomy

use rd_core::error::RdError;
use rd_core::result::RdResult;
use validator::Validate;

/// Validate an entity, reporting the first offending field as `InvalidRange`
pub fn validate_entity<T: Validate>(entity: &T) -> RdResult<()> {
    let errors = match entity.validate() {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };

    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    let (field, messages) = match fields.into_iter().next() {
        Some(entry) => entry,
        None => return Err(RdError::invalid_range("entity", "validation failed")),
    };

    let message = messages
        .first()
        .map(|e| {
            e.message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| e.code.to_string())
        })
        .unwrap_or_else(|| "invalid".to_string());

    Err(RdError::invalid_range(field, message))
}
