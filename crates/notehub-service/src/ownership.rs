//! Ownership guard applied before every mutating or detail-view operation.

use uuid::Uuid;

use notehub_core::error::AppError;
use notehub_core::result::AppResult;

use crate::context::RequestContext;

/// Ensures the acting user owns the target resource.
///
/// Fails with an `Authorization` error (distinct from `Authentication`)
/// when the IDs differ. Resource ids are not secrets; knowing one must
/// never grant access.
pub fn ensure_owner(resource_owner_id: Uuid, ctx: &RequestContext) -> AppResult<()> {
    if resource_owner_id != ctx.user_id {
        return Err(AppError::authorization(
            "You do not have access to this resource",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use notehub_core::error::ErrorKind;

    fn ctx(user_id: Uuid) -> RequestContext {
        RequestContext::new(
            user_id,
            Uuid::new_v4(),
            "a@x.com".to_string(),
            "Alice".to_string(),
        )
    }

    #[test]
    fn test_owner_passes() {
        let user_id = Uuid::new_v4();
        assert!(ensure_owner(user_id, &ctx(user_id)).is_ok());
    }

    #[test]
    fn test_non_owner_is_rejected_with_authorization() {
        let err = ensure_owner(Uuid::new_v4(), &ctx(Uuid::new_v4())).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }
}
