//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does not
//! meet the minimum requirement. Use these in route handlers to enforce
//! authorization at the type level. Admin passes every staff check.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use farrowgate_core::error::CoreError;
use farrowgate_core::roles::{
    ROLE_ADMIN, ROLE_CARETAKER, ROLE_CLIENT, ROLE_PROCUREMENT, ROLE_SALES,
};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}

/// Requires `sales` or `admin` role. Rejects with 403 Forbidden otherwise.
///
/// Gates listing management, booking decisions, and sale recording.
pub struct RequireSales(pub AuthUser);

impl FromRequestParts<AppState> for RequireSales {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_ADMIN && user.role != ROLE_SALES {
            return Err(AppError::Core(CoreError::Forbidden(
                "Sales or Admin role required".into(),
            )));
        }
        Ok(RequireSales(user))
    }
}

/// Requires `caretaker` or `admin` role. Gates husbandry records
/// (litters, feeding logs, health records).
pub struct RequireCaretaker(pub AuthUser);

impl FromRequestParts<AppState> for RequireCaretaker {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_ADMIN && user.role != ROLE_CARETAKER {
            return Err(AppError::Core(CoreError::Forbidden(
                "Caretaker or Admin role required".into(),
            )));
        }
        Ok(RequireCaretaker(user))
    }
}

/// Requires `procurement` or `admin` role. Gates supply stock management.
pub struct RequireProcurement(pub AuthUser);

impl FromRequestParts<AppState> for RequireProcurement {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_ADMIN && user.role != ROLE_PROCUREMENT {
            return Err(AppError::Core(CoreError::Forbidden(
                "Procurement or Admin role required".into(),
            )));
        }
        Ok(RequireProcurement(user))
    }
}

/// Requires any staff role (anything except `client`).
///
/// Gates read access to cross-client data such as all bookings or
/// the receipt list.
pub struct RequireStaff(pub AuthUser);

impl FromRequestParts<AppState> for RequireStaff {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role == ROLE_CLIENT {
            return Err(AppError::Core(CoreError::Forbidden(
                "Staff role required".into(),
            )));
        }
        Ok(RequireStaff(user))
    }
}
