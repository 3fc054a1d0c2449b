//! Handlers for the `/listings` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use farrowgate_core::error::CoreError;
use farrowgate_core::types::DbId;
use farrowgate_db::models::listing::{CreateListing, Listing, ListingQuery, UpdateListing};
use farrowgate_db::repositories::{ListingRepo, PigRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireSales;
use crate::state::AppState;

/// POST /api/v1/listings
///
/// List a pig for sale. The partial unique index on active listings
/// turns a second active listing for the same pig into a 409.
pub async fn create(
    RequireSales(staff): RequireSales,
    State(state): State<AppState>,
    Json(input): Json<CreateListing>,
) -> AppResult<(StatusCode, Json<Listing>)> {
    if input.weight_kg <= 0.0 {
        return Err(AppError::Core(CoreError::Validation(
            "Weight must be positive".into(),
        )));
    }

    PigRepo::find_by_id(&state.pool, input.pig_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Pig",
            id: input.pig_id,
        }))?;

    let listing = ListingRepo::create(&state.pool, &input, staff.user_id).await?;
    tracing::info!(listing_id = listing.id, pig_id = listing.pig_id, "Listing created");
    Ok((StatusCode::CREATED, Json(listing)))
}

/// GET /api/v1/listings
///
/// Browsable by any authenticated user; clients use this to pick pigs
/// for a booking.
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(filter): Query<ListingQuery>,
) -> AppResult<Json<Vec<Listing>>> {
    let listings = ListingRepo::list(&state.pool, &filter).await?;
    Ok(Json(listings))
}

/// GET /api/v1/listings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Listing>> {
    let listing = ListingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Listing",
            id,
        }))?;
    Ok(Json(listing))
}

/// PUT /api/v1/listings/{id}
///
/// Staff correction endpoint. Lifecycle transitions normally happen
/// inside the booking decision and sale finalization transactions;
/// manual status edits here cover data fixes (e.g. `removed`).
///
/// `sold` and `removed` are terminal for a row; a status edit out of
/// either is a 409. Relisting the pig goes through `POST /listings`.
pub async fn update(
    RequireSales(_staff): RequireSales,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateListing>,
) -> AppResult<Json<Listing>> {
    if let Some(weight) = input.weight_kg {
        if weight <= 0.0 {
            return Err(AppError::Core(CoreError::Validation(
                "Weight must be positive".into(),
            )));
        }
    }

    let Some(listing) = ListingRepo::update(&state.pool, id, &input).await? else {
        // The update matches no row when the id is unknown, but also
        // when the requested status change would pull a sold/removed
        // listing back into circulation. Tell those apart.
        return if ListingRepo::find_by_id(&state.pool, id).await?.is_some() {
            Err(AppError::Core(CoreError::Conflict(
                "Sold or removed listings cannot be reactivated. Create a new listing instead."
                    .into(),
            )))
        } else {
            Err(AppError::Core(CoreError::NotFound {
                entity: "Listing",
                id,
            }))
        };
    };
    Ok(Json(listing))
}
