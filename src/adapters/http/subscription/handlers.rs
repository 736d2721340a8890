//! HTTP handlers for subscription draft and field schema endpoints.

use axum::extract::{Json, Path, State};
use axum::response::IntoResponse;

use crate::application::handlers::subscription::{GetFieldSchemaQuery, RecomputeDraftCommand};
use crate::domain::fields::FieldEntity;
use crate::domain::foundation::{CalendarDate, DomainError, ErrorCode, ValidationError};

use super::super::error::ApiError;
use super::super::state::AppState;
use super::dto::{FieldSchemaResponse, RecomputeDraftRequest, RecomputeDraftResponse};

/// POST /api/subscriptions/draft - Apply form edits and recompute derived fields
pub async fn recompute_draft(
    State(state): State<AppState>,
    Json(request): Json<RecomputeDraftRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let as_of = match request.as_of.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(
            CalendarDate::parse(raw)
                .map_err(|e| ValidationError::invalid_format("as_of", e.to_string()))?,
        ),
    };

    let handler = state.recompute_draft_handler();
    let cmd = RecomputeDraftCommand {
        draft: request.draft,
        changes: request.changes,
        as_of,
    };

    let result = handler.handle(cmd).await?;

    Ok(Json(RecomputeDraftResponse::from(result)))
}

/// GET /api/fields/:entity - Configured fields for an entity
pub async fn get_field_schema(
    State(state): State<AppState>,
    Path(entity): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let entity: FieldEntity = entity
        .parse()
        .map_err(|msg: String| DomainError::new(ErrorCode::FieldSchemaNotFound, msg))?;

    let handler = state.field_schema_handler();
    let schema = handler.handle(GetFieldSchemaQuery { entity }).await?;

    Ok(Json(FieldSchemaResponse::from(schema)))
}
