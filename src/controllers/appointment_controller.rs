use crate::{
    auth::auth_extractor::{ApiContext, AuthUser, RequireRole},
    error::{AppError, AppResult},
    models::{
        appointment::{
            Appointment, AppointmentScope, AppointmentStatus, AppointmentWithPet, BookingRequest,
            StatusUpdateRequest,
        },
        role_record::Role,
    },
    repositories::{
        appointment_repository::AppointmentRepository, pet_repository::PetRepository,
    },
    services::booking::BookingWizard,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use time::{Date, OffsetDateTime};

#[derive(Debug, Deserialize)]
pub struct AppointmentListQuery {
    pub scope: Option<AppointmentScope>,
}

#[utoipa::path(
    get,
    path = "/api/appointments",
    params(("scope" = Option<String>, Query, description = "upcoming, completed, missed or all")),
    responses((status = 200, description = "Appointments with their pet", body = [AppointmentWithPet])),
    security(("bearer_auth" = [])),
    tag = "Appointments"
)]
pub async fn list_appointments(
    auth_user: AuthUser,
    State(ctx): State<ApiContext>,
    Query(query): Query<AppointmentListQuery>,
) -> AppResult<Json<Vec<AppointmentWithPet>>> {
    let role = ctx.effective_role(&auth_user.user_id).await?;

    let appointments = match role {
        Role::Client => AppointmentRepository::list_for_user(&ctx.db, &auth_user.user_id).await?,
        Role::Veterinarian | Role::Admin => AppointmentRepository::list_all(&ctx.db).await?,
    };

    let scope = query.scope.unwrap_or(AppointmentScope::All);
    let today = OffsetDateTime::now_utc().date();
    let filtered = appointments
        .into_iter()
        .filter(|a| in_scope(a.date, a.status, scope, today))
        .collect();

    Ok(Json(filtered))
}

#[utoipa::path(
    post,
    path = "/api/appointments",
    request_body = BookingRequest,
    responses(
        (status = 201, description = "Appointment booked", body = Appointment),
        (status = 404, description = "Pet not found or not owned by caller", body = crate::error::ErrorResponse),
        (status = 422, description = "A booking selection is missing", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Appointments"
)]
pub async fn book_appointment(
    auth_user: AuthUser,
    State(ctx): State<ApiContext>,
    Json(data): Json<BookingRequest>,
) -> AppResult<(StatusCode, Json<Appointment>)> {
    let pet = PetRepository::get_owned(&ctx.db, &data.pet_id, &auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Pet not found".to_string()))?;

    // Walk the wizard so a request missing any selection fails the same way
    // the step-by-step flow would, before anything is written.
    let mut wizard = BookingWizard::new();
    wizard.select_pet(&pet.id);
    wizard.advance()?;
    wizard.select_type(&data.appointment_type);
    wizard.advance()?;
    wizard.select_veterinarian(&data.vet_name, &data.clinic_name);
    wizard.advance()?;
    wizard.select_slot(data.date, &data.time);
    wizard.advance()?;
    let booking = wizard.confirm()?;

    let appointment = AppointmentRepository::create(
        &ctx.db,
        &auth_user.user_id,
        &booking.pet_id,
        booking.date,
        &booking.time,
        &booking.appointment_type,
        &booking.vet_name,
        &booking.clinic_name,
        data.notes.as_deref(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

#[utoipa::path(
    patch,
    path = "/api/appointments/{id}/status",
    params(("id" = String, Path, description = "Appointment id")),
    request_body = StatusUpdateRequest,
    responses(
        (status = 200, description = "Updated appointment", body = Appointment),
        (status = 403, description = "Caller is not a veterinarian", body = crate::error::ErrorResponse),
        (status = 404, description = "No such appointment", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Appointments"
)]
pub async fn update_appointment_status(
    auth_user: AuthUser,
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
    Json(data): Json<StatusUpdateRequest>,
) -> AppResult<Json<Appointment>> {
    RequireRole::veterinarian()
        .check(&ctx, &auth_user.user_id)
        .await?;

    let completed_at = if data.status == AppointmentStatus::Completed {
        Some(OffsetDateTime::now_utc())
    } else {
        None
    };

    let appointment = AppointmentRepository::update_status(
        &ctx.db,
        &id,
        data.status,
        data.notes.as_deref(),
        completed_at,
    )
    .await?
    .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))?;

    Ok(Json(appointment))
}

fn in_scope(date: Date, status: AppointmentStatus, scope: AppointmentScope, today: Date) -> bool {
    match scope {
        AppointmentScope::All => true,
        AppointmentScope::Completed => status == AppointmentStatus::Completed,
        AppointmentScope::Upcoming => date >= today && status == AppointmentStatus::Scheduled,
        AppointmentScope::Missed => date < today && status == AppointmentStatus::Scheduled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const TODAY: Date = date!(2026 - 08 - 07);

    #[test]
    fn upcoming_keeps_scheduled_today_or_later() {
        assert!(in_scope(
            TODAY,
            AppointmentStatus::Scheduled,
            AppointmentScope::Upcoming,
            TODAY
        ));
        assert!(in_scope(
            date!(2026 - 08 - 20),
            AppointmentStatus::Scheduled,
            AppointmentScope::Upcoming,
            TODAY
        ));
        assert!(!in_scope(
            date!(2026 - 08 - 01),
            AppointmentStatus::Scheduled,
            AppointmentScope::Upcoming,
            TODAY
        ));
        assert!(!in_scope(
            date!(2026 - 08 - 20),
            AppointmentStatus::Completed,
            AppointmentScope::Upcoming,
            TODAY
        ));
    }

    #[test]
    fn missed_keeps_past_still_scheduled() {
        assert!(in_scope(
            date!(2026 - 08 - 01),
            AppointmentStatus::Scheduled,
            AppointmentScope::Missed,
            TODAY
        ));
        assert!(!in_scope(
            date!(2026 - 08 - 01),
            AppointmentStatus::Completed,
            AppointmentScope::Missed,
            TODAY
        ));
        assert!(!in_scope(
            TODAY,
            AppointmentStatus::Scheduled,
            AppointmentScope::Missed,
            TODAY
        ));
    }

    #[test]
    fn completed_ignores_dates() {
        assert!(in_scope(
            date!(2026 - 08 - 01),
            AppointmentStatus::Completed,
            AppointmentScope::Completed,
            TODAY
        ));
        assert!(!in_scope(
            date!(2026 - 08 - 01),
            AppointmentStatus::Cancelled,
            AppointmentScope::Completed,
            TODAY
        ));
    }
}
