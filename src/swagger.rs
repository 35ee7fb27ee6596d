use utoipa::OpenApi;

use crate::{
    controllers::{
        admin_controller::{
            DecisionRequest, __path_decide_verification, __path_list_verifications,
            __path_verification_stats,
        },
        appointment_controller::{
            __path_book_appointment, __path_list_appointments, __path_update_appointment_status,
        },
        auth_controller::{
            __path_change_password, __path_get_current_user, __path_login, __path_logout,
            __path_register,
        },
        pet_controller::{__path_create_pet, __path_delete_pet, __path_list_pets, __path_update_pet},
        role_controller::{
            __path_get_my_role, __path_list_verified_veterinarians, __path_submit_verification,
            __path_update_my_role,
        },
        vaccination_controller::{
            __path_create_vaccination, __path_delete_vaccination, __path_list_vaccinations,
            __path_update_vaccination,
        },
    },
    error::ErrorResponse,
    models::{
        appointment::{Appointment, AppointmentWithPet, BookingRequest, StatusUpdateRequest},
        auth::{AuthResponse, ChangePasswordRequest, LoginRequest, RegisterRequest, UserInfo},
        pet::{Pet, PetInput},
        role_record::{
            RoleRecord, RoleUpdateRequest, VerificationRequest, VerificationStats,
            VerificationSubmission, VerifiedVeterinarian,
        },
        vaccination::{Vaccination, VaccinationInput},
    },
};

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

#[derive(OpenApi)]
#[openapi(
    paths(
        register,
        login,
        logout,
        get_current_user,
        change_password,
        get_my_role,
        update_my_role,
        submit_verification,
        list_verified_veterinarians,
        list_verifications,
        verification_stats,
        decide_verification,
        list_pets,
        create_pet,
        update_pet,
        delete_pet,
        list_appointments,
        book_appointment,
        update_appointment_status,
        list_vaccinations,
        create_vaccination,
        update_vaccination,
        delete_vaccination
    ),
    components(
        schemas(
            LoginRequest,
            RegisterRequest,
            AuthResponse,
            UserInfo,
            ChangePasswordRequest,
            RoleRecord,
            RoleUpdateRequest,
            VerificationSubmission,
            VerificationRequest,
            VerificationStats,
            VerifiedVeterinarian,
            DecisionRequest,
            Pet,
            PetInput,
            Appointment,
            AppointmentWithPet,
            BookingRequest,
            StatusUpdateRequest,
            Vaccination,
            VaccinationInput,
            ErrorResponse
        )
    ),
    tags(
        (name = "Authentication", description = "User authentication and registration endpoints"),
        (name = "Roles", description = "Role records and veterinarian credential verification"),
        (name = "Admin", description = "Verification review for administrators"),
        (name = "Pets", description = "Pet profiles"),
        (name = "Appointments", description = "Appointment booking and queue management"),
        (name = "Vaccinations", description = "Vaccination records per pet")
    ),
    modifiers(&SecurityAddon),
    info(
        title = "PawCare API",
        version = "1.0.0",
        description = "API for managing pets, appointments, vaccinations and veterinarian credential verification",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:4000", description = "Local development server"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token in the format: Bearer <token>"))
                        .build(),
                ),
            )
        }
    }
}
