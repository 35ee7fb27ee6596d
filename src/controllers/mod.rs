pub mod admin_controller;
pub mod appointment_controller;
pub mod auth_controller;
pub mod pet_controller;
pub mod role_controller;
pub mod vaccination_controller;
