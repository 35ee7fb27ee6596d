pub mod appointment_repository;
pub mod pet_repository;
pub mod role_repository;
pub mod user_repository;
pub mod vaccination_repository;
