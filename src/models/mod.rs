pub mod appointment;
pub mod auth;
pub mod pet;
pub mod role_record;
pub mod user;
pub mod vaccination;
