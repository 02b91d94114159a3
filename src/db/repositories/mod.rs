mod appointment_repository;
mod service_repository;
mod settings_repository;
mod time_block_repository;
mod user_repository;

pub use appointment_repository::AppointmentRepository;
pub use service_repository::ServiceRepository;
pub use settings_repository::SettingsRepository;
pub use time_block_repository::TimeBlockRepository;
pub use user_repository::UserRepository;
