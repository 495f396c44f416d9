pub mod analyze;
pub mod compare;
pub mod health;
pub mod home;
pub mod settings;
