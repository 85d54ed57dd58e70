pub mod admin;
pub mod form;
pub mod health;
pub mod home;
