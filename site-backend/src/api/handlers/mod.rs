// src/api/handlers/mod.rs

pub mod auth_handler;
pub mod contact_handler;
pub mod gallery_handler;
pub mod public_handler;
pub mod service_handler;
pub mod upload_handler;
