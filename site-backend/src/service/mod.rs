// src/service/mod.rs

pub mod auth_service;
pub mod catalog_service;
pub mod contact_service;
pub mod gallery_service;
pub mod upload_service;
