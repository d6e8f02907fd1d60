// src/repository/mod.rs

pub mod contact_repository;
pub mod gallery_repository;
pub mod service_repository;
