// src/api/dto/mod.rs

pub mod auth_dto;
pub mod common;
pub mod contact_dto;
pub mod gallery_dto;
pub mod service_dto;
pub mod upload_dto;
