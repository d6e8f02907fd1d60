// src/domain/mod.rs

pub mod contact_message_model;
pub mod gallery_category;
pub mod gallery_item_model;
pub mod service_model;
