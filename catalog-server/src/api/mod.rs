//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness and component checks
//! - [`auth`] - login, registration, current user
//! - [`upload`] - image uploads (admin)
//! - [`images`] - stored image delivery
//! - [`cars`] - catalog listing and car management
//! - [`brands`] - brand lookup management
//! - [`car_models`] - model lookup management
//! - [`colors`] - color lookup management
//! - [`statuses`] - status lookup management
//! - [`banner_slides`] - hero banner slides
//! - [`banner_images`] - banner image pool
//! - [`homepage_cars`] - featured cars strip

pub mod auth;
pub mod health;
pub mod images;
pub mod upload;

// Catalog
pub mod brands;
pub mod car_models;
pub mod cars;
pub mod colors;
pub mod statuses;

// Homepage content
pub mod banner_images;
pub mod banner_slides;
pub mod homepage_cars;
