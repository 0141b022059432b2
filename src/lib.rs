//! Multilingual community website for the Neusatz NGO.

pub mod assistant;
pub mod config;
pub mod content;
pub mod error;
pub mod extractors;
pub mod feed;
pub mod i18n;
pub mod routes;
pub mod seo;
pub mod sitemap;
pub mod state;
