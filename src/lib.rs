//! FLAIM nutrition normalization library
//!
//! Converts free-text nutrient values scraped from grocery retailers into
//! canonical grams, daily-value fractions and calories.

pub mod config;
pub mod loaders;
pub mod models;
pub mod nutrition;
