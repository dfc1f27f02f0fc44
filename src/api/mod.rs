//! Typed endpoint wrappers, one module per resource family.

mod attributes;
mod auth;
mod categories;
mod costs;
mod products;
