//! Entity CRUD surfaces, one module per backend route family.

pub mod company;
pub mod customer;
pub mod doctor;
pub mod medicine;
pub mod patient;
pub mod supplier;
pub mod user;
