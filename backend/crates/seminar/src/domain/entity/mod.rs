//! Entity Module

pub mod seminar;
