// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod courier_service;

#[cfg(test)]
mod courier_service_tests;

pub use courier_service::{BookCourierRequest, CourierService};
