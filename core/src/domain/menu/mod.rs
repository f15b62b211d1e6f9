pub mod assembler;
pub mod catalog;
pub mod entities;
pub mod organizer;
pub mod personalization;
pub mod ports;
pub mod services;
pub mod value_objects;
