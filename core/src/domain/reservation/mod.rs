pub mod entities;
pub mod ports;
pub mod services;
pub mod slots;
pub mod value_objects;
