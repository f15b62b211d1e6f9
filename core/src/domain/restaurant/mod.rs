pub mod entities;
pub mod ports;
pub mod services;
pub mod tag_seeder;
pub mod value_objects;
