pub mod overpass_client;

pub use overpass_client::OverpassRestaurantImporter;
