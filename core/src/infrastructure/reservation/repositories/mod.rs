pub mod reservation_repository;
