pub mod poem_service;
