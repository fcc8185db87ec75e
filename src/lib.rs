pub mod configuration;
pub mod controller;
pub mod error_handling;
pub mod generation;
pub mod storage;
pub mod story_management;
pub mod web_interface;
