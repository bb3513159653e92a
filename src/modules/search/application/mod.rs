pub mod domain;
pub mod ports;
pub mod search_use_cases;
pub mod service;
