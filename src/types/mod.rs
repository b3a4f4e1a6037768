// Types layer - database entities and API DTOs

pub mod db;
pub mod dto;
