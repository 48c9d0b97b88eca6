// Infrastructure layer - implements ports defined in the domain

pub mod db;
pub mod repositories;
