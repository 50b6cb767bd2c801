/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the maintenance services and reaches the outside
/// world only through the outbound ports.
pub mod dto;
pub mod use_cases;
