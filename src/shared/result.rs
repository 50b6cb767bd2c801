/// Type alias for Result with anyhow::Error as the error type.
/// Every layer propagates through this alias so context can be attached with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
