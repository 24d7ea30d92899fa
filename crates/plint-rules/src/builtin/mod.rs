//! Built-in rule implementations

pub mod redundant_override;
