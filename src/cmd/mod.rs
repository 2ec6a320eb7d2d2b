pub mod annotate;
pub mod overrides;
