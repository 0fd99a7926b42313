pub mod projection;
#[cfg(feature = "visualization")]
pub mod vis2d;
