pub mod admin_wheel;
pub mod results;
