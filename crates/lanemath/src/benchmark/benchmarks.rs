pub mod quaternion;
pub mod vector;
