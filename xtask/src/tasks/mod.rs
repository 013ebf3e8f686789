pub mod dist;
pub mod doctor;
