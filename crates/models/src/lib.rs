pub mod errors;
pub mod db;
pub mod wisata;
pub mod remote;
