pub mod domains;
pub mod login;
