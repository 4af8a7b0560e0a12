pub mod errorhandler;
pub mod response;
