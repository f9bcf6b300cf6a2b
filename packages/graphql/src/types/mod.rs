pub mod analysis;
pub mod form_option;
pub mod profile;
pub mod recommendation;
