//! DTO modules that bridge the controller with whatever renders the screen.

pub mod client_list;
