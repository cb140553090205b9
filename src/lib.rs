#[macro_use]
extern crate log;
#[macro_use]
extern crate error_chain;

pub mod app_config;
pub mod errors;
pub mod landing;
pub mod ldapi;
pub mod rdf;
pub mod register;
pub mod renderer;
pub mod serving;
pub mod survey;
pub mod templates;
