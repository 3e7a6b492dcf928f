pub mod api;
mod dtos;
pub(crate) mod errors;
mod healthz_handler;
mod todos_handler;
