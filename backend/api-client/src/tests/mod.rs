mod auth;
mod decode;
mod observability;
mod sentinel;
