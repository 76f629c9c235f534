//! Pure helpers shared by the browser client and the server.

pub mod cpf;
