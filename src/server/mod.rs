//! # Módulo Server
//!
//! Capa de conexiones del servidor de demostración: listener TCP,
//! un thread por conexión, y el ciclo parse → route → handle → write
//! sobre la capa de mensajes de [`http`](crate::http).

pub mod tcp;

pub use tcp::Server;
