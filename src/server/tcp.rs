//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP que maneja múltiples conexiones
//! simultáneas usando threads. Cada conexión se procesa en su propio
//! thread: parse → resolve → handler → write, y se cierra.
//!
//! El router se congela antes de aceptar conexiones, así que los threads
//! lo comparten dentro de un `Arc` sin ningún lock.

use crate::config::Config;
use crate::http::{headers, parser, status, ParseError, Request, Response};
use crate::router::{MatchError, Router};
use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Servidor HTTP/1.x concurrente
pub struct Server {
    config: Config,
    router: Arc<Router>,
    listener: Option<TcpListener>,
}

impl Server {
    /// Crea un servidor con la configuración y el router dados
    pub fn new(config: Config, router: Router) -> Self {
        Self {
            config,
            router: Arc::new(router),
            listener: None,
        }
    }

    /// Hace bind del listener sin empezar a aceptar conexiones
    ///
    /// Con puerto 0 el sistema asigna un puerto efímero, que luego puede
    /// consultarse con [`local_addr`](Server::local_addr). Útil para tests.
    pub fn bind(&mut self) -> std::io::Result<()> {
        if self.listener.is_none() {
            self.listener = Some(TcpListener::bind(self.config.address())?);
        }
        Ok(())
    }

    /// Dirección real en la que escucha el listener (si ya hubo bind)
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.listener.as_ref().and_then(|l| l.local_addr().ok())
    }

    /// Acepta conexiones indefinidamente, una por thread
    pub fn run(&mut self) -> std::io::Result<()> {
        self.bind()?;
        let listener = self.listener.as_ref().unwrap();

        println!("[+] Servidor escuchando en {}", self.config.address());
        println!("[*] Modo concurrente: un thread por conexion\n");

        let read_timeout = self.config.read_timeout();
        let write_timeout = self.config.write_timeout();

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);
                    let peer_addr = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());

                    thread::spawn(move || {
                        if let Err(e) =
                            Self::handle_connection(stream, router, read_timeout, write_timeout)
                        {
                            eprintln!("[-] Error atendiendo a {}: {}", peer_addr, e);
                        }
                    });
                }
                Err(e) => {
                    eprintln!("[-] Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Atiende una conexión completa: un request, una response, cerrar
    fn handle_connection(
        stream: TcpStream,
        router: Arc<Router>,
        read_timeout: Option<Duration>,
        write_timeout: Option<Duration>,
    ) -> std::io::Result<()> {
        stream.set_read_timeout(read_timeout)?;
        stream.set_write_timeout(write_timeout)?;

        let mut reader = BufReader::new(stream.try_clone()?);

        // Conexión cerrada sin mandar nada: no hay request que atender
        if reader.fill_buf()?.is_empty() {
            return Ok(());
        }

        let mut response = match parser::parse_request(&mut reader) {
            Ok(mut request) => {
                println!("[*] {} {}", request.method(), request.path());
                Self::dispatch(&router, &mut request)
            }
            // Fallas de I/O del socket no son errores de protocolo
            Err(ParseError::Io(e)) => return Err(e),
            Err(e) => {
                println!("[-] Request inválido: {}", e);
                Response::error(status::BAD_REQUEST, &format!("Invalid request: {}", e))
            }
        };

        response.add_header(headers::CONNECTION, "close");

        let mut stream = stream;
        response.write(&mut stream)?;
        stream.flush()?;

        println!(
            "[*] {} {}",
            response.status(),
            status::reason_phrase(response.status())
        );

        Ok(())
    }

    /// Resuelve el request y ejecuta su handler, o arma la respuesta de miss
    fn dispatch(router: &Router, request: &mut Request) -> Response {
        match router.resolve(request.method(), request.path()) {
            Ok(route_match) => {
                request.set_params(route_match.params);
                let mut response = Response::new(status::OK);
                (route_match.handler)(request, &mut response);
                response
            }
            Err(MatchError::NotFound) => Response::error(
                status::NOT_FOUND,
                &format!("Route not found: {}", request.path()),
            ),
            Err(MatchError::MethodNotAllowed { allowed }) => {
                let methods: Vec<&str> = allowed.iter().map(|m| m.as_str()).collect();
                let mut response = Response::error(
                    status::METHOD_NOT_ALLOWED,
                    &format!("Method {} not allowed", request.method()),
                );
                response.add_header(headers::ALLOW, &methods.join(", "));
                response
            }
        }
    }
}
