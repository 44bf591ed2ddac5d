//! # Connection Handler
//! src/server/connection.rs
//!
//! Ciclo de vida de una conexión: leer request → dispatch → escribir
//! response → cerrar. Una sola request por conexión.
//!
//! Los streams son dueños exclusivos de este handler y se cierran al salir
//! de scope, tanto en el camino normal como en cualquier error.
//!
//! No hay timeouts de lectura: un cliente que no termina de enviar su
//! request mantiene ocupado a su worker.

use crate::http::{HttpError, RequestReader};
use crate::router::Dispatcher;
use std::io::{BufReader, BufWriter};
use std::net::TcpStream;
use std::time::Instant;
use tracing::{error, info, info_span, warn};

/// Atiende una conexión y registra cualquier error en el log
///
/// Es el borde donde terminan todos los `HttpError`: nada se propaga más
/// arriba, nada se reintenta.
pub fn serve(stream: TcpStream, dispatcher: &Dispatcher) {
    let peer = stream
        .peer_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    let span = info_span!("conn", %peer);
    let _enter = span.enter();

    if let Err(e) = handle_connection(stream, dispatcher) {
        match e {
            HttpError::Io(ref io) if io.kind() == std::io::ErrorKind::UnexpectedEof => {
                warn!(error = %e, "cliente cerró la conexión antes de tiempo");
            }
            _ => error!(error = %e, "request abortado, cerrando conexión"),
        }
    }
}

/// Lee un request del stream, lo despacha y escribe la respuesta
pub fn handle_connection(stream: TcpStream, dispatcher: &Dispatcher) -> Result<(), HttpError> {
    let start = Instant::now();

    let mut reader = RequestReader::new(BufReader::new(stream.try_clone()?));
    let request = reader.read_request()?;
    info!(method = %request.method(), target = %request.target(), "request recibido");

    let response = dispatcher.dispatch(&request)?;

    let mut writer = BufWriter::new(&stream);
    response.write_to(&mut writer)?;

    info!(
        status = response.status().as_u16(),
        latency_ms = start.elapsed().as_secs_f64() * 1000.0,
        "respuesta enviada"
    );

    Ok(())
}
