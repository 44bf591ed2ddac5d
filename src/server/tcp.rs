//! # Servidor TCP
//! src/server/tcp.rs
//!
//! Accept loop que entrega cada conexión aceptada a un pool fijo de
//! workers. Si la cola del pool está llena la conexión se responde con 503
//! y se cierra en el mismo thread del accept loop.

use super::connection;
use super::pool::WorkerPool;
use crate::config::Config;
use crate::http::Response;
use crate::router::Dispatcher;
use crate::store::AppState;
use std::io::{self, BufWriter, Read};
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Tiempo máximo que el accept loop espera el request de una conexión rechazada
const REJECT_DRAIN_TIMEOUT: Duration = Duration::from_millis(100);

/// Bytes máximos que se descartan de una conexión rechazada
const REJECT_DRAIN_LIMIT: u64 = 16 * 1024;

/// Servidor HTTP con estado inyectado
pub struct Server {
    config: Config,
    listener: TcpListener,
    dispatcher: Arc<Dispatcher>,
}

impl Server {
    /// Hace bind en `config.address()`
    ///
    /// El puerto 0 elige uno libre; ver `local_addr`.
    pub fn bind(config: Config, state: Arc<AppState>) -> io::Result<Self> {
        let listener = TcpListener::bind(config.address())?;
        let dispatcher = Arc::new(Dispatcher::new(state, &config.webapp_dir));

        Ok(Self {
            config,
            listener,
            dispatcher,
        })
    }

    /// Dirección real en la que quedó escuchando
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Acepta conexiones para siempre
    ///
    /// Solo retorna si no se pudo lanzar el pool de workers.
    pub fn run(self) -> io::Result<()> {
        let dispatcher = Arc::clone(&self.dispatcher);
        let pool = WorkerPool::new(
            self.config.workers,
            self.config.queue_capacity,
            move |stream: TcpStream| connection::serve(stream, &dispatcher),
        )?;

        info!(
            address = %self.local_addr()?,
            workers = pool.size(),
            queue_capacity = self.config.queue_capacity,
            asset_root = %self.config.webapp_dir.display(),
            "servidor escuchando"
        );

        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => {
                    if let Err(stream) = pool.submit(stream) {
                        self.reject(stream, pool.queued());
                    }
                }
                Err(e) => {
                    error!(error = %e, "error al aceptar conexión");
                }
            }
        }

        Ok(())
    }

    /// Responde 503 a una conexión que no entró en la cola
    ///
    /// Después de escribir se cierra la mitad de escritura y se descarta el
    /// request pendiente: si quedan bytes sin leer al cerrar, el kernel
    /// manda RST y el cliente pierde el 503.
    fn reject(&self, stream: TcpStream, queued: usize) {
        warn!(
            peer = ?stream.peer_addr().ok(),
            queued,
            queue_capacity = self.config.queue_capacity,
            "cola llena, rechazando conexión"
        );

        let response = Response::service_unavailable(self.config.retry_after_secs);
        if let Err(e) = response.write_to(&mut BufWriter::new(&stream)) {
            warn!(error = %e, "no se pudo enviar el 503");
            return;
        }

        if let Err(e) = stream.shutdown(Shutdown::Write) {
            debug!(error = %e, "shutdown de escritura falló");
            return;
        }

        if let Err(e) = drain(&stream) {
            // Timeout o reset del cliente: el 503 ya salió
            debug!(error = %e, "drain de conexión rechazada interrumpido");
        }
    }
}

/// Lee y descarta lo que el cliente haya enviado, con tope de tiempo y bytes
fn drain(stream: &TcpStream) -> io::Result<u64> {
    stream.set_read_timeout(Some(REJECT_DRAIN_TIMEOUT))?;
    io::copy(&mut stream.take(REJECT_DRAIN_LIMIT), &mut io::sink())
}
