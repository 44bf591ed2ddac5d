//! # Pool de Workers
//! src/server/pool.rs
//!
//! Un número fijo de threads consume trabajos de una cola acotada.
//! Cuando la cola está llena, `submit` devuelve el trabajo al que llamó para
//! que decida qué hacer (el servidor responde 503 y cierra).
//!
//! ```text
//! accept loop ──submit──▶ [ cola acotada ] ──dequeue──▶ worker 0..N
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use tracing::{debug, error};

struct QueueState<T> {
    items: VecDeque<T>,
    closed: bool,
}

/// Cola FIFO acotada y bloqueante
pub struct BoundedQueue<T> {
    state: Mutex<QueueState<T>>,

    /// Notifica a los workers cuando hay trabajo o la cola se cerró
    condvar: Condvar,

    max_capacity: usize,
}

impl<T> BoundedQueue<T> {
    pub fn new(max_capacity: usize) -> Self {
        Self {
            state: Mutex::new(QueueState {
                items: VecDeque::with_capacity(max_capacity),
                closed: false,
            }),
            condvar: Condvar::new(),
            max_capacity,
        }
    }

    fn lock(&self) -> MutexGuard<'_, QueueState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Encola un trabajo
    ///
    /// Retorna `Err(item)` si la cola está llena o cerrada.
    pub fn push(&self, item: T) -> Result<(), T> {
        let mut state = self.lock();

        if state.closed || state.items.len() >= self.max_capacity {
            return Err(item);
        }

        state.items.push_back(item);

        // Notificar a un worker esperando
        self.condvar.notify_one();
        Ok(())
    }

    /// Desencola el siguiente trabajo
    ///
    /// Bloquea hasta que haya uno; `None` cuando la cola se cerró y ya no
    /// quedan trabajos pendientes.
    pub fn pop(&self) -> Option<T> {
        let mut state = self.lock();

        loop {
            if let Some(item) = state.items.pop_front() {
                return Some(item);
            }
            if state.closed {
                return None;
            }
            state = self
                .condvar
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Cierra la cola y despierta a todos los workers
    pub fn close(&self) {
        self.lock().closed = true;
        self.condvar.notify_all();
    }

    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg(test)]
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }
}

/// Pool de threads que procesan trabajos de tipo `T`
pub struct WorkerPool<T: Send + 'static> {
    queue: Arc<BoundedQueue<T>>,
    workers: Vec<JoinHandle<()>>,
}

impl<T: Send + 'static> WorkerPool<T> {
    /// Lanza `size` workers que ejecutan `handler` por cada trabajo
    pub fn new<F>(size: usize, queue_capacity: usize, handler: F) -> std::io::Result<Self>
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        let queue = Arc::new(BoundedQueue::new(queue_capacity));
        let handler = Arc::new(handler);

        let workers = (0..size)
            .map(|id| {
                let queue = Arc::clone(&queue);
                let handler = Arc::clone(&handler);

                thread::Builder::new()
                    .name(format!("worker-{}", id))
                    .spawn(move || {
                        debug!(worker = id, "worker iniciado");
                        while let Some(job) = queue.pop() {
                            (*handler)(job);
                        }
                        debug!(worker = id, "worker terminado");
                    })
            })
            .collect::<std::io::Result<Vec<_>>>()?;

        Ok(Self { queue, workers })
    }

    /// Envía un trabajo al pool; `Err(job)` si la cola está llena
    pub fn submit(&self, job: T) -> Result<(), T> {
        self.queue.push(job)
    }

    /// Trabajos esperando en la cola
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn size(&self) -> usize {
        self.workers.len()
    }
}

impl<T: Send + 'static> Drop for WorkerPool<T> {
    /// Cierra la cola, deja terminar lo pendiente y espera a los workers
    fn drop(&mut self) {
        self.queue.close();
        for worker in self.workers.drain(..) {
            if worker.join().is_err() {
                error!("un worker terminó con panic");
            }
        }
    }
}
