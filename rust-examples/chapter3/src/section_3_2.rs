//! Sección 3.2: Funciones asíncronas y callbacks (Async Functions and Callbacks)
//!
//! `async fn` + `.await` sobre tokio, y un callback diferido con `sleep`
//! (`async fn` + `.await` on tokio, and a deferred callback using `sleep`).
//!
//! ```text
//! t = 0ms     "Inicio ejecución async"      fetch_data(42) empieza (starts)
//! t = 500ms   "Callback recibido: ..."      async_process dispara (fires)
//! t = 1000ms  "Datos recibidos para id: 42" fetch_data resuelve (resolves)
//!             "Fin ejecución async"
//! ```
//!
//! Las dos tareas comparten la consola a través de un `RefCell`; ninguna
//! mantiene el préstamo durante un `.await`
//! (Both tasks share the console through a `RefCell`; neither holds the
//! borrow across an `.await`).

use std::cell::RefCell;
use std::time::Duration;

use apuntes_common::{Console, Result, Settings};

/// Consola compartida entre tareas del mismo hilo
/// (Console shared between tasks on the same thread).
pub type SharedConsole<'a> = RefCell<&'a mut Console>;

/// Simula una llamada a una API (Simulates an API call).
///
/// # Ejemplos (Examples)
/// ```
/// use std::time::Duration;
/// use apuntes_chapter3::section_3_2::fetch_data;
///
/// let rt = tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap();
/// let datos = rt.block_on(fetch_data(7, Duration::ZERO));
/// assert_eq!(datos, "Datos recibidos para id: 7");
/// ```
pub async fn fetch_data(id: u32, delay: Duration) -> String {
    tokio::time::sleep(delay).await;
    format!("Datos recibidos para id: {id}")
}

pub async fn execute(console: &SharedConsole<'_>, delay: Duration) {
    console.borrow_mut().log("Inicio ejecución async");
    let datos = fetch_data(42, delay).await;
    console.borrow_mut().log(datos);
    console.borrow_mut().log("Fin ejecución async");
}

/// Llama a `cb` con el resultado cuando pasa `delay`
/// (Calls `cb` with the result once `delay` has passed).
pub async fn async_process<F>(delay: Duration, cb: F)
where
    F: FnOnce(&str),
{
    tokio::time::sleep(delay).await;
    cb("Proceso terminado");
}

/// Lanza las dos tareas a la vez, como hace el event loop
/// (Starts both tasks at once, like the event loop does).
pub async fn run(console: &SharedConsole<'_>, settings: &Settings) {
    tokio::join!(
        execute(console, settings.fetch_delay),
        async_process(settings.callback_delay, |mensaje| {
            console
                .borrow_mut()
                .log(format_args!("Callback recibido: {mensaje}"));
        }),
    );
}

pub fn demo(console: &mut Console, settings: &Settings) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    tracing::debug!(
        fetch_ms = settings.fetch_delay.as_millis(),
        callback_ms = settings.callback_delay.as_millis(),
        "runtime listo"
    );
    let shared = RefCell::new(console);
    runtime.block_on(run(&shared, settings));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fetch_data_waits_for_delay() {
        let start = tokio::time::Instant::now();
        let datos = fetch_data(42, Duration::from_secs(1)).await;
        assert_eq!(datos, "Datos recibidos para id: 42");
        assert!(start.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_callback_receives_message() {
        let mut recibido = None;
        async_process(Duration::from_millis(500), |m| recibido = Some(m.to_string())).await;
        assert_eq!(recibido.as_deref(), Some("Proceso terminado"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_callback_fires_before_fetch_resolves() {
        let mut console = Console::capture();
        let shared = RefCell::new(&mut console);
        run(&shared, &Settings::default()).await;

        assert_eq!(
            console.lines(),
            [
                "Inicio ejecución async",
                "Callback recibido: Proceso terminado",
                "Datos recibidos para id: 42",
                "Fin ejecución async",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_callback_fires_last() {
        let settings = Settings {
            callback_delay: Duration::from_secs(2),
            ..Settings::default()
        };
        let mut console = Console::capture();
        let shared = RefCell::new(&mut console);
        run(&shared, &settings).await;

        assert_eq!(
            console.lines().last(),
            Some(&"Callback recibido: Proceso terminado")
        );
    }

    #[test]
    fn test_demo_with_instant_settings() {
        let mut console = Console::capture();
        demo(&mut console, &Settings::instant()).unwrap();

        let lines = console.lines();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Inicio ejecución async");
        assert!(console.contains("Datos recibidos para id: 42"));
        assert!(console.contains("Callback recibido: Proceso terminado"));
        let datos = lines.iter().position(|l| l.starts_with("Datos"));
        let fin = lines.iter().position(|l| l.starts_with("Fin"));
        assert!(datos < fin);
    }
}
