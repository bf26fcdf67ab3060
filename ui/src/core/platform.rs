//! Task spawning.

/// Fire-and-forget a future. Results come back through channels, never by
/// mutating UI state from the spawned task directly.
#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(fut: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(fut);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_future<F>(fut: F)
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            handle.spawn(fut);
        }
        // No runtime (plain unit tests): run inline.
        Err(_) => futures::executor::block_on(fut),
    }
}
