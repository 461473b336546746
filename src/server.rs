//! Development server
//!
//! Serves the output directory over HTTP. Unknown paths fall back to
//! `index.html` so client-side routes survive a page reload.

use std::future::Future;
use std::path::Path;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::error::BundleResult;

/// Router serving the files under `root`
pub fn router(root: &Path) -> Router {
    let files = ServeDir::new(root)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(root.join("index.html")));

    Router::new()
        .fallback_service(files)
        .layer(TraceLayer::new_for_http())
}

/// Serve `root` on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, root: &Path, shutdown: F) -> BundleResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("serving {} on http://{}", root.display(), addr);
    }

    axum::serve(listener, router(root))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("development server stopped");
    Ok(())
}
