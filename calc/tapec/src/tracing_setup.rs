//! Opt-in tracing output for the CLI, driven by `RUST_LOG`.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a tree-shaped subscriber for engine spans.
///
/// Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=tape_eval=debug tapecalc integrate x --from 0 --to 1`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
