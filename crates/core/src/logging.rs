use std::panic::PanicHookInfo;
use std::sync::Once;

use tracing_subscriber::filter::FilterFn;
use tracing_subscriber::fmt::format::Format;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install a stderr fmt subscriber for the `stopmap` crates and route panics
/// through it. Safe to call more than once; later calls are no-ops, and an
/// already installed global subscriber is left alone.
pub fn init_logging() {
    static LOGGING_SETUP: Once = Once::new();

    LOGGING_SETUP.call_once(|| {
        let filter = FilterFn::new(|meta| {
            meta.module_path()
                .unwrap_or_default()
                .starts_with("stopmap")
        });
        let layer = tracing_subscriber::fmt::layer()
            .event_format(Format::default().with_target(true))
            .with_writer(std::io::stderr);

        let installed = tracing_subscriber::registry()
            .with(layer)
            .with(filter)
            .try_init()
            .is_ok();
        if installed {
            std::panic::set_hook(Box::new(panic_hook));
        }
    })
}

fn panic_hook(info: &PanicHookInfo) {
    tracing::error!("{info}")
}
