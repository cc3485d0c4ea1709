//! Journalisation (natif).
//!
//! Sortie compacte horodatée, niveau par défaut + surcharges par module.
//! `RUST_LOG` a priorité sur la configuration :
//! ```bash
//! RUST_LOG=debug calculatrice_poly
//! RUST_LOG=calculatrice_poly::noyau=trace calculatrice_poly
//! ```

use std::sync::Once;

use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// HH:MM:SS.mmm
struct HeureCompacte;

impl FormatTime for HeureCompacte {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Chaîne de filtre : "defaut,module=niveau,...".
pub fn filtre_depuis_config(config: &LoggingConfig) -> String {
    let mut modules: Vec<_> = config.modules.iter().collect();
    modules.sort();

    let mut filtre = config.default.clone();
    for (module, niveau) in modules {
        filtre.push_str(&format!(",{module}={niveau}"));
    }
    filtre
}

/// À appeler une fois au démarrage ; les appels suivants sont ignorés.
pub fn init_with_config(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(filtre_depuis_config(config))
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_timer(HeureCompacte)
            .with_level(true)
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}
