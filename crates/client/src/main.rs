//! Lumen client - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lumen_client::infrastructure::ComplexityPolicy;
use lumen_client::ports::outbound::PasswordPolicyPort;
use lumen_client::runner::config::RunnerConfig;
use lumen_client::runner::{run, RunnerDeps};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lumen_client=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Lumen client");

    #[cfg_attr(not(target_arch = "wasm32"), allow(unused_mut))]
    let mut config = RunnerConfig::from_env();

    // The browser has no environment; pick the layout from the viewport.
    #[cfg(target_arch = "wasm32")]
    {
        let width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(1024.0);
        config.shell = if width < 768.0 {
            lumen_client::runner::config::ShellKind::Mobile
        } else {
            lumen_client::runner::config::ShellKind::Desktop
        };
    }

    tracing::debug!(
        complexity = %config.password_complexity,
        "Password policy configured"
    );

    let password_policy: Arc<dyn PasswordPolicyPort> =
        Arc::new(ComplexityPolicy::new(config.password_complexity));

    run(RunnerDeps {
        password_policy,
        config,
    });
}
