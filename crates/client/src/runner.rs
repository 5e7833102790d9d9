use std::sync::Arc;

use crate::ports::outbound::PasswordPolicyPort;
use crate::ui::presentation::Services;

/// Configuration types for the client runner.
pub mod config {
    use std::str::FromStr;

    use lumen_domain::{IconCatalog, PasswordComplexity};

    pub const SHELL_VAR: &str = "LUMEN_SHELL";
    pub const PASSWORD_COMPLEXITY_VAR: &str = "LUMEN_PASSWORD_COMPLEXITY";
    pub const TIMELINE_ICONS_VAR: &str = "LUMEN_TIMELINE_ICONS";

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub enum ShellKind {
        #[default]
        Desktop,
        Mobile,
    }

    impl FromStr for ShellKind {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "desktop" => Ok(Self::Desktop),
                "mobile" => Ok(Self::Mobile),
                other => Err(format!("unknown shell kind: {other}")),
            }
        }
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct RunnerConfig {
        pub shell: ShellKind,
        pub password_complexity: PasswordComplexity,
        pub timeline_icons: IconCatalog,
    }

    impl RunnerConfig {
        /// Read configuration from the process environment.
        pub fn from_env() -> Self {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        /// Read configuration through `lookup`.
        ///
        /// Missing keys keep their defaults. Malformed values are logged and
        /// also fall back to defaults.
        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
            Self {
                shell: parse_or_default(SHELL_VAR, lookup(SHELL_VAR)),
                password_complexity: parse_or_default(
                    PASSWORD_COMPLEXITY_VAR,
                    lookup(PASSWORD_COMPLEXITY_VAR),
                ),
                timeline_icons: parse_or_default(TIMELINE_ICONS_VAR, lookup(TIMELINE_ICONS_VAR)),
            }
        }
    }

    fn parse_or_default<T>(key: &str, raw: Option<String>) -> T
    where
        T: FromStr + Default,
        T::Err: std::fmt::Display,
    {
        match raw {
            None => T::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e: T::Err| {
                tracing::warn!(key, value = %raw, error = %e, "Ignoring malformed setting");
                T::default()
            }),
        }
    }

}

use config::RunnerConfig;

pub struct RunnerDeps {
    pub password_policy: Arc<dyn PasswordPolicyPort>,
    pub config: RunnerConfig,
}

pub fn run(deps: RunnerDeps) {
    let RunnerDeps {
        password_policy,
        config,
    } = deps;

    // Convert runner's ShellKind to the UI's ShellKind for context
    let ui_shell = match config.shell {
        config::ShellKind::Desktop => crate::ui::ShellKind::Desktop,
        config::ShellKind::Mobile => crate::ui::ShellKind::Mobile,
    };

    tracing::info!(
        shell = ?config.shell,
        icon_count = config.timeline_icons.options().len(),
        "Launching form views"
    );

    dioxus::LaunchBuilder::new()
        .with_context(ui_shell)
        .with_context(Services::new(
            password_policy,
            config.password_complexity,
            config.timeline_icons,
        ))
        .launch(crate::ui::app);
}
