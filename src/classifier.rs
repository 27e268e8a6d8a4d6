//! Password strength classifier - main classification logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;
#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::{ClassifierConfig, active_config};
use crate::level::StrengthLevel;
use crate::sections::{
    CharacterClasses, Section, character_variety_section, common_pattern_section, length_section,
};

/// Debounce applied by [`classify_password_tx`] before classifying.
#[cfg(feature = "async")]
pub const METER_DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Classification outcome with the facts that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub level: StrengthLevel,
    pub classes: CharacterClasses,
    /// Source of the first common pattern that matched, if any
    pub matched_pattern: Option<String>,
    pub reasons: Vec<String>,
}

impl Assessment {
    pub fn diversity(&self) -> usize {
        self.classes.diversity()
    }
}

/// Classifies a password into a [`StrengthLevel`].
///
/// Sections run in order and the first verdict wins:
/// 1. length (`Short`)
/// 2. common patterns (`Common`)
/// 3. character variety (`Weak`, `Ok` or `Strong`)
///
/// `None` stands for a missing password and is always `Short`.
pub fn classify(password: Option<&SecretString>, config: &ClassifierConfig) -> StrengthLevel {
    let Some(password) = password else {
        return StrengthLevel::Short;
    };
    let pwd = password.expose_secret();

    // Orchestrator: gating sections in priority order
    let sections: [(&str, Section); 2] = [
        ("length", length_section),
        ("common", common_pattern_section),
    ];

    for (_section_name, section_fn) in sections {
        if let Some(level) = section_fn(pwd, config) {
            #[cfg(feature = "tracing")]
            tracing::debug!(section = _section_name, %level, "classification settled early");
            return level;
        }
    }

    character_variety_section(pwd, config)
}

/// Classifies a password with the active configuration.
///
/// See [`crate::init_config`].
pub fn classify_password(password: &SecretString) -> StrengthLevel {
    classify(Some(password), &active_config())
}

/// Classifies a password and explains the result.
///
/// The level is always the one [`classify`] returns.
pub fn assess(password: Option<&SecretString>, config: &ClassifierConfig) -> Assessment {
    let pwd = password.map(|p| p.expose_secret()).unwrap_or_default();
    let level = classify(password, config);
    let classes = CharacterClasses::scan(pwd, config.whitespace_is_symbol());
    let matched_pattern = match level {
        StrengthLevel::Short => None,
        _ => config.common_patterns().first_match(pwd).map(str::to_string),
    };

    let mut reasons = Vec::new();
    match level {
        StrengthLevel::Short => reasons.push(format!(
            "Password must be at least {} characters",
            config.minimum_length()
        )),
        StrengthLevel::Common => reasons.push("Password matches a common pattern".to_string()),
        _ => {}
    }

    if level != StrengthLevel::Short && level != StrengthLevel::Strong {
        let missing: Vec<_> = classes.missing().into_iter().map(|c| c.label()).collect();
        if !missing.is_empty() {
            reasons.push(format!("Missing: {}", missing.join(", ")));
        }
    }

    Assessment {
        level,
        classes,
        matched_pattern,
        reasons,
    }
}

/// Async version for strength meters: waits [`METER_DEBOUNCE`], then sends
/// the level via channel.
///
/// Nothing is sent if `token` is cancelled before the debounce elapses.
#[cfg(feature = "async")]
pub async fn classify_password_tx(
    password: &SecretString,
    config: &ClassifierConfig,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthLevel>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("classification is about to start...");

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("classification cancelled before debounce elapsed");
            return;
        }
        _ = tokio::time::sleep(METER_DEBOUNCE) => {}
    }

    let level = classify(Some(password), config);

    if let Err(_e) = tx.send(level).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password classification result: {}", _e);
    }
}
