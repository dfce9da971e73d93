use crate::event;
use std::collections::HashMap;
use std::sync::LazyLock;
use strum_macros::{Display, EnumIter};

/// The five discrete impact intensities the haptic hardware accepts,
/// strongest first.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Display, EnumIter)]
pub enum HapticIntensity {
    Heavy,
    Strong,
    Medium,
    Light,
    Faint,
}

impl HapticIntensity {
    /// Returns the relative amplitude used by implementations that only
    /// support a scalar strength.
    pub fn amplitude(&self) -> f32 { INTENSITY_AMPLITUDE_LOOKUP[self] }
}

static INTENSITY_AMPLITUDE_LOOKUP: LazyLock<HashMap<HapticIntensity, f32>> = LazyLock::new(|| {
    let mut lookup = HashMap::new();
    let amplitudes = vec![
        (HapticIntensity::Heavy, 1.0),
        (HapticIntensity::Strong, 0.8),
        (HapticIntensity::Medium, 0.6),
        (HapticIntensity::Light, 0.4),
        (HapticIntensity::Faint, 0.2),
    ];

    for (intensity, amplitude) in amplitudes {
        lookup.insert(intensity, amplitude);
    }
    lookup
});

/// Fire-and-forget haptic output. Implementations swallow device failures,
/// feedback is best-effort.
pub trait HapticSink: Send + Sync {
    /// Plays one impact at the given intensity.
    fn impact(&self, intensity: HapticIntensity);
    /// Plays the distinct warning effect used on route deviation.
    fn warning(&self);
}

/// Haptic sink that only logs, used when no haptic hardware is attached.
pub struct LogHaptics;

impl HapticSink for LogHaptics {
    fn impact(&self, intensity: HapticIntensity) {
        event!("Haptic impact {intensity} ({:.1})", intensity.amplitude());
    }

    fn warning(&self) {
        event!("Haptic warning effect");
    }
}
