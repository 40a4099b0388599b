//! Signals: the player-activatable buttons of the game
//!
//! A signal is identity + hue + sound asset. The bank holds one descriptor
//! per physical button and lives for the process lifetime.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SessionError;

/// Paint lightness of an idle signal (percent)
pub const IDLE_LIGHTNESS: u8 = 25;

/// Paint lightness of an active signal (percent)
pub const ACTIVE_LIGHTNESS: u8 = 50;

/// Stable identity of a signal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalId(pub u8);

impl fmt::Display for SignalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Playback intensity (volume) in `[0.0, 1.0]`
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Intensity(f32);

impl Intensity {
    /// Full-volume playback, used for sequence playback and player presses
    pub const FULL: Intensity = Intensity(1.0);
    /// Silent playback, used by the unified animation
    pub const SILENT: Intensity = Intensity(0.0);

    /// Create an intensity, clamped to `[0.0, 1.0]`
    pub fn new(level: f32) -> Self {
        if level.is_nan() {
            return Self::SILENT;
        }
        Self(level.clamp(0.0, 1.0))
    }

    pub fn level(&self) -> f32 {
        self.0
    }

    pub fn is_silent(&self) -> bool {
        self.0 == 0.0
    }
}

/// Immutable description of one signal
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignalDescriptor {
    /// Stable identity
    pub id: SignalId,
    /// Human-readable name, also used for keyboard shortcuts
    pub name: String,
    /// Display hue in degrees (0-359)
    pub hue: u16,
    /// Sound asset file name
    pub sound: String,
}

impl SignalDescriptor {
    pub fn new(id: u8, name: impl Into<String>, hue: u16, sound: impl Into<String>) -> Self {
        Self {
            id: SignalId(id),
            name: name.into(),
            hue: hue % 360,
            sound: sound.into(),
        }
    }
}

/// The fixed set of signals available in a game
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalBank {
    signals: Vec<SignalDescriptor>,
}

impl SignalBank {
    /// Build a bank, rejecting empty sets and duplicate ids
    pub fn new(signals: Vec<SignalDescriptor>) -> Result<Self, SessionError> {
        let bank = Self { signals };
        bank.validate()?;
        Ok(bank)
    }

    /// The four-button green/red/yellow/blue layout
    pub fn classic() -> Self {
        Self {
            signals: vec![
                SignalDescriptor::new(0, "green", 120, "sound1.mp3"),
                SignalDescriptor::new(1, "red", 0, "sound2.mp3"),
                SignalDescriptor::new(2, "yellow", 60, "sound3.mp3"),
                SignalDescriptor::new(3, "blue", 240, "sound4.mp3"),
            ],
        }
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        if self.signals.is_empty() {
            return Err(SessionError::InvalidConfig(
                "signal bank cannot be empty".to_string(),
            ));
        }
        for (i, signal) in self.signals.iter().enumerate() {
            if self.signals[..i].iter().any(|s| s.id == signal.id) {
                return Err(SessionError::InvalidConfig(format!(
                    "duplicate signal id {}",
                    signal.id
                )));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn get(&self, id: SignalId) -> Option<&SignalDescriptor> {
        self.signals.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: SignalId) -> bool {
        self.get(id).is_some()
    }

    /// Ids in bank order
    pub fn ids(&self) -> impl Iterator<Item = SignalId> + '_ {
        self.signals.iter().map(|s| s.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SignalDescriptor> {
        self.signals.iter()
    }

    /// Resolve a keyboard token: a 1-based position ("1".."n") or a
    /// case-insensitive name / name initial
    pub fn resolve(&self, token: &str) -> Option<SignalId> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        if let Ok(position) = token.parse::<usize>() {
            return position
                .checked_sub(1)
                .and_then(|i| self.signals.get(i))
                .map(|s| s.id);
        }
        let lowered = token.to_lowercase();
        self.signals
            .iter()
            .find(|s| s.name.to_lowercase() == lowered)
            .or_else(|| {
                if lowered.chars().count() != 1 {
                    return None;
                }
                self.signals
                    .iter()
                    .find(|s| s.name.to_lowercase().starts_with(&lowered))
            })
            .map(|s| s.id)
    }
}

impl Default for SignalBank {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_bank_layout() {
        let bank = SignalBank::classic();
        assert_eq!(bank.len(), 4);
        let hues: Vec<u16> = bank.iter().map(|s| s.hue).collect();
        assert_eq!(hues, vec![120, 0, 60, 240]);
        assert_eq!(bank.get(SignalId(3)).unwrap().sound, "sound4.mp3");
    }

    #[test]
    fn test_bank_rejects_empty() {
        let result = SignalBank::new(vec![]);
        assert!(matches!(result, Err(SessionError::InvalidConfig(_))));
    }

    #[test]
    fn test_bank_rejects_duplicate_ids() {
        let result = SignalBank::new(vec![
            SignalDescriptor::new(1, "a", 10, "a.mp3"),
            SignalDescriptor::new(1, "b", 20, "b.mp3"),
        ]);
        assert!(matches!(result, Err(SessionError::InvalidConfig(_))));
    }

    #[test]
    fn test_resolve_by_position_and_name() {
        let bank = SignalBank::classic();
        assert_eq!(bank.resolve("1"), Some(SignalId(0)));
        assert_eq!(bank.resolve("4"), Some(SignalId(3)));
        assert_eq!(bank.resolve("5"), None);
        assert_eq!(bank.resolve("0"), None);
        assert_eq!(bank.resolve("Red"), Some(SignalId(1)));
        assert_eq!(bank.resolve("y"), Some(SignalId(2)));
        assert_eq!(bank.resolve("bl"), None);
        assert_eq!(bank.resolve(""), None);
    }

    #[test]
    fn test_intensity_is_clamped() {
        assert_eq!(Intensity::new(2.0), Intensity::FULL);
        assert_eq!(Intensity::new(-1.0), Intensity::SILENT);
        assert!(Intensity::new(f32::NAN).is_silent());
        assert_eq!(Intensity::new(0.5).level(), 0.5);
    }
}
