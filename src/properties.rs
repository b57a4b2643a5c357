use serde::{Deserialize, Serialize};

use crate::eos::EosKind;

// ── Phase classification ────────────────────────────────────────────

/// Physical interpretation of the admissible molar-volume roots.
///
/// Volumes are in the units of the input (cm³/mol for R in
/// bar·cm³/(mol·K)), always sorted ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "classification", rename_all = "kebab-case")]
pub enum Phase {
    /// No positive root greater than the co-volume.
    None,
    /// One admissible root; no phase split.
    SinglePhase { volume: f64 },
    /// Two admissible roots.  Reported as found, without assigning
    /// liquid/vapor.
    TwoRoots { low: f64, high: f64 },
    /// Three distinct admissible roots: saturated liquid, the unstable
    /// middle root, saturated vapor.
    TwoPhase { liquid: f64, unstable: f64, vapor: f64 },
    /// Three coincident roots.
    Critical { volume: f64 },
    /// The inputs were rejected before solving.
    Error { message: String },
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::None => "none",
            Phase::SinglePhase { .. } => "single-phase",
            Phase::TwoRoots { .. } => "two-roots",
            Phase::TwoPhase { .. } => "two-phase",
            Phase::Critical { .. } => "critical",
            Phase::Error { .. } => "error",
        }
    }

    /// Reported volumes, ascending.
    pub fn volumes(&self) -> Vec<f64> {
        match *self {
            Phase::None | Phase::Error { .. } => Vec::new(),
            Phase::SinglePhase { volume } | Phase::Critical { volume } => vec![volume],
            Phase::TwoRoots { low, high } => vec![low, high],
            Phase::TwoPhase { liquid, unstable, vapor } => vec![liquid, unstable, vapor],
        }
    }

    fn map_volumes(self, f: impl Fn(f64) -> f64) -> Self {
        match self {
            Phase::SinglePhase { volume } => Phase::SinglePhase { volume: f(volume) },
            Phase::Critical { volume } => Phase::Critical { volume: f(volume) },
            Phase::TwoRoots { low, high } => Phase::TwoRoots { low: f(low), high: f(high) },
            Phase::TwoPhase { liquid, unstable, vapor } => Phase::TwoPhase {
                liquid: f(liquid),
                unstable: f(unstable),
                vapor: f(vapor),
            },
            other => other,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::None => write!(f, "No physically meaningful (positive) roots found"),
            Phase::SinglePhase { volume } => {
                write!(f, "Single phase solution (no phase split): V = {volume:.4}")
            }
            Phase::TwoRoots { low, high } => {
                write!(f, "Two positive roots: V1 = {low:.4}, V2 = {high:.4}")
            }
            Phase::TwoPhase { liquid, unstable, vapor } => {
                writeln!(f, "liquid phase Vsat : {liquid:.4}")?;
                writeln!(f, "unstable root     : {unstable:.4}")?;
                write!(f, "vapour phase Vsat : {vapor:.4}")
            }
            Phase::Critical { volume } => write!(f, "Critical point: Vc = {volume:.4}"),
            Phase::Error { message } => write!(f, "Error: {message}"),
        }
    }
}

// ── Classified result ───────────────────────────────────────────────

/// Outcome of classifying one root set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedResult {
    #[serde(flatten)]
    pub phase: Phase,
    /// Co-volume b used for the `V > b` check (NaN when it could not be
    /// derived from the inputs).
    #[serde(with = "nan_as_null")]
    pub co_volume: f64,
}

impl ClassifiedResult {
    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            phase: Phase::Error { message: message.into() },
            co_volume: f64::NAN,
        }
    }

    pub fn label(&self) -> &'static str {
        self.phase.label()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Error { message } => Some(message),
            _ => None,
        }
    }

    /// Apply a volume unit conversion to every reported volume and to b.
    pub(crate) fn convert_volumes(self, f: impl Fn(f64) -> f64) -> Self {
        let co_volume = f(self.co_volume);
        Self {
            phase: self.phase.map_volumes(f),
            co_volume,
        }
    }
}

impl std::fmt::Display for ClassifiedResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.phase)?;
        write!(f, "b = {:.4}", self.co_volume)
    }
}

// ── Evaluation report ───────────────────────────────────────────────

/// One model's full report: which model, its a(T), and the classified
/// roots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub kind: EosKind,
    /// Attraction parameter a(T) (NaN when it could not be derived from the
    /// inputs).
    #[serde(with = "nan_as_null")]
    pub attraction: f64,
    pub result: ClassifiedResult,
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} [{}]", self.kind, self.result.label())?;
        writeln!(f, "a = {:.4}", self.attraction)?;
        write!(f, "{}", self.result)
    }
}

/// NaN goes out as `null` and `null` comes back as NaN; JSON has no NaN.
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
