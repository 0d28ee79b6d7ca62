use serde::{Deserialize, Serialize};

use crate::models::profile::{ActivityInput, BiometricProfile, CalculatedGoals, GoalInput};

/// Persisted user settings: the inputs to the goal pipeline plus the
/// targets last computed from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub biometrics: BiometricProfile,
    pub activity: ActivityInput,
    pub goal: GoalInput,
    pub goals: CalculatedGoals,
}
