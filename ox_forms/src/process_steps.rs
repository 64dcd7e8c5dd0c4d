use serde::{Deserialize, Serialize};

/// Arguments of the progress indicator.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProcessSteps {
    pub process_steps: u32,
    pub complete: bool,
    pub disabled: bool,
    pub active: bool,
    pub show_titles: bool,
}

/// Template context of the progress indicator: the arguments plus `show_index`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessStepsContext {
    pub process_steps: u32,
    pub complete: bool,
    pub disabled: bool,
    pub active: bool,
    pub show_index: bool,
    pub show_titles: bool,
}

/// Shape the progress-indicator context. `show_index` is never switched on.
pub fn process_steps(steps: &ProcessSteps) -> ProcessStepsContext {
    ProcessStepsContext {
        process_steps: steps.process_steps,
        complete: steps.complete,
        disabled: steps.disabled,
        active: steps.active,
        show_index: false,
        show_titles: steps.show_titles,
    }
}
