//! Reusable UI widgets

mod choice_list;
mod spinner;
mod step_progress;

pub use choice_list::ChoiceList;
pub use spinner::Spinner;
pub use step_progress::StepProgress;
