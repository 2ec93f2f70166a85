pub mod cli;
pub mod dto;
pub mod plan;
pub mod runner;

pub use cli::{Cli, exit_code};
pub use dto::{DEFAULT_TASKS, RunReport, Step, StepOutcome, StepReport, Task};
pub use plan::{build_plan, steps_for_task};
pub use runner::{ProcessRunner, StepRunner, run_plan};
