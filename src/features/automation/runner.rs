use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use tokio::process::Command;

use crate::features::automation::dto::{RunReport, Step, StepOutcome, StepReport};

#[async_trait]
pub trait StepRunner: Send + Sync {
    async fn run(&self, step: &Step) -> StepOutcome;
}

#[derive(Debug, Default, Clone)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StepRunner for ProcessRunner {
    async fn run(&self, step: &Step) -> StepOutcome {
        let status = Command::new(&step.program)
            .args(&step.args)
            .current_dir(&step.working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await;

        match status {
            Ok(status) => outcome_from_status(status),
            Err(err) => StepOutcome::SpawnFailed {
                reason: err.to_string(),
            },
        }
    }
}

fn outcome_from_status(status: ExitStatus) -> StepOutcome {
    if status.success() {
        StepOutcome::Succeeded
    } else {
        StepOutcome::Failed {
            code: status.code(),
        }
    }
}

// A failed step never stops the ones after it.
pub async fn run_plan<R>(runner: &R, steps: &[Step]) -> RunReport
where
    R: StepRunner + ?Sized,
{
    let mut report = RunReport::default();

    for step in steps {
        let command = step.command_line();
        tracing::info!(
            step = %step.name,
            %command,
            dir = %step.working_dir.display(),
            "running step"
        );

        let outcome = runner.run(step).await;
        if outcome.is_success() {
            tracing::info!(step = %step.name, "step succeeded");
        } else {
            tracing::warn!(step = %step.name, %outcome, "step failed, continuing");
        }

        report.steps.push(StepReport {
            name: step.name.clone(),
            command,
            outcome,
        });
    }

    report
}
