use crate::config::AutomationConfig;
use crate::features::automation::dto::{Step, Task};

const SERVER_BINARY: &str = "mock-server";

#[cfg(windows)]
fn list_dir_step(name: &str, dir: &std::path::Path) -> Step {
    Step::new(name, "cmd", ["/C", "dir"], dir.to_path_buf())
}

#[cfg(not(windows))]
fn list_dir_step(name: &str, dir: &std::path::Path) -> Step {
    Step::new(name, "ls", ["-l"], dir.to_path_buf())
}

fn gradle_step(config: &AutomationConfig, gradle_task: &str) -> Step {
    Step::new(
        &format!("gradle {gradle_task}"),
        &config.gradle_program,
        [gradle_task],
        config.project_dir.clone(),
    )
}

pub fn steps_for_task(config: &AutomationConfig, task: Task) -> Vec<Step> {
    match task {
        Task::Debug => vec![
            list_dir_step("list project", &config.project_dir),
            gradle_step(config, "assembleDebug"),
            gradle_step(config, "installDebug"),
        ],
        Task::Build => vec![gradle_step(config, "build")],
        Task::Uninstall => vec![gradle_step(config, "uninstallAll")],
        Task::Serve => vec![
            list_dir_step("list server", &config.server_dir),
            Step::new(
                "prepare server",
                "cargo",
                ["build", "--bin", SERVER_BINARY],
                config.server_dir.clone(),
            ),
            Step::new(
                "launch server",
                "cargo",
                ["run", "--bin", SERVER_BINARY],
                config.server_dir.clone(),
            ),
        ],
    }
}

pub fn build_plan(config: &AutomationConfig, tasks: &[Task]) -> Vec<Step> {
    tasks
        .iter()
        .flat_map(|task| steps_for_task(config, *task))
        .collect()
}
