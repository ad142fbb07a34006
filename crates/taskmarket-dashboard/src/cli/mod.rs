/*
[INPUT]:  Parsed subcommand arguments and a Dashboard instance
[OUTPUT]: Printed task boards and flow feedback on stdout
[POS]:    CLI layer - one-shot subcommands
[UPDATE]: When adding subcommands or changing printed output
*/

pub mod interactive;

use anyhow::Result;
use console::style;
use tracing::error;

use taskmarket_adapter::{Task, TaskStatus};

use crate::app::{CreateTaskInput, Dashboard};
use crate::view;

/// Print the current task board
pub async fn run_list(dashboard: &Dashboard) -> Result<()> {
    let tasks = dashboard.refresh_board().await?;
    if tasks.is_empty() {
        println!("{}", style("No tasks found.").yellow());
        return Ok(());
    }
    for task in &tasks {
        print_task_line(task);
    }
    Ok(())
}

/// Post one task, printing the transaction-feedback messages. Submission
/// failures are logged and absorbed; the command itself still exits cleanly.
pub async fn run_create(dashboard: &Dashboard, input: CreateTaskInput) -> Result<()> {
    println!("{}", style(view::CREATING_TASK_MESSAGE).cyan());
    match dashboard.create_task(&input).await {
        Ok(tx_hash) => {
            println!("{}", style(view::create_success_message(&tx_hash)).green());
        }
        Err(err) => {
            error!(error = %err, "task creation failed");
            println!("{}", style(view::CREATE_ERROR_MESSAGE).red());
        }
    }
    Ok(())
}

/// Hand one task to the local worker and print the outcome message
pub async fn run_delegate(dashboard: &Dashboard, task_id: u64) -> Result<()> {
    let Some(task) = dashboard.task(task_id).await? else {
        println!("{}", style(format!("Task #{task_id} not found.")).yellow());
        return Ok(());
    };
    if !task.is_open() {
        println!(
            "{}",
            style(format!("Task #{task_id} is not open ({}).", task.status)).yellow()
        );
        return Ok(());
    }
    let outcome = dashboard.delegate(&task).await;
    println!("{}", view::delegation_message(&outcome, dashboard.worker_url()));
    Ok(())
}

pub(crate) fn print_task_line(task: &Task) {
    println!(
        "{} {} | {} | {} | {}",
        style(format!("#{}", task.id)).bold(),
        status_badge(task.status),
        view::format_reward(task),
        view::format_capacity(task),
        task.docker_image_uri,
    );
}

fn status_badge(status: TaskStatus) -> String {
    let styled = match status {
        TaskStatus::Open => style(status.as_str()).green(),
        TaskStatus::InVerification => style(status.as_str()).yellow(),
        TaskStatus::Completed => style(status.as_str()).blue(),
        TaskStatus::Failed => style(status.as_str()).red(),
    };
    styled.to_string()
}
