/*
[INPUT]:  User input via menu prompts and a Dashboard instance
[OUTPUT]: Executed flows with printed feedback
[POS]:    CLI interactive flow
[UPDATE]: When adding menu actions or changing prompt validation
*/

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use tracing::error;

use taskmarket_adapter::Task;

use crate::app::{CreateTaskInput, Dashboard};
use crate::cli::print_task_line;
use crate::view;

pub async fn run_interactive(dashboard: &Dashboard) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("{}", style("Taskmarket Dashboard").bold().cyan());

    loop {
        let actions = vec![
            "Browse tasks",
            "Create task",
            "Run worker on a task",
            "Exit",
        ];
        let selection = Select::with_theme(&theme)
            .with_prompt("Select action")
            .items(&actions)
            .default(0)
            .interact()?;

        match selection {
            0 => browse_tasks(dashboard).await?,
            1 => create_task(dashboard, &theme).await?,
            2 => delegate_task(dashboard, &theme).await?,
            _ => return Ok(()),
        }
    }
}

async fn browse_tasks(dashboard: &Dashboard) -> Result<()> {
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

/// Prompt for the four creation fields. Every prompt validates non-empty
/// input, so an incomplete submission cannot reach the contract.
async fn create_task(dashboard: &Dashboard, theme: &ColorfulTheme) -> Result<()> {
    let docker_image_uri: String = Input::with_theme(theme)
        .with_prompt("Docker image URI")
        .validate_with(required)
        .interact_text()?;
    let input_data_uri: String = Input::with_theme(theme)
        .with_prompt("Input data URI")
        .validate_with(required)
        .interact_text()?;
    let max_workers: String = Input::with_theme(theme)
        .with_prompt("Max workers")
        .validate_with(|value: &String| -> Result<(), &str> {
            match value.trim().parse::<u32>() {
                Ok(parsed) if parsed >= 1 => Ok(()),
                _ => Err("enter a whole number of at least 1"),
            }
        })
        .interact_text()?;
    let reward: String = Input::with_theme(theme)
        .with_prompt(format!("Reward ({})", view::REWARD_TICKER))
        .validate_with(required)
        .interact_text()?;

    let input = CreateTaskInput {
        docker_image_uri,
        input_data_uri,
        max_workers,
        reward,
    };
    if let Err(err) = input.validate() {
        println!("{}", style(format!("Invalid task: {err}")).red());
        return Ok(());
    }

    println!(
        "Posting {} with input {} for {} {} ({} workers)",
        input.docker_image_uri,
        input.input_data_uri,
        input.reward,
        view::REWARD_TICKER,
        input.max_workers,
    );
    let confirmed = Confirm::with_theme(theme)
        .with_prompt("Post this task now?")
        .default(true)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

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

async fn delegate_task(dashboard: &Dashboard, theme: &ColorfulTheme) -> Result<()> {
    let tasks = dashboard.refresh_board().await?;
    let open_tasks: Vec<&Task> = tasks.iter().filter(|task| task.is_open()).collect();
    if open_tasks.is_empty() {
        println!("{}", style("No open tasks to run.").yellow());
        return Ok(());
    }

    let items: Vec<String> = open_tasks
        .iter()
        .map(|task| {
            format!(
                "#{} | {} | {}",
                task.id,
                task.docker_image_uri,
                view::format_reward(task)
            )
        })
        .collect();
    let selection = Select::with_theme(theme)
        .with_prompt("Select task to run")
        .items(&items)
        .default(0)
        .interact()?;

    let task = open_tasks[selection];
    println!("Handing task #{} to the local worker...", task.id);
    let outcome = dashboard.delegate(task).await;
    println!("{}", view::delegation_message(&outcome, dashboard.worker_url()));
    Ok(())
}

fn required(value: &String) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        Err("a value is required")
    } else {
        Ok(())
    }
}
