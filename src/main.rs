mod cli;
mod config;
mod ui;

use std::time::Duration;

use anyhow::{Result, bail};
use clap::Parser;
use console::Style;

use cli::{BureauCommand, Cli, Command};
use config::CredGuardConfig;
use credguard::{CredGuardClient, Job, UploadOptions};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CredGuardConfig::load()?;

    if config.api_key.is_empty() {
        bail!("nenhuma chave de API configurada (defina api_key em credguard.toml ou CREDGUARD_API_KEY)");
    }

    let base_url = cli.base_url.unwrap_or(config.base_url);
    let timeout = Duration::from_secs(cli.timeout.unwrap_or(config.timeout_secs));
    let client = CredGuardClient::with_options(config.api_key, base_url, timeout);

    match cli.command {
        Command::Upload {
            file,
            product,
            wait,
            poll_interval,
            max_wait,
        } => {
            let job = client
                .batch()
                .upload(&file, &product, &UploadOptions::default())
                .await?;
            println!("Job criado: {} ({})", job.job_id, job.file_name);
            if wait {
                let job = wait_and_report(
                    &client,
                    &job.job_id,
                    Duration::from_secs(poll_interval),
                    Duration::from_secs(max_wait),
                )
                .await?;
                ui::print_job(&job);
            }
        }

        Command::Status { job_id } => {
            let job = client.batch().get_status(&job_id).await?;
            ui::print_job(&job);
        }

        Command::Wait {
            job_id,
            poll_interval,
            max_wait,
        } => {
            let job = wait_and_report(
                &client,
                &job_id,
                Duration::from_secs(poll_interval),
                Duration::from_secs(max_wait),
            )
            .await?;
            ui::print_job(&job);
        }

        Command::Download { job_id, output } => {
            let bytes = client.batch().download_results(&job_id).await?;
            tokio::fs::write(&output, &bytes).await?;
            println!(
                "  {} Resultados salvos em {} ({} bytes)",
                Style::new().green().bold().apply_to("✓"),
                output.display(),
                bytes.len()
            );
        }

        Command::Models { product } => {
            let models = client.models().list(&product).await?;
            ui::print_json(
                &format!("Modelos — {product}"),
                &serde_json::to_value(&models)?,
            );
        }

        Command::Drift { model_id, job_id } => {
            let drift = client.drift().detect(model_id, &job_id).await?;
            let style = if drift.is_critical() {
                Style::new().red().bold()
            } else if drift.needs_attention() {
                Style::new().yellow()
            } else {
                Style::new().green()
            };
            println!(
                "{} PSI {:.4}: {}",
                style.apply_to(&drift.status),
                drift.psi,
                drift.message
            );
            if let Some(recommendation) = &drift.recommendation {
                println!("  Recomendação: {recommendation}");
            }
        }

        Command::Bureau { action } => match action {
            BureauCommand::Config => {
                let value = client.bureau().get_config().await?;
                ui::print_json("Bureau — configuração", &value);
            }
            BureauCommand::Metrics => {
                let value = client.bureau().get_metrics().await?;
                ui::print_json("Bureau — métricas", &value);
            }
        },
    }

    Ok(())
}

/// Aguarda a conclusão de um job exibindo o progresso no terminal.
async fn wait_and_report(
    client: &CredGuardClient,
    job_id: &str,
    poll_interval: Duration,
    max_wait: Duration,
) -> Result<Job> {
    let progress = ui::PollProgress::start(job_id);
    let result = client
        .batch()
        .wait_with_progress(job_id, poll_interval, max_wait, |job| progress.update(job))
        .await;

    match result {
        Ok(job) => {
            progress.finish_completed(&job);
            Ok(job)
        }
        Err(err) => {
            progress.finish_failed(&err.to_string());
            Err(err.into())
        }
    }
}
