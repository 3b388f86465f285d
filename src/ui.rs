//! Interface de terminal do CLI — spinner de polling e saída colorida.
//!
//! Usa as crates `indicatif` para o spinner de progresso e `console` para
//! estilização com cores. O [`PollProgress`] acompanha visualmente o ciclo
//! de vida de um job enquanto o cliente faz polling.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use credguard::Job;

/// Indicador visual de progresso para o polling de um job no terminal.
///
/// Exibe um spinner animado com o status e a contagem de linhas processadas,
/// e mensagens coloridas para conclusão (verde) e falha (vermelho).
pub struct PollProgress {
    // Barra de progresso/spinner do indicatif.
    pb: ProgressBar,
    // Estilo verde para conclusão.
    green: Style,
    // Estilo vermelho para falha.
    red: Style,
}

impl PollProgress {
    /// Inicia o spinner para o job informado.
    pub fn start(job_id: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("invalid template"),
        );
        pb.set_message(format!("Aguardando job {job_id}..."));
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        Self {
            pb,
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
        }
    }

    /// Atualiza a mensagem do spinner com o snapshot mais recente do job.
    pub fn update(&self, job: &Job) {
        match job.progress() {
            Some((processed, total)) => {
                self.pb
                    .set_message(format!("{} — {processed}/{total} linhas", job.status));
            }
            None => self.pb.set_message(job.status.to_string()),
        }
    }

    /// Finaliza o spinner com o resumo de um job concluído.
    pub fn finish_completed(&self, job: &Job) {
        self.pb.finish_and_clear();
        let summary = match (job.processed_rows, job.excluded_rows) {
            (Some(processed), Some(excluded)) => {
                format!("{processed} linhas processadas, {excluded} excluídas")
            }
            _ => "processamento concluído".to_string(),
        };
        println!(
            "  {} Job {} concluído: {summary}",
            self.green.apply_to("✓"),
            job.job_id
        );
    }

    /// Finaliza o spinner com uma mensagem de falha.
    pub fn finish_failed(&self, message: &str) {
        self.pb.finish_and_clear();
        println!("  {} {message}", self.red.apply_to("✗"));
    }
}

/// Imprime um job formatado em JSON com cabeçalho estilizado.
pub fn print_job(job: &Job) {
    let style = if job.is_failed() {
        Style::new().red().bold()
    } else if job.is_complete() {
        Style::new().green().bold()
    } else {
        Style::new().yellow()
    };
    println!("{}", style.apply_to(format!("─── Job {} ───", job.job_id)));
    println!("{}", serde_json::to_string_pretty(job).unwrap_or_default());
}

/// Imprime um valor JSON arbitrário com cabeçalho estilizado.
pub fn print_json(title: &str, value: &serde_json::Value) {
    println!("{}", Style::new().cyan().bold().apply_to(format!("─── {title} ───")));
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
