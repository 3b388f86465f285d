//! Interface de linha de comando do CredGuard baseada em clap.
//!
//! Define a struct [`Cli`] com subcomandos [`Command`] (upload, status, wait,
//! download, models, drift, bureau) e flags globais (--base-url, --timeout).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// CredGuard — cliente de linha de comando para credit scoring em lote.
#[derive(Debug, Parser)]
#[command(name = "credguard", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// URL base da API (padrão: produção ou valor do credguard.toml).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Timeout em segundos para cada requisição HTTP.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Envia um arquivo CSV para processamento em lote.
    Upload {
        /// Caminho do arquivo CSV local.
        file: PathBuf,

        /// Código do produto (CARTAO, CARNE, EMPRESTIMO).
        #[arg(long, default_value = "CARTAO")]
        product: String,

        /// Aguarda a conclusão do job antes de retornar.
        #[arg(long, default_value_t = false)]
        wait: bool,

        /// Intervalo de polling em segundos (com --wait).
        #[arg(long, default_value_t = 5)]
        poll_interval: u64,

        /// Tempo máximo de espera em segundos (com --wait).
        #[arg(long, default_value_t = 600)]
        max_wait: u64,
    },

    /// Consulta o status atual de um job.
    Status {
        /// ID do job retornado pelo upload.
        job_id: String,
    },

    /// Aguarda a conclusão de um job por polling.
    Wait {
        /// ID do job retornado pelo upload.
        job_id: String,

        /// Intervalo de polling em segundos.
        #[arg(long, default_value_t = 5)]
        poll_interval: u64,

        /// Tempo máximo de espera em segundos.
        #[arg(long, default_value_t = 600)]
        max_wait: u64,
    },

    /// Baixa o CSV de resultados de um job concluído.
    Download {
        /// ID do job concluído.
        job_id: String,

        /// Caminho do arquivo de saída.
        #[arg(long, short)]
        output: PathBuf,
    },

    /// Lista os modelos disponíveis para um produto.
    Models {
        /// Código do produto.
        product: String,
    },

    /// Detecta drift em um modelo a partir de um job processado.
    Drift {
        /// ID numérico do modelo.
        #[arg(long)]
        model_id: u64,

        /// ID do job processado usado como amostra.
        #[arg(long)]
        job_id: String,
    },

    /// Consulta o bureau de crédito.
    Bureau {
        #[command(subcommand)]
        action: BureauCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum BureauCommand {
    /// Mostra a configuração atual do bureau.
    Config,
    /// Mostra as métricas de uso do bureau.
    Metrics,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_upload_subcommand() {
        let cli = Cli::parse_from(["credguard", "upload", "clientes.csv", "--product", "CARNE"]);
        match cli.command {
            Command::Upload { file, product, wait, .. } => {
                assert_eq!(file, PathBuf::from("clientes.csv"));
                assert_eq!(product, "CARNE");
                assert!(!wait);
            }
            _ => panic!("expected Upload command"),
        }
    }

    #[test]
    fn cli_parses_upload_with_wait_flags() {
        let cli = Cli::parse_from([
            "credguard",
            "upload",
            "clientes.csv",
            "--wait",
            "--poll-interval",
            "2",
            "--max-wait",
            "120",
        ]);
        match cli.command {
            Command::Upload {
                wait,
                poll_interval,
                max_wait,
                ..
            } => {
                assert!(wait);
                assert_eq!(poll_interval, 2);
                assert_eq!(max_wait, 120);
            }
            _ => panic!("expected Upload command"),
        }
    }

    #[test]
    fn cli_parses_global_flags() {
        let cli = Cli::parse_from([
            "credguard",
            "--base-url",
            "http://localhost:3000",
            "--timeout",
            "10",
            "status",
            "job-1",
        ]);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(cli.timeout, Some(10));
        assert!(matches!(cli.command, Command::Status { .. }));
    }

    #[test]
    fn cli_parses_bureau_subcommands() {
        let cli = Cli::parse_from(["credguard", "bureau", "metrics"]);
        match cli.command {
            Command::Bureau { action } => assert!(matches!(action, BureauCommand::Metrics)),
            _ => panic!("expected Bureau command"),
        }
    }

    #[test]
    fn cli_verify() {
        Cli::command().debug_assert();
    }
}
