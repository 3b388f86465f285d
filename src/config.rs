//! Configuração do CLI carregada a partir de `credguard.toml`.
//!
//! A struct [`CredGuardConfig`] contém todos os parâmetros configuráveis.
//! Valores não presentes no arquivo usam defaults sensíveis.
//! A variável de ambiente `CREDGUARD_API_KEY` tem precedência sobre o arquivo.

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

/// Configuração de nível superior carregada de `credguard.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CredGuardConfig {
    /// JWT token de autenticação na CredGuard API.
    #[serde(default)]
    pub api_key: String,

    /// URL base da API quando não especificada via CLI.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout em segundos para cada requisição HTTP.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

// Valor padrão para a URL base: produção.
fn default_base_url() -> String {
    "https://credguard.com".to_string()
}

// Valor padrão para o timeout: 30s.
fn default_timeout_secs() -> u64 {
    30
}

impl Default for CredGuardConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CredGuardConfig {
    /// Carrega a configuração de `credguard.toml` no diretório atual.
    /// Usa valores padrão se o arquivo não existir.
    pub fn load() -> Result<Self> {
        let path = Path::new("credguard.toml");
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<CredGuardConfig>(&contents)?
        } else {
            Self::default()
        };

        // Variável de ambiente tem precedência sobre o arquivo de configuração para a chave API.
        if let Ok(key) = std::env::var("CREDGUARD_API_KEY")
            && !key.is_empty()
        {
            config.api_key = key;
        }

        Ok(config)
    }
}
