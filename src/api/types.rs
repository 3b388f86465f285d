//! Tipos de dados para as respostas da CredGuard API.
//!
//! Todas as respostas da API chegam embrulhadas no envelope
//! `{"result": {"data": ...}}`; erros chegam como `{"error": {"message": ...}}`.
//! As structs aqui derivam `Serialize`/`Deserialize` com renomeação camelCase
//! conforme o formato do serviço.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Envelope de sucesso usado por todos os endpoints: `{"result": {"data": T}}`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub result: ResultData<T>,
}

/// Camada interna do envelope contendo o payload propriamente dito.
#[derive(Debug, Deserialize)]
pub struct ResultData<T> {
    pub data: T,
}

/// Informações de um modelo de ML disponível no serviço.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    /// Identificador numérico do modelo.
    pub id: u64,
    /// Versão do modelo (ex.: "2.1.0").
    pub version: String,
    /// Produto ao qual o modelo se aplica.
    pub product: String,
    /// Métricas de avaliação; ausentes para modelos ainda não avaliados.
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub precision: Option<f64>,
    #[serde(default)]
    pub recall: Option<f64>,
    #[serde(default)]
    pub f1_score: Option<f64>,
    /// Se este é o modelo atualmente em produção.
    #[serde(default)]
    pub is_production: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Corpo da requisição para `drift.detect`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriftRequest {
    pub model_id: u64,
    pub job_id: String,
}

/// Resultado de uma detecção de drift sobre um modelo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriftDetection {
    /// Se o serviço considerou que houve drift.
    pub drift_detected: bool,
    /// Population Stability Index calculado.
    pub psi: f64,
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub detected_at: Option<DateTime<Utc>>,
}

impl DriftDetection {
    /// Drift crítico: PSI acima de 0.25.
    pub fn is_critical(&self) -> bool {
        self.psi > 0.25
    }

    /// Drift que merece atenção: PSI acima de 0.1.
    pub fn needs_attention(&self) -> bool {
        self.psi > 0.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_unwraps_data() {
        let raw = r#"{"result": {"data": {"id": 7, "version": "1.2.0", "product": "CARTAO"}}}"#;
        let envelope: Envelope<ModelInfo> = serde_json::from_str(raw).unwrap();
        let model = envelope.result.data;
        assert_eq!(model.id, 7);
        assert_eq!(model.version, "1.2.0");
        assert!(model.accuracy.is_none());
        assert!(!model.is_production);
    }

    #[test]
    fn model_info_full_payload() {
        let raw = r#"{
            "id": 3,
            "version": "2.0.1",
            "product": "EMPRESTIMO",
            "accuracy": 0.91,
            "precision": 0.88,
            "recall": 0.86,
            "f1Score": 0.87,
            "isProduction": true,
            "createdAt": "2026-01-15T12:00:00Z"
        }"#;
        let model: ModelInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(model.f1_score, Some(0.87));
        assert!(model.is_production);
        assert!(model.created_at.is_some());
    }

    #[test]
    fn drift_request_serializes_camel_case() {
        let req = DriftRequest {
            model_id: 12,
            job_id: "job-abc".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["modelId"], 12);
        assert_eq!(json["jobId"], "job-abc");
    }

    #[test]
    fn drift_psi_thresholds() {
        let mut drift = DriftDetection {
            drift_detected: true,
            psi: 0.3,
            status: "CRITICAL".into(),
            message: "Drift significativo detectado".into(),
            recommendation: Some("Retreinar o modelo".into()),
            detected_at: None,
        };
        assert!(drift.is_critical());
        assert!(drift.needs_attention());

        drift.psi = 0.15;
        assert!(!drift.is_critical());
        assert!(drift.needs_attention());

        drift.psi = 0.05;
        assert!(!drift.is_critical());
        assert!(!drift.needs_attention());
    }
}
