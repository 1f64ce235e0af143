use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::monitoring::{Averages, MonitoringStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum UrgencyLevel {
    Baixa,
    Media,
    Alta,
}

impl From<MonitoringStatus> for UrgencyLevel {
    fn from(status: MonitoringStatus) -> Self {
        match status {
            MonitoringStatus::Regular => Self::Baixa,
            MonitoringStatus::Atencao => Self::Media,
            MonitoringStatus::Preocupante => Self::Alta,
        }
    }
}

/// Lifecycle of an alert once it reaches the sink. New alerts are always
/// `Ativo`; the sink owns every later transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AlertStatus {
    #[default]
    Ativo,
    Resolvido,
    Arquivado,
}

/// Escalation produced by the monitoring trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MonitoringAlert {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub status: MonitoringStatus,
    pub averages: Averages,
    pub title: String,
    pub description: String,
    pub urgency: UrgencyLevel,
    pub lifecycle: AlertStatus,
    pub generated_at: jiff::Timestamp,
}

impl MonitoringAlert {
    pub fn new(
        patient_id: Uuid,
        status: MonitoringStatus,
        averages: Averages,
        generated_at: jiff::Timestamp,
    ) -> Self {
        let description = format!(
            "Médias recentes: humor {:.2}, stress {:.2}, sono {:.2}h, energia {:.2}",
            averages.mood, averages.stress, averages.sleep, averages.energy,
        );
        Self {
            id: Uuid::new_v4(),
            patient_id,
            status,
            averages,
            title: format!("Padrão {} detectado", status.as_str().to_lowercase()),
            description,
            urgency: status.into(),
            lifecycle: AlertStatus::default(),
            generated_at,
        }
    }
}
