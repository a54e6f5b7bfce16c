//! Máquina de estados del ciclo de vida de un transporte
//!
//! El flujo avanza `pending → in_transit → arrived → unloading → completed`;
//! `cancelled` es alcanzable desde cualquier estado no terminal. Una vez en
//! `completed` o `cancelled` no hay más transiciones.
//!
//! La verificación corre en este orden: pertenencia al enum (400),
//! existencia de la fila (404), legalidad de la transición (409) y
//! permiso del rol (403).

use crate::utils::errors::AppError;
use crate::utils::validation::TRANSPORT_STATUSES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportStatus {
    Pending,
    InTransit,
    Arrived,
    Unloading,
    Completed,
    Cancelled,
}

impl TransportStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "in_transit" => Some(Self::InTransit),
            "arrived" => Some(Self::Arrived),
            "unloading" => Some(Self::Unloading),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InTransit => "in_transit",
            Self::Arrived => "arrived",
            Self::Unloading => "unloading",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    pub fn can_transition_to(&self, next: TransportStatus) -> bool {
        use TransportStatus::*;
        match (self, next) {
            (Pending, InTransit) => true,
            (InTransit, Arrived) => true,
            (Arrived, Unloading) => true,
            (Unloading, Completed) => true,
            (current, Cancelled) => !current.is_terminal(),
            _ => false,
        }
    }
}

/// Qué roles pueden aplicar cada transición. `glpama` es de solo lectura:
/// no aplica ninguna.
pub fn role_may_transition(role: &str, from: TransportStatus, to: TransportStatus) -> bool {
    use TransportStatus::*;
    match (from, to) {
        (Pending, InTransit) | (InTransit, Arrived) => {
            matches!(role, "driver" | "supervisor" | "admin")
        }
        (Arrived, Unloading) | (Unloading, Completed) => {
            matches!(role, "fuelman" | "supervisor" | "admin")
        }
        (_, Cancelled) => matches!(role, "supervisor" | "admin"),
        _ => false,
    }
}

/// Autoriza el cambio de estado de un transporte ya localizado.
///
/// Devuelve el par (actual, solicitado) ya tipado para que el UPDATE
/// condicional ligue exactamente el estado observado aquí.
pub fn authorize_transition(
    current: &str,
    requested: &str,
    role: &str,
) -> Result<(TransportStatus, TransportStatus), AppError> {
    let from = TransportStatus::parse(current).ok_or_else(|| {
        AppError::Internal(format!("stored transport status '{}' is not valid", current))
    })?;
    let to = TransportStatus::parse(requested).ok_or_else(|| {
        AppError::ValidationError(vec![format!(
            "status: must be one of: {}",
            TRANSPORT_STATUSES.join(", ")
        )])
    })?;

    if !from.can_transition_to(to) {
        return Err(AppError::IllegalTransition {
            from: from.as_str().to_string(),
            to: to.as_str().to_string(),
        });
    }

    if !role_may_transition(role, from, to) {
        return Err(AppError::Forbidden(format!(
            "Role '{}' is not allowed to apply this status transition",
            role
        )));
    }

    Ok((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use TransportStatus::*;

    #[test]
    fn test_parse_round_trip() {
        for status in [Pending, InTransit, Arrived, Unloading, Completed, Cancelled] {
            assert_eq!(TransportStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TransportStatus::parse("bogus"), None);
        assert_eq!(TransportStatus::parse("PENDING"), None);
    }

    #[test]
    fn test_workflow_advances_in_order() {
        assert!(Pending.can_transition_to(InTransit));
        assert!(InTransit.can_transition_to(Arrived));
        assert!(Arrived.can_transition_to(Unloading));
        assert!(Unloading.can_transition_to(Completed));
    }

    #[test]
    fn test_workflow_cannot_skip_or_go_back() {
        assert!(!Pending.can_transition_to(Arrived));
        assert!(!Pending.can_transition_to(Completed));
        assert!(!InTransit.can_transition_to(Pending));
        assert!(!Arrived.can_transition_to(InTransit));
        assert!(!Unloading.can_transition_to(Arrived));
        assert!(!Pending.can_transition_to(Pending));
    }

    #[test]
    fn test_cancel_only_from_non_terminal() {
        assert!(Pending.can_transition_to(Cancelled));
        assert!(InTransit.can_transition_to(Cancelled));
        assert!(Arrived.can_transition_to(Cancelled));
        assert!(Unloading.can_transition_to(Cancelled));
        assert!(!Completed.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(Cancelled));
    }

    #[test]
    fn test_terminal_states_accept_nothing() {
        for next in [Pending, InTransit, Arrived, Unloading, Completed, Cancelled] {
            assert!(!Completed.can_transition_to(next));
            assert!(!Cancelled.can_transition_to(next));
        }
    }

    #[test]
    fn test_driver_moves_the_truck_but_does_not_unload() {
        assert!(role_may_transition("driver", Pending, InTransit));
        assert!(role_may_transition("driver", InTransit, Arrived));
        assert!(!role_may_transition("driver", Arrived, Unloading));
        assert!(!role_may_transition("driver", Unloading, Completed));
        assert!(!role_may_transition("driver", Pending, Cancelled));
    }

    #[test]
    fn test_fuelman_unloads_but_does_not_drive() {
        assert!(role_may_transition("fuelman", Arrived, Unloading));
        assert!(role_may_transition("fuelman", Unloading, Completed));
        assert!(!role_may_transition("fuelman", Pending, InTransit));
        assert!(!role_may_transition("fuelman", InTransit, Arrived));
    }

    #[test]
    fn test_supervisor_and_admin_may_do_everything_legal() {
        for role in ["supervisor", "admin"] {
            assert!(role_may_transition(role, Pending, InTransit));
            assert!(role_may_transition(role, InTransit, Arrived));
            assert!(role_may_transition(role, Arrived, Unloading));
            assert!(role_may_transition(role, Unloading, Completed));
            assert!(role_may_transition(role, InTransit, Cancelled));
        }
    }

    #[test]
    fn test_glpama_is_read_only() {
        for (from, to) in [
            (Pending, InTransit),
            (InTransit, Arrived),
            (Arrived, Unloading),
            (Unloading, Completed),
            (Pending, Cancelled),
        ] {
            assert!(!role_may_transition("glpama", from, to));
        }
    }

    #[test]
    fn test_authorize_transition_checks_legality_before_role() {
        // Transición ilegal: 409 aunque el rol tampoco pudiera aplicarla
        let err = authorize_transition("completed", "pending", "glpama").unwrap_err();
        assert!(matches!(err, AppError::IllegalTransition { .. }));

        // Transición legal pero rol sin permiso: 403
        let err = authorize_transition("arrived", "unloading", "driver").unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        // Estado solicitado fuera del enum: 400
        let err = authorize_transition("pending", "bogus", "admin").unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        // Camino feliz
        let (from, to) = authorize_transition("pending", "in_transit", "driver").unwrap();
        assert_eq!(from, Pending);
        assert_eq!(to, InTransit);
    }
}
