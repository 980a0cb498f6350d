use serde::Serialize;

use crate::types::{EventKind, LslType, Param};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignatureParam {
    pub ty: LslType,
    pub name: &'static str,
}

const fn p(ty: LslType, name: &'static str) -> SignatureParam {
    SignatureParam { ty, name }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventSignature {
    pub kind: EventKind,
    pub name: &'static str,
    pub params: &'static [SignatureParam],
}

impl EventSignature {
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Binds caller identifiers to this signature's types.
    pub fn bind(&self, idents: &[&str]) -> Result<Vec<Param>, crate::LslGenError> {
        if idents.len() != self.params.len() {
            return Err(crate::LslGenError::validation(
                "VALIDATION_EVENT_ARITY",
                format!(
                    "Event \"{}\" takes {} parameter(s), got {}.",
                    self.name,
                    self.params.len(),
                    idents.len()
                ),
            ));
        }
        self.params
            .iter()
            .zip(idents)
            .map(|(param, ident)| Param::new(param.ty, ident.trim()))
            .collect()
    }

    pub fn canonical_params(&self) -> Vec<Param> {
        self.params
            .iter()
            .map(|param| Param {
                ty: param.ty,
                ident: param.name.to_string(),
            })
            .collect()
    }

    /// `name(type ident, ...)` with the canonical identifiers.
    pub fn display(&self) -> String {
        format!(
            "{}({})",
            self.name,
            crate::types::join_params(&self.canonical_params())
        )
    }
}

// Remote data is deprecated in favour of the HTTP server events and is not listed.
pub static EVENT_CATALOG: [EventSignature; 39] = [
    EventSignature {
        kind: EventKind::Attach,
        name: "attach",
        params: &[p(LslType::Key, "id")],
    },
    EventSignature {
        kind: EventKind::AtRotTarget,
        name: "at_rot_target",
        params: &[
            p(LslType::Integer, "handle"),
            p(LslType::Rotation, "targetrot"),
            p(LslType::Rotation, "ourrot"),
        ],
    },
    EventSignature {
        kind: EventKind::AtTarget,
        name: "at_target",
        params: &[
            p(LslType::Integer, "tnum"),
            p(LslType::Vector, "targetpos"),
            p(LslType::Vector, "ourpos"),
        ],
    },
    EventSignature {
        kind: EventKind::Changed,
        name: "changed",
        params: &[p(LslType::Integer, "change")],
    },
    EventSignature {
        kind: EventKind::Collision,
        name: "collision",
        params: &[p(LslType::Integer, "num_detected")],
    },
    EventSignature {
        kind: EventKind::CollisionEnd,
        name: "collision_end",
        params: &[p(LslType::Integer, "num_detected")],
    },
    EventSignature {
        kind: EventKind::CollisionStart,
        name: "collision_start",
        params: &[p(LslType::Integer, "num_detected")],
    },
    EventSignature {
        kind: EventKind::Control,
        name: "control",
        params: &[
            p(LslType::Key, "id"),
            p(LslType::Integer, "level"),
            p(LslType::Integer, "edge"),
        ],
    },
    EventSignature {
        kind: EventKind::Dataserver,
        name: "dataserver",
        params: &[
            p(LslType::Key, "queryid"),
            p(LslType::String, "data"),
        ],
    },
    EventSignature {
        kind: EventKind::Email,
        name: "email",
        params: &[
            p(LslType::String, "time"),
            p(LslType::String, "address"),
            p(LslType::String, "subject"),
            p(LslType::String, "message"),
            p(LslType::Integer, "num_left"),
        ],
    },
    EventSignature {
        kind: EventKind::ExperiencePermissions,
        name: "experience_permissions",
        params: &[p(LslType::Key, "agent_id")],
    },
    EventSignature {
        kind: EventKind::ExperiencePermissionsDenied,
        name: "experience_permissions_denied",
        params: &[
            p(LslType::Key, "agent_id"),
            p(LslType::Integer, "reason"),
        ],
    },
    EventSignature {
        kind: EventKind::GameControl,
        name: "game_control",
        params: &[
            p(LslType::Key, "id"),
            p(LslType::Integer, "button_levels"),
            p(LslType::Integer, "button_edges"),
            p(LslType::List, "axes"),
        ],
    },
    EventSignature {
        kind: EventKind::HttpRequest,
        name: "http_request",
        params: &[
            p(LslType::Key, "request_id"),
            p(LslType::String, "method"),
            p(LslType::String, "body"),
        ],
    },
    EventSignature {
        kind: EventKind::HttpResponse,
        name: "http_response",
        params: &[
            p(LslType::Key, "request_id"),
            p(LslType::Integer, "status"),
            p(LslType::List, "metadata"),
            p(LslType::String, "body"),
        ],
    },
    EventSignature {
        kind: EventKind::LandCollision,
        name: "land_collision",
        params: &[p(LslType::Vector, "pos")],
    },
    EventSignature {
        kind: EventKind::LandCollisionEnd,
        name: "land_collision_end",
        params: &[p(LslType::Vector, "pos")],
    },
    EventSignature {
        kind: EventKind::LandCollisionStart,
        name: "land_collision_start",
        params: &[p(LslType::Vector, "pos")],
    },
    EventSignature {
        kind: EventKind::LinksetData,
        name: "linkset_data",
        params: &[
            p(LslType::Integer, "action"),
            p(LslType::String, "name"),
            p(LslType::String, "value"),
        ],
    },
    EventSignature {
        kind: EventKind::LinkMessage,
        name: "link_message",
        params: &[
            p(LslType::Integer, "sender_num"),
            p(LslType::Integer, "num"),
            p(LslType::String, "str"),
            p(LslType::Key, "id"),
        ],
    },
    EventSignature {
        kind: EventKind::Listen,
        name: "listen",
        params: &[
            p(LslType::Integer, "channel"),
            p(LslType::String, "name"),
            p(LslType::Key, "id"),
            p(LslType::String, "message"),
        ],
    },
    EventSignature {
        kind: EventKind::Money,
        name: "money",
        params: &[
            p(LslType::Key, "id"),
            p(LslType::Integer, "amount"),
        ],
    },
    EventSignature {
        kind: EventKind::MovingEnd,
        name: "moving_end",
        params: &[],
    },
    EventSignature {
        kind: EventKind::MovingStart,
        name: "moving_start",
        params: &[],
    },
    EventSignature {
        kind: EventKind::NotAtRotTarget,
        name: "not_at_rot_target",
        params: &[],
    },
    EventSignature {
        kind: EventKind::NotAtTarget,
        name: "not_at_target",
        params: &[],
    },
    EventSignature {
        kind: EventKind::NoSensor,
        name: "no_sensor",
        params: &[],
    },
    EventSignature {
        kind: EventKind::ObjectRez,
        name: "object_rez",
        params: &[p(LslType::Key, "id")],
    },
    EventSignature {
        kind: EventKind::OnRez,
        name: "on_rez",
        params: &[p(LslType::Integer, "start_param")],
    },
    EventSignature {
        kind: EventKind::PathUpdate,
        name: "path_update",
        params: &[
            p(LslType::Integer, "type"),
            p(LslType::List, "reserved"),
        ],
    },
    EventSignature {
        kind: EventKind::RunTimePermissions,
        name: "run_time_permissions",
        params: &[p(LslType::Integer, "perm")],
    },
    EventSignature {
        kind: EventKind::Sensor,
        name: "sensor",
        params: &[p(LslType::Integer, "num_detected")],
    },
    EventSignature {
        kind: EventKind::StateEntry,
        name: "state_entry",
        params: &[],
    },
    EventSignature {
        kind: EventKind::StateExit,
        name: "state_exit",
        params: &[],
    },
    EventSignature {
        kind: EventKind::Timer,
        name: "timer",
        params: &[],
    },
    EventSignature {
        kind: EventKind::TransactionResult,
        name: "transaction_result",
        params: &[
            p(LslType::Key, "id"),
            p(LslType::Integer, "success"),
            p(LslType::String, "data"),
        ],
    },
    EventSignature {
        kind: EventKind::Touch,
        name: "touch",
        params: &[p(LslType::Integer, "num_detected")],
    },
    EventSignature {
        kind: EventKind::TouchEnd,
        name: "touch_end",
        params: &[p(LslType::Integer, "num_detected")],
    },
    EventSignature {
        kind: EventKind::TouchStart,
        name: "touch_start",
        params: &[p(LslType::Integer, "num_detected")],
    },
];
