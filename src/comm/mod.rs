//! Vertrag zum externen Motor-Backend: Requests, Antworten, Stream-Typen.

pub mod discovery;
pub mod messages;
pub mod record;

pub use discovery::{BlockInfo, ConfigInfo, MotorInfo};
pub use messages::{
    BackendReply, BackendRequest, BehaviorNotice, MotorUpdate, RequestKind, TrajectorySample,
};
pub use record::{CoefficientCell, SplineRecord};
