//! Choreo Editor Library.
//! Kurven-Editor für stückweise polynomiale Motor-Trajektorien,
//! als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod comm;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    EditHistory, EditorCommand, EditorController, EditorIntent, EditorState, Transport,
    TransportState, ViewState,
};
pub use comm::{
    BackendReply, BackendRequest, BehaviorNotice, ConfigInfo, MotorInfo, MotorUpdate, RequestKind,
    SplineRecord, TrajectorySample,
};
pub use core::{BoundingBox, Spline, SplineError, ViewportTransform};
pub use shared::EditorOptions;
pub use ui::PanZoomController;
