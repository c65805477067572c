mod service;
mod types;

pub use service::BackendService;
pub use types::{
    AnalysisReport, Appointment, DeleteAck, ImageAnalysisRequest, NewAppointment, NewPatient,
    NewReport, Patient, Report, SystemStatistics,
};
