//! Progress reporting: S-curves and payment-period reconstruction.

mod payment;
mod s_curve;

pub use payment::{PaymentPeriodReconstructor, PaymentPeriodReport, TaskSummary};
pub use s_curve::{SCurvePoint, ScheduleCurve};
