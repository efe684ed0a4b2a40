//! Schedule handlers - progress curves and payment certificates.

mod generate_payment_report;
mod get_progress_curve;

pub use generate_payment_report::{
    GeneratePaymentReportHandler, GeneratePaymentReportQuery, GeneratePaymentReportResult,
};
pub use get_progress_curve::{
    CurveResolution, GetProgressCurveHandler, GetProgressCurveQuery, GetProgressCurveResult,
    DEFAULT_WEEKLY_THRESHOLD_DAYS,
};
