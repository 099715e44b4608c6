//! Federal Form 1040 and its schedules.

mod f1040;
mod f2441;
mod f8959;
mod f8960;
mod schedule1;
mod schedule2;
mod schedule3;
mod schedule8812;
mod schedule_b;
mod schedule_eic;

pub use f1040::F1040;
pub use f2441::F2441;
pub use f8959::F8959;
pub use f8960::F8960;
pub use schedule1::Schedule1;
pub use schedule2::Schedule2;
pub use schedule3::Schedule3;
pub use schedule8812::Schedule8812;
pub use schedule_b::ScheduleB;
pub use schedule_eic::ScheduleEic;
