pub mod calendar_month;
pub mod climate_variable;
pub mod daily_frame;
pub mod period;
