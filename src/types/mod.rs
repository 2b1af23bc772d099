pub mod any_date;
pub mod observation;
pub mod summary;
pub mod trend_series;
pub mod variable;
pub mod window;
