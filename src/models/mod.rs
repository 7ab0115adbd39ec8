pub mod month;
pub mod raw;
pub mod session;
pub mod year;

pub use month::WorkMonth;
pub use raw::WorkSessionRaw;
pub use session::WorkSession;
pub use year::WorkYear;
