pub mod temperature;
pub mod time;


pub use temperature::Temperature;
pub use time::Time;
