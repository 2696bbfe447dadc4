pub mod gateway;
pub mod generate;
pub mod onboard;
pub mod options;
