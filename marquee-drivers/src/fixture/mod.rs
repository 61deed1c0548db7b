//! RGB fixture drivers

pub mod pwm;

pub use pwm::PwmFixture;
