//! Defines the LED light device and its brightness cache.

pub use crate::devices::brightness::BrightnessStore;
pub use crate::devices::led_light::LedLight;

mod brightness;
mod led_light;
