//! Config Module
//!
//! Centralized tunables for the character controller. Every value has an
//! authoring default and can be overridden from JSON.

pub mod controller_config;

pub use controller_config::{
    AudioConfig, ConfigError, ControllerConfig, CrouchConfig, HeadLookConfig, JumpConfig,
    MovementConfig,
};
