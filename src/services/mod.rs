// TabJump services
// Services provide capabilities the managers depend on: time, host access, settings.

pub mod settings_engine;
pub mod tab_host;
pub mod time_source;
