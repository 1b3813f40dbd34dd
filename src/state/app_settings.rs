use log::LevelFilter;

#[derive(Debug, Default, Clone)]
pub struct AppSettings {
    pub full_screen: bool,
    pub log_level: Option<LevelFilter>,
}

impl AppSettings {
    /// Level comes from FUTNORTE_LOG (error/warn/info/debug/trace).
    pub fn load() -> Self {
        let log_level = std::env::var("FUTNORTE_LOG")
            .ok()
            .and_then(|v| v.parse::<LevelFilter>().ok());
        Self { full_screen: false, log_level }
    }
}
