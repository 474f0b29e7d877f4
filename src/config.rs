//! Page Configuration
//!
//! Reads JSON overrides from `<meta name="taskchanger-config" content="...">`.

use todo_store::AppConfig;

const CONFIG_META: &str = r#"meta[name="taskchanger-config"]"#;

/// Config from the host page, defaults where absent or invalid
pub fn load_config() -> AppConfig {
    parse_config(meta_content().as_deref())
}

fn meta_content() -> Option<String> {
    web_sys::window()?
        .document()?
        .query_selector(CONFIG_META)
        .ok()??
        .get_attribute("content")
}

fn parse_config(content: Option<&str>) -> AppConfig {
    let Some(content) = content.filter(|text| !text.trim().is_empty()) else {
        return AppConfig::default();
    };
    AppConfig::from_json(content).unwrap_or_else(|err| {
        log::warn!("ignoring invalid page config: {}", err);
        AppConfig::default()
    })
}
