use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Config {
    pub lights: Vec<LightEntry>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LightEntry {
    pub id: String,
    pub name: String,
    /// Raw vendor color-mode byte as reported during identification.
    pub color_mode: u8,
    #[serde(default)]
    pub effects: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_light_entries() {
        let config: Config = toml::from_str(
            r#"
            [[lights]]
            id = "desk"
            name = "Desk lamp"
            color_mode = 2
            effects = ["police", "strobe"]

            [[lights]]
            id = "hall"
            name = "Hallway"
            color_mode = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.lights.len(), 2);
        assert_eq!(config.lights[0].id, "desk");
        assert_eq!(config.lights[0].effects, vec!["police", "strobe"]);
        assert_eq!(config.lights[1].color_mode, 5);
        assert!(config.lights[1].effects.is_empty());
    }
}
