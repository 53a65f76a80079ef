use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::logging::LoggingConfig;

/// The only configuration version this build understands.
pub const CONFIG_VERSION: &str = "1.0.0";

/// Prefix for environment overrides, nested keys split on `__`.
pub const ENV_PREFIX: &str = "HELLO_BACKEND_";

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize, JsonSchema)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ConfigV1),
}

/// Main config for v1.0.0: where to listen and how to log.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct ConfigV1 {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ConfigV1 {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ConfigV1 {
    /// Returns the `"host:port"` string the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load config from defaults, the YAML file at `path` (if it exists) and the
/// environment, later sources overriding earlier ones.
///
/// `HOST` and `PORT` are honoured as-is; everything else can be overridden
/// with `HELLO_BACKEND_` variables, e.g. `HELLO_BACKEND_LOGGING__FORMAT=json`.
pub fn load_config(path: impl AsRef<Path>) -> Result<ConfigV1, figment::Error> {
    let figment = Figment::new()
        .merge(Serialized::defaults(ConfigV1::default()))
        .merge(Serialized::default("version", CONFIG_VERSION))
        .merge(Yaml::file(path.as_ref()))
        .merge(Env::raw().only(&["HOST", "PORT"]))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));

    match figment.extract::<Config>()? {
        Config::ConfigV1(c) => Ok(c),
    }
    // handle configuration migration between versions here when necessary
}

/// Render the JSON schema for the configuration.
pub fn config_schema() -> serde_json::Result<String> {
    let schema = schema_for!(Config);
    serde_json::to_string_pretty(&schema)
}

/// Print the JSON schema for the configuration to stdout.
pub fn print_schema() -> serde_json::Result<()> {
    println!("{}", config_schema()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_bind_all_interfaces_on_8080() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let config = load_config("config.yaml")?;
            assert_eq!(config.host, "0.0.0.0");
            assert_eq!(config.port, 8080);
            assert_eq!(config.bind_address(), "0.0.0.0:8080");
            assert_eq!(config.logging.level, "info");
            assert_eq!(config.logging.format, "console");
            assert_eq!(config.logging.service_name, "hello-backend");
            Ok(())
        });
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file(
                "config.yaml",
                r#"
version: "1.0.0"
host: "127.0.0.1"
port: 9000
logging:
  level: "debug"
  format: "json"
"#,
            )?;

            let config = load_config("config.yaml")?;
            assert_eq!(config.bind_address(), "127.0.0.1:9000");
            assert_eq!(config.logging.level, "debug");
            assert_eq!(config.logging.format, "json");
            // untouched nested keys keep their defaults
            assert_eq!(config.logging.service_version, "1.0.0");
            Ok(())
        });
    }

    #[test]
    fn port_env_var_overrides_file() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("config.yaml", "port: 9000\n")?;
            jail.set_env("PORT", "3001");

            let config = load_config("config.yaml")?;
            assert_eq!(config.port, 3001);
            assert_eq!(config.host, "0.0.0.0");
            Ok(())
        });
    }

    #[test]
    fn prefixed_env_vars_reach_nested_keys() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("HELLO_BACKEND_HOST", "10.0.0.1");
            jail.set_env("HELLO_BACKEND_LOGGING__FORMAT", "json");

            let config = load_config("config.yaml")?;
            assert_eq!(config.host, "10.0.0.1");
            assert_eq!(config.logging.format, "json");
            Ok(())
        });
    }

    #[test]
    fn unknown_version_is_rejected() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("config.yaml", "version: \"2.0.0\"\n")?;

            assert!(load_config("config.yaml").is_err());
            Ok(())
        });
    }

    #[test]
    fn numeric_looking_env_values_load_as_strings() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("HELLO_BACKEND_LOGGING__SERVICE_VERSION", "2.0");
            jail.set_env("HELLO_BACKEND_LOGGING__SERVICE_NAME", "42");

            let config = load_config("config.yaml")?;
            assert_eq!(config.logging.service_version, "2.0");
            assert_eq!(config.logging.service_name, "42");
            Ok(())
        });
    }

    #[test]
    fn numeric_yaml_values_load_as_strings() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file(
                "config.yaml",
                "logging:\n  service_version: 3\n  level: debug\n",
            )?;

            let config = load_config("config.yaml")?;
            assert_eq!(config.logging.service_version, "3");
            assert_eq!(config.logging.level, "debug");
            Ok(())
        });
    }

    /// Finds `name` under any `properties` object in a JSON schema.
    fn find_property<'a>(schema: &'a serde_json::Value, name: &str) -> Option<&'a serde_json::Value> {
        match schema {
            serde_json::Value::Object(map) => map
                .get("properties")
                .and_then(|props| props.get(name))
                .or_else(|| map.values().find_map(|v| find_property(v, name))),
            serde_json::Value::Array(items) => items.iter().find_map(|v| find_property(v, name)),
            _ => None,
        }
    }

    #[test]
    fn schema_tags_config_with_version() {
        let schema: serde_json::Value =
            serde_json::from_str(&config_schema().unwrap()).unwrap();

        let version = find_property(&schema, "version").expect("schema has no version property");
        let tag = version
            .get("enum")
            .and_then(|values| values.get(0))
            .or_else(|| version.get("const"))
            .expect("version is not a fixed tag");
        assert_eq!(tag, CONFIG_VERSION);

        assert!(find_property(&schema, "port").is_some());
        assert!(find_property(&schema, "service_version").is_some());
    }

    #[test]
    fn invalid_port_is_rejected() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("PORT", "not-a-port");

            assert!(load_config("config.yaml").is_err());
            Ok(())
        });
    }
}
