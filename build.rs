// ============================================================================
// BUILD SCRIPT - .env → variables de compilación para option_env!()
// ============================================================================
// Solo se reenvían las claves que lee config.rs. Las variables del entorno
// real tienen prioridad sobre el archivo .env.
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;

/// Claves leídas con option_env!() en src/config.rs
const CONFIG_KEYS: [&str; 6] = [
    "API_BASE_URL",
    "ENABLE_LOGGING",
    "MIN_PASSWORD_LENGTH",
    "SUCCESS_MESSAGE_MS",
    "REGISTER_REDIRECT_MS",
    "LOGIN_REDIRECT_MS",
];

/// `KEY=VALUE` (valor opcionalmente entre comillas); comentarios y vacías → None
fn parse_env_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    let value = value.trim();
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);
    Some((key.trim(), value))
}

fn forward_env_file(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        println!("cargo:warning=No se pudo leer {}", path.display());
        return;
    };

    for (key, value) in contents.lines().filter_map(parse_env_line) {
        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=Clave desconocida en .env ignorada: {}", key);
            continue;
        }
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}

fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");
        forward_env_file(env_file);
    } else {
        println!("cargo:warning=Sin .env: se usan los valores por defecto de config.rs (copiar .env.example a .env)");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
}
