use std::fs;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // Necessary for ESP-IDF
    embuild::espidf::sysenv::output();

    // Add crash log helper for better panic diagnostics
    println!("cargo:rustc-link-arg=-Wl,--undefined=esp_backtrace_print_app_description");

    // Read WiFi configuration if it exists
    let wifi_config_path = "wifi_config.h";
    println!("cargo:rerun-if-changed={}", wifi_config_path);
    if Path::new(wifi_config_path).exists() {
        let contents = fs::read_to_string(wifi_config_path)?;

        for (define, env) in [
            ("#define WIFI_SSID", "WIFI_SSID"),
            ("#define WIFI_PASSWORD", "WIFI_PASSWORD"),
            ("#define MANIFEST_URL", "MANIFEST_URL"),
        ] {
            let value = contents
                .lines()
                .find(|l| l.trim_start().starts_with(define))
                .and_then(|l| l.split('"').nth(1));

            match value {
                Some(value) => println!("cargo:rustc-env={}={}", env, value),
                // The manifest URL is optional; credentials must always exist
                None if env != "MANIFEST_URL" => println!("cargo:rustc-env={}=", env),
                None => {}
            }
        }
    } else {
        // Use empty defaults if no config file
        println!("cargo:rustc-env=WIFI_SSID=");
        println!("cargo:rustc-env=WIFI_PASSWORD=");
        println!("cargo:warning=wifi_config.h not found! Copy wifi_config.h.example to wifi_config.h and add your credentials.");
    }

    Ok(())
}
