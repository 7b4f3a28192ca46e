use portcullis::cli::{init, output::Output};
use portcullis::AppConfig;

fn quiet_output() -> Output {
    Output::no_color()
}

#[test]
fn test_init_scaffolds_deployment() {
    let dir = tempfile::tempdir().expect("tempdir");

    let result = init::run(
        init::InitConfig {
            path: dir.path().to_path_buf(),
            force: false,
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        &quiet_output(),
    );

    assert!(matches!(result, init::InitResult::Success));
    assert!(dir.path().join("portcullis.toml").exists());
    assert!(dir.path().join("data").is_dir());
    assert!(dir.path().join(".env.example").exists());
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().expect("tempdir");

    std::fs::write(dir.path().join("portcullis.toml"), "# existing").expect("write");

    let result = init::run(
        init::InitConfig {
            path: dir.path().to_path_buf(),
            force: false,
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        &quiet_output(),
    );

    assert!(matches!(result, init::InitResult::AlreadyExists));
    let content = std::fs::read_to_string(dir.path().join("portcullis.toml")).expect("read");
    assert_eq!(content, "# existing", "existing file must be untouched");
}

#[test]
fn test_init_force_overwrites() {
    let dir = tempfile::tempdir().expect("tempdir");

    std::fs::write(dir.path().join("portcullis.toml"), "# existing").expect("write");

    let result = init::run(
        init::InitConfig {
            path: dir.path().to_path_buf(),
            force: true,
            host: "0.0.0.0".to_string(),
            port: 8080,
        },
        &quiet_output(),
    );

    assert!(matches!(result, init::InitResult::Success));
    let content = std::fs::read_to_string(dir.path().join("portcullis.toml")).expect("read");
    assert!(content.contains("host = \"0.0.0.0\""));
    assert!(content.contains("port = 8080"));
}

#[test]
fn test_scaffolded_config_loads() {
    std::env::set_var("JWT_SECRET", "scaffold-test-secret-32-characters!!");

    let dir = tempfile::tempdir().expect("tempdir");

    init::run(
        init::InitConfig {
            path: dir.path().to_path_buf(),
            force: false,
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        &quiet_output(),
    );

    let config =
        AppConfig::load(dir.path().join("portcullis.toml")).expect("scaffolded config loads");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.auth.jwt_secret_env, "JWT_SECRET");
    assert_eq!(config.auth.jwt_expiry, 86400);
    assert_eq!(config.database.url, "./data/portcullis.db");
}
