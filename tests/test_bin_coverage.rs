use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp config");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp config");
    file
}

#[allow(dead_code)]
mod momentum_net_bin {
    include!("../src/main.rs");

    #[cfg(test)]
    mod coverage_tests {
        use super::*;

        #[test]
        fn test_demo_spec_without_config() {
            let spec = demo_spec(None, 7, None, None).unwrap();
            assert_eq!(spec, NetworkSpec::new(4, 7, 1));
        }

        #[test]
        fn test_demo_spec_flags_override_without_config() {
            let spec = demo_spec(None, 3, Some(0.9), Some(0.2)).unwrap();
            assert_eq!(spec, NetworkSpec::new(4, 3, 1).with_learn_rate(0.9).with_momentum(0.2));
        }

        #[test]
        fn test_demo_spec_reads_config_and_ignores_hidden() {
            let temp = crate::write_temp_config(
                r#"{"input_size":4,"hidden_size":6,"output_size":1,"learn_rate":0.3,"momentum":0.1}"#,
            );
            let spec = demo_spec(temp.path().to_str(), 2, None, None).unwrap();
            assert_eq!(spec, NetworkSpec::new(4, 6, 1).with_learn_rate(0.3).with_momentum(0.1));
        }

        #[test]
        fn test_demo_spec_overrides_win_over_config() {
            let temp = crate::write_temp_config(
                r#"{"input_size":4,"hidden_size":6,"output_size":1,"learn_rate":0.3,"momentum":0.1}"#,
            );
            let spec = demo_spec(temp.path().to_str(), 2, Some(1.2), Some(0.0)).unwrap();
            assert_eq!(spec.hidden_size, 6);
            assert_eq!(spec.learn_rate, 1.2);
            assert_eq!(spec.momentum, 0.0);

            let spec = demo_spec(temp.path().to_str(), 2, None, Some(0.5)).unwrap();
            assert_eq!(spec.learn_rate, 0.3);
            assert_eq!(spec.momentum, 0.5);
        }

        #[test]
        fn test_demo_spec_bad_config_is_an_error() {
            let temp = crate::write_temp_config("{}");
            assert!(demo_spec(temp.path().to_str(), 4, None, None).is_err());
        }

        #[test]
        fn test_cli_parses_demo_flags() {
            let cli = Cli::try_parse_from([
                "momentum-net", "demo", "--hidden", "5", "--learn-rate", "0.7", "-i", "10",
            ])
            .unwrap();
            match cli.command {
                Commands::Demo { config, hidden, learn_rate, momentum, iterations, seed } => {
                    assert!(config.is_none());
                    assert_eq!(hidden, 5);
                    assert_eq!(learn_rate, Some(0.7));
                    assert_eq!(momentum, None);
                    assert_eq!(iterations, 10);
                    assert_eq!(seed, 0);
                }
                Commands::InitConfig { .. } => panic!("expected demo"),
            }
        }

        #[test]
        fn test_run_demo_rejects_mismatched_config() {
            assert!(run_demo(&NetworkSpec::new(4, 4, 1), 3, 1).is_ok());
            assert!(run_demo(&NetworkSpec::new(64, 32, 1), 3, 1).is_err());
        }
    }
}
